use clap::Parser;
use colored::Colorize;
use leakgate::{
    cli::{Cli, OutputFormat},
    hook,
    registry::Registry,
    walker,
};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let default_filter = if cli.verbose { "leakgate=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(ref dir) = cli.scan_dir {
        return run_directory_scan(&cli, dir);
    }

    // clap enforces --mode whenever --scan-dir is absent
    let Some(mode) = cli.mode else {
        return ExitCode::from(2);
    };
    ExitCode::from(hook::run_hook(mode, cli.client) as u8)
}

fn run_directory_scan(cli: &Cli, dir: &Path) -> ExitCode {
    let options = walker::WalkOptions {
        max_files: cli.max_files,
        verbose: cli.verbose,
        ..Default::default()
    }
    .with_extra_excludes(&cli.exclude);

    match walker::scan_directory(dir, &options, Registry::builtin()) {
        Ok(report) => {
            match cli.format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
                ),
                OutputFormat::Terminal => println!("{}", walker::format_report(&report)),
            }
            if report.files_with_findings > 0 {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("{} {e}", "Error:".red());
            ExitCode::from(2)
        }
    }
}
