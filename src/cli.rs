use crate::adapter::Client;
use crate::decision::Mode;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "leakgate",
    version,
    about = "Credential leak gate for AI coding assistant hooks",
    long_about = "leakgate sits between a developer and an AI coding assistant, scanning \
                  content for leaked credentials before it is delivered (blocking) and \
                  after tools produce it (warning). It can also scan a directory tree \
                  to tune the pattern set."
)]
pub struct Cli {
    /// Hook mode: pre blocks on findings, post only warns
    #[arg(short, long, value_enum, required_unless_present = "scan_dir")]
    pub mode: Option<Mode>,

    /// Host integration; detected from the payload when omitted
    #[arg(short, long, value_enum)]
    pub client: Option<Client>,

    /// Scan a directory tree instead of running as a hook
    #[arg(long, value_name = "DIR", conflicts_with_all = ["mode", "client"])]
    pub scan_dir: Option<PathBuf>,

    /// Additional directory or file names to exclude (repeatable)
    #[arg(long, value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Stop after scanning this many files
    #[arg(long, value_name = "N")]
    pub max_files: Option<usize>,

    /// Directory report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Show per-file progress on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_hook_mode() {
        let cli = Cli::try_parse_from(["leakgate", "--mode", "pre"]).unwrap();
        assert_eq!(cli.mode, Some(Mode::Pre));
        assert!(cli.client.is_none());
    }

    #[test]
    fn test_parse_client_override() {
        let cli =
            Cli::try_parse_from(["leakgate", "--mode", "post", "--client", "claude_code"]).unwrap();
        assert_eq!(cli.client, Some(Client::ClaudeCode));
    }

    #[test]
    fn test_mode_required_without_scan_dir() {
        assert!(Cli::try_parse_from(["leakgate"]).is_err());
    }

    #[test]
    fn test_scan_dir_conflicts_with_mode() {
        assert!(Cli::try_parse_from(["leakgate", "--mode", "pre", "--scan-dir", "/tmp"]).is_err());
    }

    #[test]
    fn test_scan_dir_accepts_excludes() {
        let cli = Cli::try_parse_from([
            "leakgate",
            "--scan-dir",
            "/tmp",
            "--exclude",
            "vendor",
            "--exclude",
            "fixtures",
            "--max-files",
            "100",
        ])
        .unwrap();
        assert_eq!(cli.exclude, vec!["vendor", "fixtures"]);
        assert_eq!(cli.max_files, Some(100));
    }
}
