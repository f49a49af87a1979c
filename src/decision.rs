//! Decision engine: maps scan outcomes to verdicts and exit codes, and
//! renders the human-readable diagnostic.
//!
//! The mapping is a fixed table. Pre-delivery findings block with exit code
//! 2; post-delivery findings only warn, because the content has already been
//! seen and blocking would destroy work without protecting anything. Skipped
//! or empty scans always allow.

use crate::scanner::Finding;
use std::collections::BTreeMap;

/// Which side of the AI exchange is being gated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Content about to be delivered to the assistant.
    Pre,
    /// Content already produced by a tool the assistant ran.
    Post,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Pre => "pre",
            Mode::Post => "post",
        }
    }
}

/// Verdict for one hook invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Allow,
    Block,
    Warn,
}

/// Verdict plus the process exit code that communicates it to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub outcome: Outcome,
    pub exit_code: i32,
}

/// Findings attributed to one scanned source.
#[derive(Debug, Clone)]
pub struct SourceFindings {
    /// Report label: a file path, `[tool stdout]`, `[user message #1]`.
    pub source: String,
    pub findings: Vec<Finding>,
}

/// Apply the decision table.
pub fn decide(mode: Mode, findings_present: bool) -> Decision {
    match (mode, findings_present) {
        (Mode::Pre, true) => Decision {
            outcome: Outcome::Block,
            exit_code: 2,
        },
        (Mode::Post, true) => Decision {
            outcome: Outcome::Warn,
            exit_code: 0,
        },
        (_, false) => Decision {
            outcome: Outcome::Allow,
            exit_code: 0,
        },
    }
}

const MAX_TYPES_PER_SOURCE: usize = 3;
const MAX_LINES_PER_TYPE: usize = 5;

/// Render the diagnostic for non-empty findings.
///
/// Per source, findings are grouped by credential label; long lists are
/// truncated with a `+N more` marker so a pathological payload cannot flood
/// the transcript. Matched text is never included.
pub fn findings_message(mode: Mode, sources: &[SourceFindings]) -> String {
    let mut lines = Vec::new();
    match mode {
        Mode::Pre => {
            lines.push("SECRET DETECTED (submission blocked)".to_string());
        }
        Mode::Post => {
            lines.push("SECRET DETECTED in recent output".to_string());
        }
    }

    for source in sources {
        if source.findings.is_empty() {
            continue;
        }
        lines.push(format!("  {}:", source.source));

        // Group by label, keeping first-seen order within the source.
        let mut order = Vec::new();
        let mut by_label: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for finding in &source.findings {
            if !by_label.contains_key(finding.label) {
                order.push(finding.label);
            }
            by_label.entry(finding.label).or_default().push(finding.line);
        }

        let shown = order.len().min(MAX_TYPES_PER_SOURCE);
        for label in &order[..shown] {
            let line_nums = &by_label[label];
            let mut shown_lines: Vec<String> = line_nums
                .iter()
                .take(MAX_LINES_PER_TYPE)
                .map(usize::to_string)
                .collect();
            if line_nums.len() > MAX_LINES_PER_TYPE {
                shown_lines.push(format!("+{} more", line_nums.len() - MAX_LINES_PER_TYPE));
            }
            lines.push(format!("    - {} (line {})", label, shown_lines.join(", ")));
        }
        if order.len() > MAX_TYPES_PER_SOURCE {
            lines.push(format!(
                "    - +{} more secret type(s)",
                order.len() - MAX_TYPES_PER_SOURCE
            ));
        }
    }

    if mode == Mode::Post {
        lines.push("Be careful with this sensitive data!".to_string());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_source(findings: Vec<Finding>) -> Vec<SourceFindings> {
        vec![SourceFindings {
            source: "/tmp/config.env".to_string(),
            findings,
        }]
    }

    #[test]
    fn test_pre_with_findings_blocks_exit_2() {
        let d = decide(Mode::Pre, true);
        assert_eq!(d.outcome, Outcome::Block);
        assert_eq!(d.exit_code, 2);
    }

    #[test]
    fn test_post_with_findings_warns_exit_0() {
        let d = decide(Mode::Post, true);
        assert_eq!(d.outcome, Outcome::Warn);
        assert_eq!(d.exit_code, 0);
    }

    #[test]
    fn test_no_findings_allows_in_both_modes() {
        for mode in [Mode::Pre, Mode::Post] {
            let d = decide(mode, false);
            assert_eq!(d.outcome, Outcome::Allow);
            assert_eq!(d.exit_code, 0);
        }
    }

    #[test]
    fn test_message_pre_heading_and_grouping() {
        let msg = findings_message(
            Mode::Pre,
            &one_source(vec![
                Finding { label: "AWS Access Key ID", line: 3 },
                Finding { label: "AWS Access Key ID", line: 9 },
            ]),
        );
        assert!(msg.starts_with("SECRET DETECTED (submission blocked)"));
        assert!(msg.contains("/tmp/config.env:"));
        assert!(msg.contains("AWS Access Key ID (line 3, 9)"));
        assert!(!msg.contains("Be careful"));
    }

    #[test]
    fn test_message_post_heading_and_footer() {
        let msg = findings_message(
            Mode::Post,
            &one_source(vec![Finding { label: "Slack Token", line: 1 }]),
        );
        assert!(msg.starts_with("SECRET DETECTED in recent output"));
        assert!(msg.ends_with("Be careful with this sensitive data!"));
    }

    #[test]
    fn test_message_truncates_lines_per_type() {
        let findings = (1..=8)
            .map(|line| Finding { label: "Generic Password Assignment", line })
            .collect();
        let msg = findings_message(Mode::Pre, &one_source(findings));
        assert!(msg.contains("line 1, 2, 3, 4, 5, +3 more"));
        assert!(!msg.contains("line 1, 2, 3, 4, 5, 6"));
    }

    #[test]
    fn test_message_truncates_types_per_source() {
        let findings = vec![
            Finding { label: "A", line: 1 },
            Finding { label: "B", line: 2 },
            Finding { label: "C", line: 3 },
            Finding { label: "D", line: 4 },
            Finding { label: "E", line: 5 },
        ];
        let msg = findings_message(Mode::Pre, &one_source(findings));
        assert!(msg.contains("+2 more secret type(s)"));
        assert!(!msg.contains("- D "));
    }

    #[test]
    fn test_message_multiple_sources() {
        let sources = vec![
            SourceFindings {
                source: "[Bash stdout]".to_string(),
                findings: vec![Finding { label: "GitHub Personal Access Token", line: 1 }],
            },
            SourceFindings {
                source: "[user message #1]".to_string(),
                findings: vec![Finding { label: "OpenAI API Key", line: 2 }],
            },
        ];
        let msg = findings_message(Mode::Post, &sources);
        assert!(msg.contains("[Bash stdout]:"));
        assert!(msg.contains("[user message #1]:"));
    }

    #[test]
    fn test_message_never_contains_secret_text() {
        // The message is built from labels and line numbers only; there is
        // no way for matched text to enter it. Spot-check the shape anyway.
        let msg = findings_message(
            Mode::Pre,
            &one_source(vec![Finding { label: "AWS Access Key ID", line: 1 }]),
        );
        assert!(!msg.contains("AKIA"));
    }
}
