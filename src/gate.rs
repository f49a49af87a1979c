//! Content admissibility: size ceiling and binary heuristic.
//!
//! The gate decides whether a payload is eligible for scanning at all. It is
//! a pure function of the content bytes; it never reads the filesystem.

use serde::Serialize;

/// Safety cap per payload. Content above this is skipped, not truncated.
pub const MAX_SCAN_BYTES: usize = 5 * 1024 * 1024;

/// Prefix sampled by the binary heuristic.
pub const SAMPLE_BYTES: usize = 4096;

/// Fraction of non-text bytes in the sample above which content is binary.
const BINARY_THRESHOLD: f64 = 0.30;

/// Why a payload was not scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    TooLarge,
    Binary,
    /// File-read events where the content could not be loaded.
    Unreadable,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::TooLarge => "too_large",
            SkipReason::Binary => "binary",
            SkipReason::Unreadable => "unreadable",
        }
    }
}

/// Gate verdict for a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admissibility {
    Admissible,
    Skip(SkipReason),
}

/// Classify content as admissible or skipped.
///
/// The size ceiling applies regardless of contents; the binary heuristic
/// samples the raw prefix so short binary payloads are still caught.
pub fn admit(content: &[u8]) -> Admissibility {
    if content.len() > MAX_SCAN_BYTES {
        return Admissibility::Skip(SkipReason::TooLarge);
    }
    let sample = &content[..content.len().min(SAMPLE_BYTES)];
    if is_probably_binary(sample) {
        return Admissibility::Skip(SkipReason::Binary);
    }
    Admissibility::Admissible
}

/// Heuristic binary check: NUL byte, or too many bytes outside the
/// printable/whitespace range. Empty content is text.
pub fn is_probably_binary(block: &[u8]) -> bool {
    if block.is_empty() {
        return false;
    }
    if block.contains(&0) {
        return true;
    }
    let nontext = block
        .iter()
        .filter(|&&b| !(0x20..0x7f).contains(&b) && !matches!(b, b'\n' | b'\r' | b'\t' | 0x08))
        .count();
    nontext as f64 / block.len() as f64 > BINARY_THRESHOLD
}
