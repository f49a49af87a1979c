//! Error types for leakgate.
//!
//! Only the directory walker surfaces errors; the hook path is fail-open
//! and converts every internal failure into an allow verdict instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeakgateError {
    #[error("Directory does not exist: {}", .0.display())]
    DirNotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Result type alias for leakgate operations.
pub type Result<T> = std::result::Result<T, LeakgateError>;
