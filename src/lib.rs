//! leakgate guards the channel between a developer and an AI coding
//! assistant. It runs as a hook for Claude Code and Cursor, scanning content
//! for leaked credentials before delivery (pre mode, blocking) and after
//! tool execution (post mode, warning), and can also walk a directory tree
//! to tune the pattern set. Findings report a credential label and line
//! number only; matched text is never echoed anywhere.

pub mod adapter;
pub mod cli;
pub mod decision;
pub mod error;
pub mod gate;
pub mod hook;
pub mod registry;
pub mod response;
pub mod scanner;
pub mod walker;

pub use adapter::{Client, Content, OriginKind, ScanRequest};
pub use cli::Cli;
pub use decision::{Decision, Mode, Outcome};
pub use error::{LeakgateError, Result};
pub use registry::Registry;
pub use scanner::{Finding, ScanResult};
