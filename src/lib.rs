//! # dropcopy - Copy build outputs into Dropbox
//!
//! Finds the local Dropbox folder from the client's `info.json` and mirrors a
//! directory tree into it, copying only files with allowed extensions
//! (`.dll` and `.exe` unless told otherwise).

// Module declarations
pub mod config;
pub mod locator;
pub mod executor;
pub mod ui;
pub mod commands;
pub mod types;

// Re-export commonly used types
pub use types::{DropCopyError, ErrorCode, ExtensionSet};
pub use config::Config;
pub use locator::ConfigLocator;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
