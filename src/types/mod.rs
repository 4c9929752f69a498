//! Core type definitions for dropcopy

mod error;
mod extensions;

pub use error::{DropCopyError, ErrorCode};
pub use extensions::{extension_of, ExtensionSet, DEFAULT_EXTENSIONS};
