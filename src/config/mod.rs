//! Configuration management

use super::types::DropCopyError;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(
    name = "dropcopy",
    version,
    about = "Copy a directory tree into your Dropbox folder",
    override_usage = "dropcopy <Source> <Destination>"
)]
pub struct Cli {
    /// The full path of the directory to copy to Dropbox
    #[arg(value_name = "Source")]
    pub source: PathBuf,

    /// The path of the directory to copy to, relative to Dropbox
    #[arg(value_name = "Destination")]
    pub destination: PathBuf,

    /// Extension to copy (repeatable or comma separated; default: .dll,.exe)
    #[arg(long = "ext", value_name = "EXT", value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Read the Dropbox root from this info.json instead of the standard locations
    #[arg(long = "info", value_name = "FILE")]
    pub info_file: Option<PathBuf>,
}

/// Global configuration for dropcopy
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Source directory
    pub source: PathBuf,

    /// Destination, relative to the Dropbox root
    pub destination: PathBuf,

    /// Extensions to copy, each with a leading dot (empty = defaults)
    pub extensions: Vec<String>,

    /// Explicit info.json, bypassing the platform search
    pub info_file: Option<PathBuf>,
}

impl TryFrom<Cli> for Config {
    type Error = DropCopyError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let extensions = cli
            .extensions
            .iter()
            .map(|ext| normalize_extension(ext))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            source: cli.source,
            destination: cli.destination,
            extensions,
            info_file: cli.info_file,
        })
    }
}

/// Trim `ext` and give it a leading dot (`dll` → `.dll`)
fn normalize_extension(ext: &str) -> Result<String, DropCopyError> {
    let trimmed = ext.trim();
    let bare = trimmed.strip_prefix('.').unwrap_or(trimmed);
    if bare.is_empty() {
        return Err(DropCopyError::InvalidParameters(format!(
            "empty extension '{ext}'"
        )));
    }
    if bare.contains(['/', '\\']) {
        return Err(DropCopyError::InvalidParameters(format!(
            "extension '{ext}' must not contain a path separator"
        )));
    }
    Ok(format!(".{bare}"))
}
