//! Main copy command

use crate::executor::{CopyStats, TreeCopier};
use crate::locator::ConfigLocator;
use crate::types::{DropCopyError, ExtensionSet};
use crate::ui::ProgressLog;
use crate::Config;
use log::{debug, info};
use std::fs;
use std::io::Write;

/// Run the copy operation
///
/// Resolves the Dropbox root through `locator`, creates
/// `root/config.destination` and copies `config.source` into it, writing
/// progress lines to `out`. A missing source still logs its top-level
/// `source => destination` line before failing.
pub fn run<W: Write>(
    config: &Config,
    locator: &ConfigLocator,
    out: W,
) -> Result<CopyStats, DropCopyError> {
    let allowed = ExtensionSet::resolve(&config.extensions);
    debug!(
        "Allowed extensions: {}",
        allowed.iter().collect::<Vec<_>>().join(", ")
    );

    let root = locator.locate()?;
    let destination = root.join(&config.destination);
    if !destination.is_dir() {
        debug!("Creating destination {}", destination.display());
        fs::create_dir_all(&destination)
            .map_err(|e| DropCopyError::io_at("creating", &destination, e))?;
    }

    let mut copier = TreeCopier::new(allowed, ProgressLog::new(out));
    copier.copy_directory(&config.source, &destination, 0)?;
    let (stats, _) = copier.finish();

    info!(
        "Copied {} file(s), skipped {}, across {} directories",
        stats.copied, stats.skipped, stats.directories
    );
    Ok(stats)
}
