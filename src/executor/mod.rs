//! Executor module for file operations

pub mod copy;

use crate::types::{DropCopyError, ExtensionSet};
use crate::ui::ProgressLog;
use log::debug;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub use copy::copy_file;

/// Counters for a finished copy run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Source directories visited, including the root.
    pub directories: usize,
    /// Files copied to the destination.
    pub copied: usize,
    /// Files left behind because of their extension.
    pub skipped: usize,
    /// Aggregate copied bytes.
    pub bytes: u64,
}

/// Recursively copies a directory tree, keeping only allowed extensions
///
/// Every source directory gets a destination counterpart, even when none of
/// its files are copied.
pub struct TreeCopier<W: Write> {
    allowed: ExtensionSet,
    log: ProgressLog<W>,
    stats: CopyStats,
}

impl<W: Write> TreeCopier<W> {
    pub fn new(allowed: ExtensionSet, log: ProgressLog<W>) -> Self {
        Self {
            allowed,
            log,
            stats: CopyStats::default(),
        }
    }

    /// Finish and give back the statistics and the log
    pub fn finish(self) -> (CopyStats, ProgressLog<W>) {
        (self.stats, self.log)
    }

    /// Copy `source_dir` into `dest_dir`.
    ///
    /// Depth-first: subdirectories are handled before the files of a
    /// directory. Entries are visited in name order. The first error aborts
    /// the walk; files already copied stay in place.
    pub fn copy_directory(
        &mut self,
        source_dir: &Path,
        dest_dir: &Path,
        depth: usize,
    ) -> Result<(), DropCopyError> {
        self.log.mapped(depth, source_dir, dest_dir);
        self.stats.directories += 1;

        let (subdirs, files) = list_entries(source_dir)?;

        for dir in subdirs {
            let Some(name) = dir.file_name() else {
                continue;
            };
            let target = dest_dir.join(name);
            if !target.is_dir() {
                debug!("Creating directory {}", target.display());
                fs::create_dir_all(&target)
                    .map_err(|e| DropCopyError::io_at("creating", &target, e))?;
            }

            self.copy_directory(&dir, &target, depth + 1)?;
        }

        for file in files {
            let Some(name) = file.file_name() else {
                continue;
            };

            if self.allowed.allows(&file) {
                let target = dest_dir.join(name);
                let bytes = copy_file(&file, &target)?;
                self.log.mapped(depth, &file, &target);
                self.stats.copied += 1;
                self.stats.bytes += bytes;
            } else {
                self.log.skipped(depth, &name.to_string_lossy());
                self.stats.skipped += 1;
            }
        }

        Ok(())
    }
}

/// Immediate subdirectories and files of `dir`, each sorted by name
fn list_entries(dir: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>), DropCopyError> {
    let mut subdirs = Vec::new();
    let mut files = Vec::new();

    let entries = fs::read_dir(dir).map_err(|e| DropCopyError::io_at("reading", dir, e))?;
    for entry in entries {
        let path = entry
            .map_err(|e| DropCopyError::io_at("reading", dir, e))?
            .path();
        // Follows symlinks, so a link to a directory is walked as one.
        if path.is_dir() {
            subdirs.push(path);
        } else {
            files.push(path);
        }
    }

    subdirs.sort();
    files.sort();
    Ok((subdirs, files))
}
