//! Progress reporting

use log::warn;
use std::fmt;
use std::io::Write;
use std::path::Path;

/// Indented, line-oriented log of copy progress
///
/// Every line is prefixed by two spaces per level of directory depth.
/// Output is best effort: after the first failed write (e.g. a closed pipe)
/// a warning is logged and further lines are dropped.
pub struct ProgressLog<W: Write> {
    out: W,
    closed: bool,
}

impl<W: Write> ProgressLog<W> {
    pub fn new(out: W) -> Self {
        Self { out, closed: false }
    }

    /// `source => destination` for a directory or a copied file
    pub fn mapped(&mut self, depth: usize, source: &Path, destination: &Path) {
        self.line(format_args!(
            "{}{} => {}",
            indent(depth),
            source.display(),
            destination.display()
        ));
    }

    /// `name skipped` for a file whose extension is not allowed
    pub fn skipped(&mut self, depth: usize, name: &str) {
        self.line(format_args!("{}{} skipped", indent(depth), name));
    }

    /// Whether a write has failed and output is now discarded
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if self.closed {
            return;
        }
        if let Err(e) = writeln!(self.out, "{args}") {
            warn!("Progress output failed, continuing without it: {e}");
            self.closed = true;
        }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn indent(depth: usize) -> String {
    " ".repeat(depth * 2)
}
