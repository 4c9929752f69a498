//! Single file copy

use crate::types::DropCopyError;
use log::debug;
use std::fs;
use std::path::Path;

/// Copy `src` to `dest`, overwriting any existing file
///
/// Creates the parent directory of `dest` if it is missing and carries the
/// source modification time over to the copy. The write is not atomic: an
/// interrupted copy can leave `dest` partially written.
///
/// # Returns
/// * `Ok(u64)` - Number of bytes copied
/// * `Err(DropCopyError)` - IO failure, tagged with the path involved
///
/// # Example
/// ```no_run
/// use dropcopy::executor::copy_file;
/// use std::path::Path;
///
/// let bytes = copy_file(Path::new("bin/app.exe"), Path::new("/home/me/Dropbox/app/app.exe"))?;
/// # Ok::<(), dropcopy::DropCopyError>(())
/// ```
pub fn copy_file(src: &Path, dest: &Path) -> Result<u64, DropCopyError> {
    if let Some(parent) = dest.parent() {
        if !parent.is_dir() {
            debug!("Creating directory {}", parent.display());
            fs::create_dir_all(parent)
                .map_err(|e| DropCopyError::io_at("creating", parent, e))?;
        }
    }

    let bytes = fs::copy(src, dest).map_err(|e| DropCopyError::io_at("copying", src, e))?;

    let src_metadata = fs::metadata(src).map_err(|e| DropCopyError::io_at("reading", src, e))?;
    let mtime = filetime::FileTime::from_last_modification_time(&src_metadata);
    filetime::set_file_mtime(dest, mtime)
        .map_err(|e| DropCopyError::io_at("setting mtime on", dest, e))?;

    debug!("Copied {bytes} bytes to {}", dest.display());
    Ok(bytes)
}
