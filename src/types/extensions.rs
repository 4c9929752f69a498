//! ExtensionSet - Case-insensitive set of copyable file extensions

use std::collections::BTreeSet;
use std::path::Path;

/// Extensions copied when the caller supplies none
pub const DEFAULT_EXTENSIONS: [&str; 2] = [".dll", ".exe"];

/// Case-insensitive set of file extensions, each stored with its leading dot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    extensions: BTreeSet<String>,
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self::from_iter(DEFAULT_EXTENSIONS)
    }
}

impl ExtensionSet {
    /// Build the set from caller-supplied extensions.
    ///
    /// An empty list yields the defaults; a non-empty list is used as-is,
    /// with no defaults merged in.
    pub fn resolve<S: AsRef<str>>(extensions: &[S]) -> Self {
        if extensions.is_empty() {
            Self::default()
        } else {
            extensions.iter().map(|ext| ext.as_ref()).collect()
        }
    }

    /// Check whether `extension` (with leading dot) is allowed
    pub fn contains(&self, extension: &str) -> bool {
        self.extensions.contains(&extension.to_lowercase())
    }

    /// Check whether the file at `path` has an allowed extension
    pub fn allows(&self, path: &Path) -> bool {
        extension_of(path).is_some_and(|ext| self.contains(&ext))
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Iterate over the normalized (lowercase) extensions
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for ExtensionSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            extensions: iter.into_iter().map(str::to_lowercase).collect(),
        }
    }
}

/// Final extension of `path` including the leading dot, if any
///
/// Dotfiles such as `.bashrc` and names ending in a bare `.` have none.
pub fn extension_of(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_string_lossy();
    if ext.is_empty() {
        None
    } else {
        Some(format!(".{ext}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dll_and_exe() {
        let set = ExtensionSet::default();
        assert_eq!(set.len(), 2);
        assert!(set.contains(".dll"));
        assert!(set.contains(".exe"));
        assert!(!set.contains(".txt"));
    }

    #[test]
    fn test_resolve_empty_uses_defaults() {
        let empty: [&str; 0] = [];
        assert_eq!(ExtensionSet::resolve(&empty), ExtensionSet::default());
    }

    #[test]
    fn test_resolve_does_not_merge_defaults() {
        let set = ExtensionSet::resolve(&[".pdb"]);
        assert!(set.contains(".pdb"));
        assert!(!set.contains(".dll"));
        assert!(!set.contains(".exe"));
    }

    #[test]
    fn test_case_insensitive() {
        let set = ExtensionSet::resolve(&[".DlL"]);
        assert!(set.contains(".dll"));
        assert!(set.contains(".DLL"));
        assert!(set.allows(Path::new("lib/Native.Dll")));
    }

    #[test]
    fn test_allows_uses_final_extension() {
        let set = ExtensionSet::resolve(&[".gz"]);
        assert!(set.allows(Path::new("bundle.tar.gz")));
        assert!(!set.allows(Path::new("bundle.gz.tar")));
    }

    #[test]
    fn test_files_without_extension() {
        let set = ExtensionSet::default();
        assert!(!set.allows(Path::new("Makefile")));
        assert!(!set.allows(Path::new(".exe")));
        assert_eq!(extension_of(Path::new("trailing.")), None);
        assert_eq!(extension_of(Path::new("app.EXE")), Some(".EXE".to_string()));
    }
}
