//! Sanitized relative path of an archive entry.

use std::fmt;
use std::path::Path;
use std::path::PathBuf;

/// Relative path of an archive entry, safe to join onto a destination.
///
/// Entry names are sanitized instead of rejected: root and drive prefixes,
/// empty components, `.` and `..` are dropped. The result never escapes the
/// directory it is joined to.
///
/// # Examples
///
/// ```
/// use gesla_unpack_core::EntryPath;
/// use std::path::Path;
///
/// let path = EntryPath::sanitize("sub/b.txt").unwrap();
/// assert_eq!(path.as_path(), Path::new("sub/b.txt"));
///
/// // Traversal and absolute prefixes are stripped, not rejected
/// let path = EntryPath::sanitize("../../etc/passwd").unwrap();
/// assert_eq!(path.as_path(), Path::new("etc/passwd"));
///
/// // Nothing left after sanitizing
/// assert!(EntryPath::sanitize("./..").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryPath(PathBuf);

impl EntryPath {
    /// Sanitizes a raw entry name.
    ///
    /// Returns `None` if no component survives.
    #[must_use]
    pub fn sanitize(name: &str) -> Option<Self> {
        let mut normalized = PathBuf::new();

        for component in strip_drive(name).split(is_separator) {
            if matches!(component, "" | "." | "..") {
                continue;
            }
            normalized.push(component);
        }

        if normalized.as_os_str().is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    /// Returns the sanitized path.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Returns the number of components.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.components().count()
    }
}

impl AsRef<Path> for EntryPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for EntryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

fn is_separator(c: char) -> bool {
    c == '/' || (cfg!(windows) && c == '\\')
}

/// Drops a leading `X:` drive prefix on Windows.
fn strip_drive(name: &str) -> &str {
    if cfg!(windows) {
        let bytes = name.as_bytes();
        if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
            return &name[2..];
        }
    }
    name
}
