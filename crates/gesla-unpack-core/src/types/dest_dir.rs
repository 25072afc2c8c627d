//! Destination directory type.

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use super::EntryPath;
use crate::ExtractionError;
use crate::Result;

/// A destination directory that is known to exist.
///
/// Constructed by [`DestDir::ensure`], which creates the directory and any
/// missing parents when absent. The path is kept exactly as given (not
/// canonicalized) so messages show what the caller configured.
///
/// # Examples
///
/// ```no_run
/// use gesla_unpack_core::DestDir;
/// use gesla_unpack_core::EntryPath;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dest = DestDir::ensure("data/GESLA4_ALL")?;
/// let entry = EntryPath::sanitize("station/record.csv").unwrap();
/// println!("writing {}", dest.join(&entry).display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestDir {
    path: PathBuf,
    created: bool,
}

impl DestDir {
    /// Makes sure `path` exists as a directory, creating it if missing.
    ///
    /// Existing directories are left as they are, including their contents.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path exists but is not a directory
    /// - Creating the directory (or a parent) fails
    pub fn ensure(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let created = match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => false,
            Ok(_) => {
                return Err(ExtractionError::NotADirectory {
                    path: path.to_path_buf(),
                });
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                fs::create_dir_all(path).map_err(|e| ExtractionError::from_io(e, path))?;
                true
            }
            Err(e) => return Err(ExtractionError::from_io(e, path)),
        };

        Ok(Self {
            path: path.to_path_buf(),
            created,
        })
    }

    /// Returns the directory path.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if [`DestDir::ensure`] had to create the directory.
    #[must_use]
    pub fn was_created(&self) -> bool {
        self.created
    }

    /// Joins a sanitized entry path onto the destination.
    #[must_use]
    pub fn join(&self, entry: &EntryPath) -> PathBuf {
        self.path.join(entry.as_path())
    }
}
