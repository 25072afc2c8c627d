//! Path types used during extraction.

mod dest_dir;
mod entry_path;

pub use dest_dir::DestDir;
pub use entry_path::EntryPath;
