//! Live filesystem adapter using `std::fs`.

use std::io;
use std::path::Path;

use crate::ports::filesystem::FileSystem;

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            if let Some(name) = entry.file_name().to_str() {
                entries.push(name.to_string());
            }
        }
        entries.sort();
        Ok(entries)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to).or_else(|err| recover_rename(err, from, to))
    }
}

/// Completes a failed rename by copy + delete when the failure was a
/// cross-device move; any other error is returned unchanged.
fn recover_rename(err: io::Error, from: &Path, to: &Path) -> io::Result<()> {
    // rename(2) cannot cross mount points.
    if err.kind() != io::ErrorKind::CrossesDevices {
        return Err(err);
    }
    std::fs::copy(from, to)?;
    std::fs::remove_file(from)
}
