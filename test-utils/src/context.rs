use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test context owning a temporary working directory.
///
/// The directory and everything written into it is removed when the context is
/// dropped, so each test gets an isolated filesystem area for the canonical points
/// document and backup files.
pub struct TestContext {
    /// Temporary directory backing this context.
    pub dir: TempDir,

    /// Path of the canonical points document inside `dir`.
    ///
    /// The file only exists if the builder was given seed data via `with_points()`
    /// or `with_raw_points()`.
    pub points_path: PathBuf,

    /// Directory backup files are written into.
    pub backup_dir: PathBuf,
}

impl TestContext {
    /// Root of the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Lists the file names in the backup directory, sorted.
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - File names currently present
    /// - `Err(std::io::Error)` - The directory could not be read
    pub fn backup_files(&self) -> Result<Vec<String>, std::io::Error> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.backup_dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}
