use serde_json::Value;

use crate::{context::TestContext, error::TestError};

/// File name of the canonical points document inside the test directory.
pub const POINTS_FILE_NAME: &str = "valor_points.json";

/// Sub-directory backup files are written into.
pub const BACKUP_DIR_NAME: &str = "backups";

/// Seed written to the points document when the context is built.
enum PointsSeed {
    Json(Value),
    Raw(String),
}

/// Builder for creating test contexts with an optional seeded points document.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_points(serde_json::json!({ "1": 10, "2": 0 }))
///     .build()?;
/// ```
pub struct TestBuilder {
    points: Option<PointsSeed>,
}

impl TestBuilder {
    /// Creates a new test builder without a points document.
    pub fn new() -> Self {
        Self { points: None }
    }

    /// Seeds the canonical points document with a JSON value.
    ///
    /// The value is written pretty-printed, the way backups are written.
    ///
    /// # Arguments
    /// - `points` - JSON document to write
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_points(mut self, points: Value) -> Self {
        self.points = Some(PointsSeed::Json(points));
        self
    }

    /// Seeds the canonical points document with raw text.
    ///
    /// Used to exercise malformed-document recovery.
    pub fn with_raw_points(mut self, raw: &str) -> Self {
        self.points = Some(PointsSeed::Raw(raw.to_string()));
        self
    }

    /// Builds the test context.
    ///
    /// Creates the temporary directory, the backup sub-directory and, if seeded,
    /// the points document.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Ready-to-use context
    /// - `Err(TestError)` - Filesystem or serialization failure
    pub fn build(self) -> Result<TestContext, TestError> {
        let dir = tempfile::tempdir()?;
        let points_path = dir.path().join(POINTS_FILE_NAME);
        let backup_dir = dir.path().join(BACKUP_DIR_NAME);
        std::fs::create_dir_all(&backup_dir)?;

        match self.points {
            Some(PointsSeed::Json(value)) => {
                std::fs::write(&points_path, serde_json::to_string_pretty(&value)?)?;
            }
            Some(PointsSeed::Raw(raw)) => std::fs::write(&points_path, raw)?,
            None => {}
        }

        Ok(TestContext {
            dir,
            points_path,
            backup_dir,
        })
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
