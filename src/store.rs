//! Course list persistence.
//!
//! The course list is stored as pretty-printed JSON in a per-user data
//! directory. The format is owned by the host side; the layout engine only
//! ever sees the in-memory list.
//!
//! # Location
//! `$COURSELOG_DATA_DIR/courses.json` if the variable is set, otherwise
//! `<home>/.haselkern/studilog/courses.json`, with the home directory as
//! reported by the OS (`dirs::home_dir`).

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::models::Course;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "COURSELOG_DATA_DIR";
/// File name of the course list inside the data directory.
pub const SAVE_FILE: &str = "courses.json";

const HOME_SUBDIR: [&str; 2] = [".haselkern", "studilog"];

/// A JSON file holding a course list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseStore {
    path: PathBuf,
}

impl CourseStore {
    /// Creates a store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store in the default per-user location.
    pub fn default_location() -> StoreResult<Self> {
        let dir = resolve_data_dir(std::env::var_os(DATA_DIR_ENV), dirs::home_dir())
            .ok_or(StoreError::NoDataDir)?;
        Ok(Self::new(dir.join(SAVE_FILE)))
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the course list.
    pub fn load(&self) -> StoreResult<Vec<Course>> {
        let text = fs::read_to_string(&self.path).map_err(|source| self.io_error(source))?;
        let courses: Vec<Course> = serde_json::from_str(&text)?;
        debug!("Loaded {} course(s) from {}", courses.len(), self.path.display());
        Ok(courses)
    }

    /// Loads the course list, starting empty if the file is missing or corrupt.
    pub fn load_or_default(&self) -> Vec<Course> {
        match self.load() {
            Ok(courses) => courses,
            Err(StoreError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                debug!("No course list at {}, starting empty", self.path.display());
                Vec::new()
            }
            Err(e) => {
                warn!("Could not load course list, starting empty: {e}");
                Vec::new()
            }
        }
    }

    /// Writes the course list, creating the data directory if needed.
    pub fn save(&self, courses: &[Course]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(courses)?;
        fs::write(&self.path, json).map_err(|source| self.io_error(source))?;
        debug!("Saved {} course(s) to {}", courses.len(), self.path.display());
        Ok(())
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Picks the data directory: an explicit override wins over the home directory.
fn resolve_data_dir(override_dir: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = override_dir.filter(|d| !d.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    let mut dir = home.filter(|h| !h.as_os_str().is_empty())?;
    dir.extend(HOME_SUBDIR);
    Some(dir)
}
