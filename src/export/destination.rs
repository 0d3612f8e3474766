//! Fixed destination of the exported image.

use std::path::{Path, PathBuf};

/// Project root of the original deployment.
pub const DEFAULT_PROJECT_ROOT: &str = "/Users/dhriti/HourTrackrr";

/// Asset directory, relative to the project root.
pub const ASSET_DIR: &str = "src/assets";

/// File name the image is saved under.
pub const FILE_NAME: &str = "LogHoursInterface.png";

/// Where the clipboard image is written.
///
/// Only the project root varies between installs; the asset directory
/// and file name are fixed, so repeated runs overwrite the same file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    path: PathBuf,
}

impl Destination {
    pub fn from_project_root(root: &Path) -> Self {
        Self {
            path: root.join(ASSET_DIR).join(FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for Destination {
    fn default() -> Self {
        Self::from_project_root(Path::new(DEFAULT_PROJECT_ROOT))
    }
}
