//! Directory layout of a generator project.

use crate::constants::{CSS_DIR, DIST_DIR, IMG_DIR, TEMPLATES_DIR};
use std::path::{Path, PathBuf};

/// Root directory holding the `css/`, `img/`, `templates/` inputs and the `dist/` output.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    pub fn css_root(&self) -> PathBuf {
        self.root.join(CSS_DIR)
    }

    pub fn img_root(&self) -> PathBuf {
        self.root.join(IMG_DIR)
    }

    pub fn templates_root(&self) -> PathBuf {
        self.root.join(TEMPLATES_DIR)
    }

    /// Output directory of one application: `<root>/dist/<app_id>`.
    pub fn output_dir(&self, app_id: &str) -> PathBuf {
        self.root.join(DIST_DIR).join(app_id)
    }
}
