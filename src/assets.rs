//! Per-application static assets: locating css/img files and copying images
//! next to the rendered pages.

use crate::constants::{CSS_DIR, IMG_DIR};
use crate::error::{Error, Result};
use crate::layout::Layout;
use log::debug;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Kind of asset an application owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Css,
    Img,
}

impl AssetKind {
    /// Name of the directory holding this kind of asset.
    pub fn dir_name(self) -> &'static str {
        match self {
            AssetKind::Css => CSS_DIR,
            AssetKind::Img => IMG_DIR,
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Resolves asset files of applications below a [`Layout`] root.
#[derive(Debug, Clone)]
pub struct AssetLocator {
    layout: Layout,
}

impl AssetLocator {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Directory `<root>/<kind>/<app_id>`.
    pub fn asset_dir(&self, app_id: &str, kind: AssetKind) -> PathBuf {
        let root = match kind {
            AssetKind::Css => self.layout.css_root(),
            AssetKind::Img => self.layout.img_root(),
        };
        root.join(app_id)
    }

    /// Lists the files directly under `<root>/<kind>/<app_id>`, sorted by file name.
    ///
    /// # Errors
    /// * `Error::AssetDirNotFound` if the application has no such directory
    /// * `Error::IoError` if the directory cannot be listed
    pub fn list_assets(&self, app_id: &str, kind: AssetKind) -> Result<Vec<PathBuf>> {
        let dir = self.asset_dir(app_id, kind);
        if !dir.is_dir() {
            return Err(Error::AssetDirNotFound {
                app: app_id.to_string(),
                kind: kind.to_string(),
                path: dir,
            });
        }

        let mut assets = Vec::new();
        for entry in WalkDir::new(&dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| Error::IoError(e.into()))?;
            if entry.file_type().is_file() {
                assets.push(entry.into_path());
            }
        }
        debug!("Found {} {} asset(s) in {}", assets.len(), kind, dir.display());
        Ok(assets)
    }

    /// Copies every image of `app_id` into `<output_dir>/img/`, replacing files
    /// of the same name.
    pub fn copy_images<P: AsRef<Path>>(&self, app_id: &str, output_dir: P) -> Result<()> {
        let target_dir = output_dir.as_ref().join(IMG_DIR);
        fs::create_dir_all(&target_dir).map_err(Error::IoError)?;

        for source in self.list_assets(app_id, AssetKind::Img)? {
            // list_assets only yields entries with a file name
            let Some(file_name) = source.file_name() else { continue };
            let target = target_dir.join(file_name);
            debug!("Copying {} to {}", source.display(), target.display());
            fs::copy(&source, &target).map(|_| ()).map_err(Error::IoError)?;
        }
        Ok(())
    }
}
