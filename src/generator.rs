//! Generation of all pages of an application.
//! A run is rendered into a hidden staging directory next to the output
//! directory and only replaces the output once every page succeeded.

use crate::assets::AssetLocator;
use crate::config::{AppConfig, Config};
use crate::constants::{IMG_DIR, STAGING_SUFFIX};
use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::page::PageRenderer;
use crate::renderer::MiniJinjaRenderer;
use log::{debug, error, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Which applications of the configuration to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppSelection {
    One(String),
    All,
}

/// Returns the staging directory used while generating into `output_dir`.
pub fn staging_dir(output_dir: &Path) -> Result<PathBuf> {
    let name = output_dir.file_name().ok_or_else(|| {
        Error::IoError(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid output directory '{}'", output_dir.display()),
        ))
    })?;
    let staging_name = format!(".{}.{STAGING_SUFFIX}", name.to_string_lossy());
    Ok(output_dir.with_file_name(staging_name))
}

/// Generates the pages of one application.
pub struct Generator<'a> {
    app_id: String,
    config: &'a AppConfig,
    assets: AssetLocator,
}

impl<'a> Generator<'a> {
    pub fn new<S: Into<String>>(layout: &Layout, app_id: S, config: &'a AppConfig) -> Self {
        Self {
            app_id: app_id.into(),
            config,
            assets: AssetLocator::new(layout.clone()),
        }
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Rebuilds `output_dir` from scratch.
    ///
    /// Templates are loaded fresh for every run and cached only until it ends.
    /// Pages are rendered in configuration order and the first failure aborts
    /// the run. On failure the staging directory is discarded and an existing
    /// `output_dir` keeps its previous content.
    ///
    /// # Returns
    /// * `Result<Vec<PathBuf>>` - Final paths of the generated pages
    pub fn process<P: AsRef<Path>>(&self, output_dir: P) -> Result<Vec<PathBuf>> {
        let output_dir = output_dir.as_ref();
        let staging = staging_dir(output_dir)?;

        if staging.exists() {
            debug!("Removing leftover staging directory {}", staging.display());
            fs::remove_dir_all(&staging).map_err(Error::IoError)?;
        }
        fs::create_dir_all(staging.join(IMG_DIR)).map_err(Error::IoError)?;

        let pages = match self.render_pages(&staging) {
            Ok(pages) => pages,
            Err(err) => {
                if let Err(cleanup) = fs::remove_dir_all(&staging) {
                    debug!("Could not remove {}: {}", staging.display(), cleanup);
                }
                return Err(err);
            }
        };

        if output_dir.exists() {
            debug!("Removing previous output {}", output_dir.display());
            fs::remove_dir_all(output_dir).map_err(Error::IoError)?;
        }
        fs::rename(&staging, output_dir).map_err(Error::IoError)?;

        Ok(pages.iter().map(|page| output_dir.join(page)).collect())
    }

    fn render_pages(&self, target: &Path) -> Result<Vec<String>> {
        let engine = MiniJinjaRenderer::new(self.assets.layout().templates_root());
        let renderer = PageRenderer::new(&engine, &self.assets);
        let web_root = self.config.web_root.as_deref();
        let mut pages = Vec::with_capacity(self.config.pages.len());

        for (template_name, page_data) in &self.config.pages {
            renderer.render_page(&self.app_id, template_name, page_data, target, web_root)?;
            println!("[{}] generated '{}'", self.app_id, template_name);
            pages.push(template_name.clone());
        }
        Ok(pages)
    }
}

/// Runs the generator for the selected applications, writing to `<root>/dist/<app_id>`.
///
/// A single application propagates its error. When every application is
/// selected, a failing application is reported and the remaining ones still
/// run; the result is then `Error::AppsFailed` naming all failures.
pub fn generate_apps(layout: &Layout, config: &Config, selection: &AppSelection) -> Result<()> {
    match selection {
        AppSelection::One(app_id) => generate_app(layout, app_id, config.app(app_id)?),
        AppSelection::All => {
            let mut failed = Vec::new();
            for (app_id, app_config) in config.iter() {
                if let Err(err) = generate_app(layout, app_id, app_config) {
                    error!("{app_id}: {err}");
                    failed.push(app_id.to_string());
                }
            }
            if failed.is_empty() {
                Ok(())
            } else {
                Err(Error::AppsFailed { apps: failed })
            }
        }
    }
}

fn generate_app(layout: &Layout, app_id: &str, app_config: &AppConfig) -> Result<()> {
    let output_dir = layout.output_dir(app_id);
    info!("Generating '{}' into {}", app_id, output_dir.display());

    let generator = Generator::new(layout, app_id, app_config);
    let pages = generator.process(&output_dir)?;

    println!(
        "[{}] {} page(s) generated in {}.",
        generator.app_id(),
        pages.len(),
        output_dir.display()
    );
    Ok(())
}
