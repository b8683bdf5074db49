//! Configuration handling for errpages.
//! The configuration is a JSON object mapping application ids to the pages
//! generated for them. Insertion order is kept so pages render in the order
//! they are listed.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::{Component, Path};

/// Template variables of one page, passed through to the template untouched.
pub type PageData = IndexMap<String, serde_json::Value>;

/// Settings of one application.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Prefix templates use to build absolute asset URLs.
    #[serde(default)]
    pub web_root: Option<String>,
    /// Output file name (also the template name) mapped to its variables.
    pub pages: IndexMap<String, PageData>,
}

/// Top-level configuration: application id to [`AppConfig`].
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Config {
    apps: IndexMap<String, AppConfig>,
}

impl Config {
    /// Looks up the settings of `app_id`.
    ///
    /// # Errors
    /// * `Error::AppNotFound` if the application is not configured
    pub fn app(&self, app_id: &str) -> Result<&AppConfig> {
        self.apps.get(app_id).ok_or_else(|| Error::AppNotFound { app: app_id.to_string() })
    }

    /// Application ids in configuration order.
    pub fn app_ids(&self) -> impl Iterator<Item = &str> {
        self.apps.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AppConfig)> {
        self.apps.iter().map(|(id, app)| (id.as_str(), app))
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

/// Returns true if `name` is a single plain path component.
///
/// Application ids and page names both become path components below `dist/`.
pub fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}

/// Parses configuration content.
///
/// # Errors
/// * `Error::ConfigMalformed` if the content is not valid JSON, an application
///   lacks `pages`, a page entry is not an object, or an application id or page
///   name is not a plain file name
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = serde_json::from_str(content)
        .map_err(|e| Error::ConfigMalformed(format!("Invalid configuration format: {e}")))?;

    for (app_id, app) in config.iter() {
        if !is_plain_name(app_id) {
            return Err(Error::ConfigMalformed(format!("Invalid application id '{app_id}'")));
        }
        if let Some(page) = app.pages.keys().find(|page| !is_plain_name(page)) {
            return Err(Error::ConfigMalformed(format!(
                "Invalid page name '{page}' for application '{app_id}'"
            )));
        }
    }

    Ok(config)
}

/// Reads and parses the configuration file at `path`.
///
/// # Errors
/// * `Error::ConfigNotFound` if the file cannot be read
/// * `Error::ConfigMalformed` if its content is invalid
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(path)
        .map_err(|source| Error::ConfigNotFound { path: path.to_path_buf(), source })?;
    parse_config(&content)
}
