//! Stylesheet aggregation.
//! Every stylesheet of an application is collapsed onto one line so the whole
//! set can be inlined into a `<style>` block of each page.

use crate::assets::{AssetKind, AssetLocator};
use crate::constants::COMMON_CSS_FILE;
use crate::error::{Error, Result};
use log::debug;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Replaces every whitespace run with a single space and trims both ends.
pub fn collapse_whitespace(css: &str) -> String {
    RE_WHITESPACE.replace_all(css, " ").trim().to_string()
}

fn read_collapsed(path: &Path) -> Result<String> {
    debug!("Loading stylesheet {}", path.display());
    let content = fs::read_to_string(path).map_err(Error::IoError)?;
    Ok(collapse_whitespace(&content))
}

/// Builds the inline stylesheet of `app_id`.
///
/// `css/common.css` comes first when present, followed by the application's own
/// stylesheets in file name order. Each file becomes one line; files without
/// content are dropped.
///
/// # Errors
/// * `Error::AssetDirNotFound` if `css/<app_id>` does not exist
/// * `Error::IoError` if a stylesheet cannot be read
pub fn aggregate_css(locator: &AssetLocator, app_id: &str) -> Result<String> {
    let mut sheets = Vec::new();

    let common = locator.layout().css_root().join(COMMON_CSS_FILE);
    if common.is_file() {
        sheets.push(read_collapsed(&common)?);
    }
    for path in locator.list_assets(app_id, AssetKind::Css)? {
        sheets.push(read_collapsed(&path)?);
    }

    sheets.retain(|sheet| !sheet.is_empty());
    Ok(sheets.join("\n"))
}
