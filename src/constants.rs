//! Common constants used throughout errpages.

/// Configuration file used when only an application id is given
pub const DEFAULT_CONFIG_FILE: &str = "conf.json";

/// Stylesheet shared by all applications, placed directly under the css root
pub const COMMON_CSS_FILE: &str = "common.css";

pub const CSS_DIR: &str = "css";
pub const IMG_DIR: &str = "img";
pub const TEMPLATES_DIR: &str = "templates";
pub const DIST_DIR: &str = "dist";

/// Suffix of the hidden sibling directory a run is rendered into
pub const STAGING_SUFFIX: &str = "partial";
