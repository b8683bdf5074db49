//! errpages renders static HTML error pages for several web applications from
//! shared templates, a JSON configuration and per-application CSS/image assets.

/// Static asset lookup and image copying
pub mod assets;

/// Command-line interface module
pub mod cli;

/// JSON configuration of applications and their pages
pub mod config;

/// Directory and file names
pub mod constants;

/// Stylesheet aggregation into a single inline string
pub mod css;

/// Error types and handling
pub mod error;

/// Per-application orchestration
/// Rebuilds dist/<app_id> through a staging directory
pub mod generator;

/// Input and output directory layout
pub mod layout;

pub mod logger;

/// Rendering of one page with its context
pub mod page;

/// MiniJinja template engine
pub mod renderer;
