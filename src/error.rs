//! Error handling for errpages.
//! Defines the error type and result alias used throughout the generator.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading configuration or generating pages.
///
/// Every variant is fatal for the application being processed; nothing is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration file is missing or cannot be read.
    #[error("Configuration file '{}' could not be read: {source}.", .path.display())]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration is not valid JSON or lacks required keys.
    #[error("Malformed configuration: {0}.")]
    ConfigMalformed(String),

    /// The requested application is not listed in the configuration.
    #[error("Application '{app}' is not defined in the configuration.")]
    AppNotFound { app: String },

    /// The css/img directory of an application is missing.
    #[error("No {kind} directory for application '{app}' (expected '{}').", .path.display())]
    AssetDirNotFound { app: String, kind: String, path: PathBuf },

    /// The template for a page does not exist.
    #[error("Template '{name}' not found.")]
    TemplateNotFound { name: String },

    /// MiniJinja failed to parse or render a template.
    #[error("Template rendering failed: {0}.")]
    RenderError(#[from] minijinja::Error),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// One or more applications failed during an all-apps run.
    #[error("Generation failed for: {}.", apps.join(", "))]
    AppsFailed { apps: Vec<String> },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}
