//! Template rendering backed by MiniJinja.
//! Templates are looked up by a namespaced name (`<app_id>/<file>`) below the
//! templates root.
use crate::error::{Error, Result};
use log::debug;
use minijinja::{path_loader, AutoEscape, Environment, ErrorKind};
use std::path::Path;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders the template registered under `name` with the given context.
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` if no template has that name
    /// * `Error::RenderError` if the template cannot be parsed or evaluated
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based rendering engine loading templates from disk.
///
/// Loaded templates are cached by the environment, so one instance should live
/// for a whole generator run.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer whose templates live under `templates_root`.
    pub fn new<P: AsRef<Path>>(templates_root: P) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(templates_root.as_ref().to_path_buf()));
        // The inline stylesheet must reach the page untouched.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        Self { env }
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String> {
        debug!("Rendering template '{}'", name);
        let tmpl = self.env.get_template(name).map_err(|e| match e.kind() {
            ErrorKind::TemplateNotFound => Error::TemplateNotFound { name: name.to_string() },
            _ => Error::RenderError(e),
        })?;

        tmpl.render(context).map_err(Error::RenderError)
    }
}
