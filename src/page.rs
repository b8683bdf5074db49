//! Rendering of a single error page.

use crate::assets::AssetLocator;
use crate::config::PageData;
use crate::css::aggregate_css;
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Builds the render context of a page.
///
/// Page data is merged last, so its keys override `css` and `web_root`.
pub fn build_context(
    css: String,
    web_root: Option<&str>,
    page_data: &PageData,
) -> serde_json::Value {
    let mut context = serde_json::Map::new();
    context.insert("css".to_string(), serde_json::Value::String(css));
    if let Some(web_root) = web_root {
        context.insert("web_root".to_string(), serde_json::Value::String(web_root.to_string()));
    }
    for (key, value) in page_data {
        context.insert(key.clone(), value.clone());
    }
    serde_json::Value::Object(context)
}

/// Renders pages of an application and places its images next to them.
pub struct PageRenderer<'a> {
    engine: &'a dyn TemplateRenderer,
    assets: &'a AssetLocator,
}

impl<'a> PageRenderer<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer, assets: &'a AssetLocator) -> Self {
        Self { engine, assets }
    }

    /// Renders template `<app_id>/<template_name>` into `<output_dir>/<template_name>`,
    /// then copies the application's images into `<output_dir>/img`.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path of the written page
    ///
    /// # Errors
    /// * `Error::AssetDirNotFound` if the css or img directory of the app is missing
    /// * `Error::TemplateNotFound` / `Error::RenderError` from the template engine
    /// * `Error::IoError` if the page cannot be written
    pub fn render_page<P: AsRef<Path>>(
        &self,
        app_id: &str,
        template_name: &str,
        page_data: &PageData,
        output_dir: P,
        web_root: Option<&str>,
    ) -> Result<PathBuf> {
        let output_dir = output_dir.as_ref();
        let css = aggregate_css(self.assets, app_id)?;
        let context = build_context(css, web_root, page_data);

        let content = self.engine.render(&format!("{app_id}/{template_name}"), &context)?;

        let target = output_dir.join(template_name);
        debug!("Writing file: {}", target.display());
        fs::write(&target, content).map_err(Error::IoError)?;

        self.assets.copy_images(app_id, output_dir)?;
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page_data(value: serde_json::Value) -> PageData {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_build_context_without_web_root() {
        let context = build_context("a{}".to_string(), None, &page_data(json!({"title": "Oops"})));
        assert_eq!(context, json!({"css": "a{}", "title": "Oops"}));
    }

    #[test]
    fn test_build_context_page_data_wins() {
        let data = page_data(json!({"css": "", "web_root": "/other", "code": 404}));
        let context = build_context("a{}".to_string(), Some("/err"), &data);
        assert_eq!(context, json!({"css": "", "web_root": "/other", "code": 404}));
    }
}
