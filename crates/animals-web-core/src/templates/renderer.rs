//! Handlebars-based renderer for per-record fragments.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled.
//! Every variable a fragment template references must exist in the
//! [`RecordView`] it is rendered with, so a typo in a template fails loudly
//! instead of rendering as empty text.
//!
//! ## Usage
//!
//! ```
//! use animals_web_core::style::RenderStyle;
//! use animals_web_core::templates::renderer::TemplateRenderer;
//!
//! let renderer = TemplateRenderer::new().unwrap();
//! let record = serde_json::json!({ "name": "Fox" });
//! let html = renderer
//!     .render_record(record.as_object().unwrap(), RenderStyle::CardListItem)
//!     .unwrap();
//! assert!(html.contains("Fox"));
//! ```

use handlebars::Handlebars;
use serde_json::{Map, Value};

use crate::error::{AnimalsWebError, Result};
use crate::record::RecordView;
use crate::style::RenderStyle;
use crate::templates::embedded;

/// Renders records into markup fragments, one registered template per style.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a renderer with strict mode enabled and all fragment templates registered.
    pub fn new() -> Result<Self> {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        for style in RenderStyle::ALL {
            hbs.register_template_string(style.as_str(), fragment_template(style))
                .map_err(|e| AnimalsWebError::TemplateRender(e.to_string()))?;
        }
        Ok(Self { hbs })
    }

    /// Render one record in the given style.
    pub fn render_record(&self, record: &Map<String, Value>, style: RenderStyle) -> Result<String> {
        self.render_view(&RecordView::from_record(record), style)
    }

    /// Render already-resolved fields in the given style.
    pub fn render_view(&self, view: &RecordView, style: RenderStyle) -> Result<String> {
        self.hbs
            .render(style.as_str(), view)
            .map_err(|e| AnimalsWebError::TemplateRender(e.to_string()))
    }
}

fn fragment_template(style: RenderStyle) -> &'static str {
    match style {
        RenderStyle::PlainText => embedded::PLAIN_TEXT,
        RenderStyle::SimpleListItem => embedded::SIMPLE_LIST_ITEM,
        RenderStyle::CardListItem => embedded::CARD_LIST_ITEM,
    }
}
