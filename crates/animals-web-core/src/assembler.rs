//! Document assembly: fragments in, finished page out.
//!
//! The payload must be a JSON array. Object entries are rendered in input
//! order and joined with `\n`; anything else is skipped and reported in [`Assembly::skipped`]. The
//! joined block replaces [`PLACEHOLDER`] in the page template. A template
//! without the placeholder is returned unchanged.

use serde_json::Value;

use crate::error::{AnimalsWebError, Result};
use crate::style::RenderStyle;
use crate::templates::renderer::TemplateRenderer;

/// Token in the page template that receives the rendered fragments.
pub const PLACEHOLDER: &str = "__REPLACE_ANIMALS_INFO__";

/// A payload entry that was not a record and was left out of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedEntry {
    /// Position in the input list.
    pub index: usize,
    pub value: Value,
}

/// The finished document plus what happened while building it.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub document: String,
    /// Number of fragments substituted into the document.
    pub rendered: usize,
    pub skipped: Vec<SkippedEntry>,
    pub placeholder_found: bool,
}

/// Render every record in `payload` and substitute the result into `template`.
pub fn assemble(
    renderer: &TemplateRenderer,
    payload: &Value,
    template: &str,
    style: RenderStyle,
) -> Result<Assembly> {
    let entries = payload.as_array().ok_or(AnimalsWebError::InvalidShape {
        found: json_kind(payload),
    })?;

    let mut fragments = Vec::with_capacity(entries.len());
    let mut skipped = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        match entry.as_object() {
            Some(record) => fragments.push(renderer.render_record(record, style)?),
            None => {
                tracing::debug!(index, entry = %entry, "skipping non-object item in animals data");
                skipped.push(SkippedEntry {
                    index,
                    value: entry.clone(),
                });
            }
        }
    }

    let block = fragments.join("\n");
    let placeholder_found = template.contains(PLACEHOLDER);
    if !placeholder_found {
        tracing::debug!("template has no {PLACEHOLDER} placeholder; output equals the template");
    }

    Ok(Assembly {
        document: template.replace(PLACEHOLDER, &block),
        rendered: fragments.len(),
        skipped,
        placeholder_found,
    })
}

/// Human-readable name of a JSON value's kind.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
