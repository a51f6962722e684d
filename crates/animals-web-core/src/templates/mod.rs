//! Fragment templates and starter files.
//!
//! Per-record fragment templates live as constants in [`embedded`] and are
//! registered once with [Handlebars](https://handlebarsjs.com/) by
//! [`renderer::TemplateRenderer`], one template per [`RenderStyle`](crate::style::RenderStyle).
//! Starter files for `animals-web init` are embedded from the repository's
//! `templates/starter/` directory via [`include_str!`].
//!
//! ## Template variables
//!
//! Fragment templates see a serialized [`RecordView`](crate::record::RecordView):
//! - `{{{name}}}`, `{{{diet}}}`, `{{{location}}}`: always present
//! - `{{{animal_type}}}`: `null` when the record has no usable type
//!
//! Values are inserted with triple-stash so they are not HTML-escaped.
//!
//! **Warning**: fragment output is byte-exact. Block tags must never sit alone
//! on a line, or Handlebars strips the surrounding whitespace.

pub mod embedded;
pub mod renderer;
