//! Core library for animals-web.
//!
//! Turns a JSON list of animal records into an HTML page: the [`loader`] reads
//! the data and page template, the [`templates::renderer::TemplateRenderer`]
//! renders one fragment per record in the chosen [`style::RenderStyle`], the
//! [`assembler`] substitutes the fragments into the template, and the
//! [`writer`] persists the result. [`pipeline::run`] chains all of them.

pub mod assembler;
pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod project;
pub mod record;
pub mod style;
pub mod templates;
pub mod writer;
