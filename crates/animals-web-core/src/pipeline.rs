//! One generator run: load data → load template → assemble → write.
//!
//! Every step short-circuits on error, and the output file is only touched
//! once everything before it has succeeded.

use std::path::PathBuf;

use crate::assembler::{self, SkippedEntry};
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::loader;
use crate::templates::renderer::TemplateRenderer;
use crate::writer;

/// Summary of a successful run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub output: PathBuf,
    pub rendered: usize,
    pub skipped: Vec<SkippedEntry>,
    pub placeholder_found: bool,
}

/// Generate the output document described by `config`.
pub fn run(config: &GeneratorConfig) -> Result<RunReport> {
    tracing::info!(
        data = %config.data.display(),
        template = %config.template.display(),
        style = %config.style,
        "generating animals page"
    );

    let payload = loader::load(&config.data)?;
    let template = loader::load_template(&config.template)?;

    let renderer = TemplateRenderer::new()?;
    let assembly = assembler::assemble(&renderer, &payload, &template, config.style)?;

    writer::write_document(&config.output, &assembly.document)?;
    tracing::info!(
        output = %config.output.display(),
        rendered = assembly.rendered,
        skipped = assembly.skipped.len(),
        "animals page written"
    );

    Ok(RunReport {
        output: config.output.clone(),
        rendered: assembly.rendered,
        skipped: assembly.skipped,
        placeholder_found: assembly.placeholder_found,
    })
}
