use std::path::{Path, PathBuf};

use anyhow::Result;

use animals_web_core::assembler::PLACEHOLDER;
use animals_web_core::config::{GeneratorConfig, CONFIG_FILE};
use animals_web_core::pipeline::{self, RunReport};

use crate::output;
use crate::RenderArgs;

/// Render the animals page.
///
/// Loads the config file (optional unless `--config` names one), applies
/// command-line overrides, and runs the generator. Entries that were skipped
/// and a template without the placeholder are reported as warnings.
pub fn run(config_path: Option<&Path>, args: &RenderArgs) -> Result<()> {
    let config = resolve_config(config_path, args)?;

    output::print_header("animals-web");
    output::print_key_value("Data", &config.data.display().to_string());
    output::print_key_value("Template", &config.template.display().to_string());
    output::print_key_value("Style", config.style.as_str());

    let report = pipeline::run(&config)?;

    for warning in warnings(&report, &config.template) {
        output::print_warning(&warning);
    }

    output::print_success(&format!(
        "The file '{}' was successfully created ({} animals)",
        report.output.display(),
        report.rendered
    ));

    Ok(())
}

/// One line per skipped entry, plus one if the template had no placeholder.
fn warnings(report: &RunReport, template: &Path) -> Vec<String> {
    let mut lines: Vec<String> = report
        .skipped
        .iter()
        .map(|entry| {
            format!(
                "Skipping non-object item #{} in animals data: {}",
                entry.index, entry.value
            )
        })
        .collect();
    if !report.placeholder_found {
        lines.push(format!(
            "{} has no {PLACEHOLDER} placeholder; the output is the template unchanged",
            template.display()
        ));
    }
    lines
}

/// Build the effective config: file values first, then flag overrides.
fn resolve_config(config_path: Option<&Path>, args: &RenderArgs) -> Result<GeneratorConfig> {
    let mut config = match config_path {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::load_or_default(&PathBuf::from(CONFIG_FILE))?,
    };

    if let Some(data) = &args.data {
        config.data = data.clone();
    }
    if let Some(template) = &args.template {
        config.template = template.clone();
    }
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    if let Some(style) = args.style {
        config.style = style.into();
    }
    Ok(config)
}
