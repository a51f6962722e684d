use std::path::Path;

use anyhow::Result;
use console::Term;
use dialoguer::{Confirm, Select};

use animals_web_core::error::AnimalsWebError;
use animals_web_core::project;
use animals_web_core::style::RenderStyle;

use crate::output;

/// Scaffold a starter template, sample data, and config file into `dir`.
///
/// If no style is given and stdout is a terminal, prompts for one. If a
/// starter file already exists, asks before overwriting (or fails when not
/// interactive and `--force` is not set).
pub fn run(dir: &Path, style: Option<RenderStyle>, force: bool) -> Result<()> {
    output::print_header(&format!("animals-web init: {}", dir.display()));

    let interactive = Term::stdout().is_term();
    let style = match style {
        Some(s) => s,
        None if interactive => select_style()?,
        None => RenderStyle::default(),
    };

    let written = match project::scaffold(dir, style, force) {
        Err(AnimalsWebError::AlreadyExists { path }) if interactive => {
            let overwrite = Confirm::new()
                .with_prompt(format!("{} already exists. Overwrite starter files?", path.display()))
                .default(false)
                .interact()?;
            if !overwrite {
                output::print_warning("Nothing was written");
                return Ok(());
            }
            project::scaffold(dir, style, true)?
        }
        other => other?,
    };

    for path in &written {
        output::print_key_value("Wrote", &path.display().to_string());
    }
    output::print_success(&format!("Starter files created with {style} style"));
    println!();
    println!("  Next steps:");
    println!("    cd {}", dir.display());
    println!("    animals-web");
    println!();

    Ok(())
}

fn select_style() -> Result<RenderStyle> {
    let descriptions = &[
        "Card list item: <li class=\"cards__item\"> with title and text blocks",
        "Simple list item: unstyled <li> with one line per field",
        "Plain text: Name:/Diet:/Location:/Type: lines",
    ];

    let selection = Select::new()
        .with_prompt("Select render style")
        .items(descriptions)
        .default(0)
        .interact()?;

    Ok(RenderStyle::ALL[selection])
}
