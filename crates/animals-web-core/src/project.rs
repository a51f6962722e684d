//! Starter files for a new animals page.
//!
//! ## Directory layout
//!
//! ```text
//! <dir>/
//! ├── animals-web.config.json   # GeneratorConfig
//! ├── animals_data.json         # sample records
//! └── animals_template.html     # page template with the placeholder
//! ```

use std::path::{Path, PathBuf};

use crate::config::{GeneratorConfig, CONFIG_FILE, DATA_FILE, TEMPLATE_FILE};
use crate::error::{AnimalsWebError, Result};
use crate::style::RenderStyle;
use crate::templates::embedded;

/// Write the starter files into `dir`, creating it if needed.
///
/// Refuses to overwrite any existing file unless `force` is set. Nothing is
/// written if any target exists and `force` is not set. Returns the paths
/// written.
pub fn scaffold(dir: &Path, style: RenderStyle, force: bool) -> Result<Vec<PathBuf>> {
    let targets = starter_paths(dir);
    if !force {
        if let Some(existing) = targets.iter().find(|p| p.exists()) {
            return Err(AnimalsWebError::AlreadyExists {
                path: existing.clone(),
            });
        }
    }

    std::fs::create_dir_all(dir)?;

    // Paths in the config are relative to the config file itself.
    let config = GeneratorConfig {
        style,
        ..GeneratorConfig::default()
    };
    config.save(&dir.join(CONFIG_FILE))?;
    std::fs::write(dir.join(DATA_FILE), embedded::STARTER_DATA)?;
    std::fs::write(dir.join(TEMPLATE_FILE), embedded::STARTER_TEMPLATE)?;

    tracing::debug!(dir = %dir.display(), "scaffolded starter files");
    Ok(targets)
}

/// Files that [`scaffold`] writes into `dir`.
pub fn starter_paths(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join(CONFIG_FILE),
        dir.join(DATA_FILE),
        dir.join(TEMPLATE_FILE),
    ]
}
