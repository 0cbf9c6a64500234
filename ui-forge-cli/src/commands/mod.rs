//! CLI command implementations

pub mod alias;
pub mod compress;
pub mod list;
pub mod render;

pub use alias::AliasCommand;
pub use compress::CompressCommand;
pub use list::ListCommand;
pub use render::RenderCommand;

use anyhow::{Context, Result};
use std::path::Path;
use ui_forge::config::{UiConfig, DEFAULT_CONFIG_FILE};
use ui_forge::manager::UiManager;

/// Load configuration and run its declared registrations
pub fn load_manager(config: Option<&Path>) -> Result<UiManager> {
    let path = config.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    let config = UiConfig::load_from(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    let manager = UiManager::bootstrap(config);
    tracing::debug!(
        path = %path.display(),
        aliases = manager.registry().len(),
        "Loaded configuration"
    );
    Ok(manager)
}
