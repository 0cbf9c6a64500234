//! Configuration management for ui-forge
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `UI_FORGE_` prefix, `__` for nesting)
//! 2. The TOML file passed to [`UiConfig::load_from`] (or `./ui-forge.toml`)
//! 3. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! prefix = "ui"
//! debug = false
//! component_namespace = "app::components"
//! template_cache = 256
//! views_dir = "views"
//!
//! [components.button]
//! tag = "button"
//! attributes = { type = "button", class = "btn" }
//!
//! [components.button.variants.primary]
//! attributes = { class = "btn btn-primary" }
//!
//! [[registrations]]
//! class = "Button"
//! capability = "templated"
//! ```
//!
//! # Usage
//!
//! ```rust
//! use ui_forge::config::UiConfig;
//!
//! let config = UiConfig::default();
//! assert_eq!(config.prefix, "ui");
//! assert!(config.component("button").is_none());
//! ```

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::UiResult;
use crate::markup::DEFAULT_VOID_TAGS;
use crate::registry::{Capability, ComponentClass, ComponentOptions};
use crate::template::DEFAULT_CACHE_CAPACITY;

/// Default configuration file name searched in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "ui-forge.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "UI_FORGE_";

/// Declarative registration entry, run by `UiManager::bootstrap`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDecl {
    /// Class path, qualified with the configured namespace at registration
    pub class: String,
    /// Explicit alias; derived from the class path when omitted
    #[serde(default)]
    pub alias: Option<String>,
    /// Declared capability
    #[serde(default)]
    pub capability: Capability,
    /// Register under the anonymous namespace
    #[serde(default)]
    pub anonymous: bool,
}

impl ClassDecl {
    /// Class reference for this declaration
    #[must_use]
    pub fn component_class(&self) -> ComponentClass {
        ComponentClass::new(self.class.clone(), self.capability)
    }
}

/// Complete ui-forge configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Prefix under which aliases are exposed to the host systems
    pub prefix: String,

    /// Skip output compression when true
    pub debug: bool,

    /// Namespace of class-backed components (`::` separated)
    pub component_namespace: String,

    /// Namespace of anonymous components (`.` separated)
    pub anonymous_namespace: String,

    /// Void elements rendered self-closing
    pub void_tags: Vec<String>,

    /// Compiled inline templates kept by the template engine
    pub template_cache: usize,

    /// Directory holding `pages/`, `contents/` and `layouts/` views
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views_dir: Option<PathBuf>,

    /// Per-alias component configuration
    pub components: IndexMap<String, ComponentOptions>,

    /// Classes registered by `UiManager::bootstrap`
    pub registrations: Vec<ClassDecl>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            prefix: "ui".to_string(),
            debug: cfg!(debug_assertions),
            component_namespace: "app::components".to_string(),
            anonymous_namespace: "ui::components".to_string(),
            void_tags: DEFAULT_VOID_TAGS.iter().map(ToString::to_string).collect(),
            template_cache: DEFAULT_CACHE_CAPACITY,
            views_dir: None,
            components: IndexMap::new(),
            registrations: Vec::new(),
        }
    }
}

impl UiConfig {
    /// Load `./ui-forge.toml` (when present) layered over defaults and under
    /// the environment
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`](crate::error::UiError::Config) when a source
    /// cannot be parsed or extracted.
    pub fn load() -> UiResult<Self> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration from a specific file
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`](crate::error::UiError::Config) when a source
    /// cannot be parsed or extracted.
    pub fn load_from(path: impl AsRef<Path>) -> UiResult<Self> {
        let config = Self::figment(path.as_ref()).extract()?;
        Ok(config)
    }

    /// Layered figment used by the loaders
    #[must_use]
    pub fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Configuration of one alias
    #[must_use]
    pub fn component(&self, alias: &str) -> Option<&ComponentOptions> {
        self.components.get(alias)
    }

    /// Builder-style component configuration, handy for code-defined setups
    #[must_use]
    pub fn with_component(mut self, alias: impl Into<String>, options: ComponentOptions) -> Self {
        self.components.insert(alias.into(), options);
        self
    }

    /// Builder-style debug toggle
    #[must_use]
    pub const fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::AttrValue;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = UiConfig::default();
        assert_eq!(config.prefix, "ui");
        assert_eq!(config.component_namespace, "app::components");
        assert_eq!(config.anonymous_namespace, "ui::components");
        assert!(config.void_tags.iter().any(|tag| tag == "img"));
        assert!(config.components.is_empty());
        assert!(config.registrations.is_empty());
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
prefix = "kit"
debug = false

[components.button]
tag = "button"
attributes = {{ type = "button", class = "btn" }}

[components.button.variants.primary]
attributes = {{ class = "btn btn-primary" }}

[[registrations]]
class = "Button"
capability = "templated"
"#
        )
        .unwrap();

        let config = UiConfig::load_from(file.path()).unwrap();
        assert_eq!(config.prefix, "kit");
        assert!(!config.debug);

        let button = config.component("button").unwrap();
        assert_eq!(button.tag.as_deref(), Some("button"));
        assert_eq!(button.attributes.get("class"), Some(&AttrValue::from("btn")));
        assert!(button.variants.contains_key("primary"));

        assert_eq!(config.registrations.len(), 1);
        assert_eq!(config.registrations[0].capability, Capability::Templated);
        assert!(!config.registrations[0].anonymous);
        assert_eq!(config.registrations[0].alias, None);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = UiConfig::load_from(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.prefix, "ui");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "prefix = [").unwrap();
        let result = UiConfig::load_from(file.path());
        assert!(matches!(result, Err(crate::error::UiError::Config(_))));
    }

    #[test]
    fn test_engine_settings_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "template_cache = 16\nviews_dir = \"resources/views\"").unwrap();

        let config = UiConfig::load_from(file.path()).unwrap();
        assert_eq!(config.template_cache, 16);
        assert_eq!(config.views_dir, Some(PathBuf::from("resources/views")));
        assert_eq!(UiConfig::default().views_dir, None);
    }

    #[test]
    fn test_builders() {
        let config = UiConfig::default()
            .with_debug(false)
            .with_component("card", ComponentOptions::default());
        assert!(!config.debug);
        assert!(config.component("card").is_some());
    }
}
