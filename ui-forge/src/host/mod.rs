//! External component systems
//!
//! Registration wires every reactive or templated alias into exactly one
//! external system. [`ComponentHost`] is that seam; [`BindingTable`] is the
//! in-process implementation that records the bindings.

/// The reactive and templated component systems a registry feeds
///
/// Each method is called at most once per alias.
#[cfg_attr(test, mockall::automock)]
pub trait ComponentHost: Send + Sync {
    /// Register a reactive component under its prefixed alias
    fn register_reactive(&mut self, qualified_alias: &str, class: &str);

    /// Register a templated component under `prefix` and `alias`
    fn register_templated(&mut self, class: &str, alias: &str, prefix: &str);
}

/// One templated binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatedBinding {
    /// Fully qualified class path
    pub class: String,
    /// Unprefixed alias
    pub alias: String,
    /// Prefix the alias is exposed under
    pub prefix: String,
}

impl TemplatedBinding {
    /// Tag name the templated system exposes, e.g. `x-ui-button`
    #[must_use]
    pub fn tag_name(&self) -> String {
        format!("x-{}-{}", self.prefix, self.alias)
    }
}

/// Records host bindings in registration order
///
/// # Examples
///
/// ```rust
/// use ui_forge::host::{BindingTable, ComponentHost};
///
/// let mut table = BindingTable::new();
/// table.register_reactive("ui-counter", "app::components::Counter");
/// assert_eq!(table.reactive_class("ui-counter"), Some("app::components::Counter"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BindingTable {
    reactive: Vec<(String, String)>,
    templated: Vec<TemplatedBinding>,
}

impl BindingTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Class bound to a reactive name
    #[must_use]
    pub fn reactive_class(&self, qualified_alias: &str) -> Option<&str> {
        self.reactive
            .iter()
            .find(|(name, _)| name == qualified_alias)
            .map(|(_, class)| class.as_str())
    }

    /// Reactive bindings as `(qualified alias, class)` pairs
    #[must_use]
    pub fn reactive(&self) -> &[(String, String)] {
        &self.reactive
    }

    /// Templated bindings
    #[must_use]
    pub fn templated(&self) -> &[TemplatedBinding] {
        &self.templated
    }
}

impl ComponentHost for BindingTable {
    fn register_reactive(&mut self, qualified_alias: &str, class: &str) {
        tracing::debug!(alias = qualified_alias, class, "Bound reactive component");
        self.reactive
            .push((qualified_alias.to_string(), class.to_string()));
    }

    fn register_templated(&mut self, class: &str, alias: &str, prefix: &str) {
        tracing::debug!(alias, class, prefix, "Bound templated component");
        self.templated.push(TemplatedBinding {
            class: class.to_string(),
            alias: alias.to_string(),
            prefix: prefix.to_string(),
        });
    }
}
