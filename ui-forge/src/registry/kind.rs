//! Component classes and capability classification
//!
//! A class declares its capability once; registration turns that into a
//! [`ComponentKind`] which is never re-checked at render time.

use serde::{Deserialize, Serialize};

/// Capability a component class implements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// Stateful component backed by the reactive system
    Reactive,
    /// Stateless component backed by the templated system
    Templated,
    /// Neither; only reachable through the generic tag path
    #[default]
    Plain,
}

/// Resolved kind of a registered component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    /// Wired into the reactive component system
    Reactive,
    /// Wired into the templated component system
    Templated,
    /// Registered but not wired into any external system
    Generic,
}

impl ComponentKind {
    /// Classify a class, anonymous components are always templated
    #[must_use]
    pub const fn classify(class: &ComponentClass, anonymous: bool) -> Self {
        if is_reactive(class, anonymous) {
            Self::Reactive
        } else if is_templated(class, anonymous) {
            Self::Templated
        } else {
            Self::Generic
        }
    }
}

/// A component class reference: its identifier path and capability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentClass {
    /// Identifier, e.g. `Input::Date` or `app::components::Button`
    pub path: String,
    /// Declared capability
    #[serde(default)]
    pub capability: Capability,
}

impl ComponentClass {
    /// Class with an explicit capability
    #[must_use]
    pub fn new(path: impl Into<String>, capability: Capability) -> Self {
        Self {
            path: path.into(),
            capability,
        }
    }

    /// Reactive class
    #[must_use]
    pub fn reactive(path: impl Into<String>) -> Self {
        Self::new(path, Capability::Reactive)
    }

    /// Templated class
    #[must_use]
    pub fn templated(path: impl Into<String>) -> Self {
        Self::new(path, Capability::Templated)
    }

    /// Class without a rendering capability
    #[must_use]
    pub fn plain(path: impl Into<String>) -> Self {
        Self::new(path, Capability::Plain)
    }
}

/// True iff not anonymous and the class is reactive
#[must_use]
pub const fn is_reactive(class: &ComponentClass, anonymous: bool) -> bool {
    !anonymous && matches!(class.capability, Capability::Reactive)
}

/// True iff anonymous or the class is templated
#[must_use]
pub const fn is_templated(class: &ComponentClass, anonymous: bool) -> bool {
    anonymous || matches!(class.capability, Capability::Templated)
}
