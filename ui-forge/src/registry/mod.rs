//! Component registry
//!
//! Three-level, insertion-ordered mapping
//! `namespace -> class -> alias -> descriptor`. Aliases are meant to be
//! globally unique, but the structure does not enforce it: lookup scans every
//! namespace and class and returns the first match. Writes are first-wins at
//! alias granularity and nothing is ever removed.

mod alias;
mod descriptor;
mod kind;

pub use alias::{derive_alias, kebab, qualify, ANONYMOUS_SEPARATOR, PATH_SEPARATOR};
pub use descriptor::{ComponentDescriptor, ComponentOptions};
pub use kind::{is_reactive, is_templated, Capability, ComponentClass, ComponentKind};

use indexmap::IndexMap;
use std::fmt;

/// Namespace a component was registered under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Class-backed components
    Named,
    /// Template-only components
    Anonymous,
}

impl Namespace {
    /// Namespace for the given anonymity
    #[must_use]
    pub const fn for_anonymous(anonymous: bool) -> Self {
        if anonymous {
            Self::Anonymous
        } else {
            Self::Named
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named => write!(f, "named"),
            Self::Anonymous => write!(f, "anonymous"),
        }
    }
}

#[derive(Debug, Clone)]
struct Registration {
    kind: ComponentKind,
    descriptor: ComponentDescriptor,
}

/// A registry hit
#[derive(Debug, Clone, Copy)]
pub struct ComponentEntry<'a> {
    /// Namespace of the owning class
    pub namespace: Namespace,
    /// Fully qualified class path
    pub class: &'a str,
    /// Alias the entry was found under
    pub alias: &'a str,
    /// Kind resolved at registration time
    pub kind: ComponentKind,
    /// Resolved descriptor
    pub descriptor: &'a ComponentDescriptor,
}

/// Registry of components, variants and aliases
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    components: IndexMap<Namespace, IndexMap<String, IndexMap<String, Registration>>>,
}

impl ComponentRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a descriptor under `alias`
    ///
    /// Returns `false` and leaves the registry untouched when the alias is
    /// already registered, whatever class owns it.
    pub fn insert(
        &mut self,
        namespace: Namespace,
        class: &str,
        alias: &str,
        kind: ComponentKind,
        descriptor: ComponentDescriptor,
    ) -> bool {
        if self.contains(alias) {
            return false;
        }

        self.components
            .entry(namespace)
            .or_default()
            .entry(class.to_string())
            .or_default()
            .insert(alias.to_string(), Registration { kind, descriptor });
        true
    }

    /// Find the first entry registered under `alias`
    #[must_use]
    pub fn find(&self, alias: &str) -> Option<ComponentEntry<'_>> {
        self.entries().find(|entry| entry.alias == alias)
    }

    /// Whether `alias` is registered
    #[must_use]
    pub fn contains(&self, alias: &str) -> bool {
        self.find(alias).is_some()
    }

    /// All entries in insertion order
    pub fn entries(&self) -> impl Iterator<Item = ComponentEntry<'_>> {
        self.components.iter().flat_map(|(namespace, classes)| {
            classes.iter().flat_map(move |(class, aliases)| {
                aliases.iter().map(move |(alias, registration)| ComponentEntry {
                    namespace: *namespace,
                    class,
                    alias,
                    kind: registration.kind,
                    descriptor: &registration.descriptor,
                })
            })
        })
    }

    /// Number of registered aliases
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().count()
    }

    /// Whether nothing is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
