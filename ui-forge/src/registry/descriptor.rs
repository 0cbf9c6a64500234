//! Per-alias component configuration and resolved descriptors

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::markup::AttributeBag;

/// Raw per-alias configuration, as written in `[components.<alias>]`
///
/// Every field is optional; missing keys are treated as empty.
///
/// ```toml
/// [components.button]
/// tag = "button"
/// attributes = { type = "button", class = "btn" }
///
/// [components.button.variants.primary]
/// attributes = { class = "btn btn-primary" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentOptions {
    /// Tag name to emit
    pub tag: Option<String>,
    /// Default attributes
    pub attributes: AttributeBag,
    /// Default inner content
    pub contents: Option<String>,
    /// Named alternate configurations
    pub variants: IndexMap<String, ComponentOptions>,
}

/// Resolved record stored in the registry for one alias
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentDescriptor {
    /// Configured tag name, `None` when the alias doubles as the tag
    pub tag: Option<String>,
    /// Default attributes
    pub attributes: AttributeBag,
    /// Default inner content, possibly empty
    pub contents: String,
    /// Effective variant records, already merged onto this descriptor
    pub variants: IndexMap<String, ComponentDescriptor>,
}

impl ComponentDescriptor {
    /// Resolve configuration into a descriptor
    ///
    /// Variant attributes are merged onto the parent's here, once, so the
    /// stored variants never observe later changes to the parent.
    #[must_use]
    pub fn from_options(options: &ComponentOptions) -> Self {
        let mut descriptor = Self {
            tag: options.tag.clone(),
            attributes: options.attributes.clone(),
            contents: options.contents.clone().unwrap_or_default(),
            variants: IndexMap::new(),
        };

        let variants = options
            .variants
            .iter()
            .map(|(name, variant)| (name.clone(), descriptor.variant(variant)))
            .collect();
        descriptor.variants = variants;

        descriptor
    }

    /// Effective record of one variant of this descriptor
    ///
    /// Tag and contents fall back to the parent; attributes are merged with
    /// the variant's own values taking precedence. Nested variants are not
    /// carried over.
    #[must_use]
    pub fn variant(&self, variant: &ComponentOptions) -> Self {
        Self {
            tag: variant.tag.clone().or_else(|| self.tag.clone()),
            attributes: variant.attributes.merge_onto(&self.attributes),
            contents: variant
                .contents
                .clone()
                .unwrap_or_else(|| self.contents.clone()),
            variants: IndexMap::new(),
        }
    }

    /// Alias under which a variant is registered
    #[must_use]
    pub fn variant_alias(variant: &str, alias: &str) -> String {
        format!("{variant}-{alias}")
    }
}
