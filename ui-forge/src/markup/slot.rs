//! Content slots and caller-supplied contents

use super::attributes::AttributeBag;

/// Renderable inner content carrying its own attribute bag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentSlot {
    /// Inner markup
    pub contents: String,
    /// Attributes attached to the slot
    pub attributes: AttributeBag,
}

impl ComponentSlot {
    /// Create a slot
    #[must_use]
    pub fn new(contents: impl Into<String>, attributes: AttributeBag) -> Self {
        Self {
            contents: contents.into(),
            attributes,
        }
    }

    /// Whether the slot has no contents
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Serialized contents
    #[must_use]
    pub fn to_html(&self) -> &str {
        &self.contents
    }
}

/// Content passed by a caller to `make` or `open_tag`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Contents {
    /// Plain markup
    Text(String),
    /// A content slot, flattened to its serialized form before use
    Slot(ComponentSlot),
}

impl Contents {
    /// Flatten to markup
    #[must_use]
    pub fn into_html(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Slot(slot) => slot.contents,
        }
    }
}

impl From<&str> for Contents {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Contents {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<ComponentSlot> for Contents {
    fn from(value: ComponentSlot) -> Self {
        Self::Slot(value)
    }
}
