//! Ordered attribute bags
//!
//! An [`AttributeBag`] keeps attributes in insertion order and knows how to
//! merge with precedence and serialize itself to HTML.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of a single attribute
///
/// Deserializes untagged, so configuration may use either `disabled = true`
/// or `class = "btn"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Boolean attribute: `true` renders the bare name, `false` omits it
    Flag(bool),
    /// Regular string attribute
    Text(String),
}

impl AttrValue {
    /// Render for the `name="value"` position, `None` when the attribute is omitted
    fn render(&self, name: &str) -> Option<String> {
        match self {
            Self::Flag(true) => Some(name.to_string()),
            Self::Flag(false) => None,
            Self::Text(value) => Some(format!(r#"{name}="{}""#, escape_attribute(value))),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Insertion-ordered mapping from attribute name to value
///
/// # Examples
///
/// ```rust
/// use ui_forge::markup::AttributeBag;
///
/// let defaults = AttributeBag::from_iter([("x", "default"), ("y", "keep")]);
/// let caller = AttributeBag::from_iter([("x", "caller")]);
///
/// let merged = caller.merge_onto(&defaults);
/// assert_eq!(merged.to_html(), r#"x="caller" y="keep""#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeBag {
    attributes: IndexMap<String, AttrValue>,
}

impl AttributeBag {
    /// Create an empty bag
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an attribute, keeping its original position on replace
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert)
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up an attribute by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Whether the bag defines `name`
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Number of attributes
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether the bag is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Iterate attributes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.attributes.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Merge this bag onto `base`
    ///
    /// The result starts as a copy of `base`; every key of `self` then
    /// overwrites or appends. Keys keep `base` order, new keys follow in
    /// `self` order.
    #[must_use]
    pub fn merge_onto(&self, base: &Self) -> Self {
        let mut merged = base.clone();
        for (name, value) in &self.attributes {
            merged.attributes.insert(name.clone(), value.clone());
        }
        merged
    }

    /// Serialize as an HTML attribute list (no leading space)
    #[must_use]
    pub fn to_html(&self) -> String {
        self.attributes
            .iter()
            .filter_map(|(name, value)| value.render(name))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Serialize as a JSON object, used as the argument of reactive invocations
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.attributes).unwrap_or_else(|_| "{}".to_string())
    }
}

impl<K, V> FromIterator<(K, V)> for AttributeBag
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            attributes: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl fmt::Display for AttributeBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

/// Escape a string for use inside a double- or single-quoted attribute value
///
/// # Examples
///
/// ```rust
/// use ui_forge::markup::escape_attribute;
///
/// assert_eq!(escape_attribute(r#"say "hi" & <go>"#), "say &quot;hi&quot; &amp; &lt;go&gt;");
/// ```
#[must_use]
pub fn escape_attribute(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
