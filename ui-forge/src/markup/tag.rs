//! Renderable element values

use super::attributes::AttributeBag;

/// Void elements rendered self-closing when no other list is configured
pub const DEFAULT_VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// One renderable element: tag name, attributes and inner content
///
/// Orphan tags (void elements) always serialize self-closing and never carry
/// content.
///
/// # Examples
///
/// ```rust
/// use ui_forge::markup::{AttributeBag, ComponentTag};
///
/// let tag = ComponentTag::new("a", AttributeBag::new().with("href", "/"), "Home");
/// assert_eq!(tag.to_html(), r#"<a href="/">Home</a>"#);
///
/// let img = ComponentTag::new("img", AttributeBag::new().with("src", "a.png"), "");
/// assert_eq!(img.to_html(), r#"<img src="a.png"/>"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentTag {
    name: String,
    attributes: AttributeBag,
    content: String,
    orphan: bool,
}

impl ComponentTag {
    /// Build a tag, deciding orphan status from [`DEFAULT_VOID_TAGS`]
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        attributes: AttributeBag,
        content: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let orphan = DEFAULT_VOID_TAGS
            .iter()
            .any(|void| void.eq_ignore_ascii_case(&name));
        Self::with_orphan(name, attributes, content, orphan)
    }

    /// Build a tag, deciding orphan status from a configured void tag list
    #[must_use]
    pub fn with_void_tags(
        name: impl Into<String>,
        attributes: AttributeBag,
        content: impl Into<String>,
        void_tags: &[String],
    ) -> Self {
        let name = name.into();
        let orphan = void_tags.iter().any(|void| void.eq_ignore_ascii_case(&name));
        Self::with_orphan(name, attributes, content, orphan)
    }

    fn with_orphan(
        name: String,
        attributes: AttributeBag,
        content: impl Into<String>,
        orphan: bool,
    ) -> Self {
        Self {
            name,
            attributes,
            content: content.into(),
            orphan,
        }
    }

    /// Tag name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute bag
    #[must_use]
    pub const fn attributes(&self) -> &AttributeBag {
        &self.attributes
    }

    /// Inner content
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether this is a void element
    #[must_use]
    pub const fn is_orphan(&self) -> bool {
        self.orphan
    }

    /// Whether the tag carries inner content
    #[must_use]
    pub fn is_not_empty(&self) -> bool {
        !self.content.is_empty()
    }

    /// Opening fragment, e.g. `<div class="a">`
    #[must_use]
    pub fn open(&self) -> String {
        format!("<{}{}>", self.name, self.attribute_section())
    }

    /// Closing fragment, e.g. `</div>`
    #[must_use]
    pub fn close(&self) -> String {
        format!("</{}>", self.name)
    }

    /// Full serialized markup
    #[must_use]
    pub fn to_html(&self) -> String {
        if self.orphan {
            format!("<{}{}/>", self.name, self.attribute_section())
        } else {
            format!("{}{}{}", self.open(), self.content, self.close())
        }
    }

    fn attribute_section(&self) -> String {
        let html = self.attributes.to_html();
        if html.is_empty() {
            html
        } else {
            format!(" {html}")
        }
    }
}

impl std::fmt::Display for ComponentTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_html())
    }
}
