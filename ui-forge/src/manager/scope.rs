//! Request-scoped tag stack
//!
//! Open tags are tracked per logical render. Each request builds its own
//! [`RenderScope`], so concurrent renders never interleave on one stack.

use super::UiManager;
use crate::error::{UiError, UiResult};
use crate::host::{BindingTable, ComponentHost};
use crate::markup::{AttributeBag, ComponentTag, Contents};

/// LIFO stack of tags whose closing fragment is still owed
#[derive(Debug, Clone, Default)]
pub struct TagStack {
    tags: Vec<ComponentTag>,
}

impl TagStack {
    /// Create an empty stack
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `tag`
    ///
    /// Orphan and content-bearing tags are returned fully serialized and
    /// nothing is pushed. Otherwise the tag is pushed and only its opening
    /// fragment is returned.
    pub fn open(&mut self, tag: ComponentTag) -> String {
        if tag.is_orphan() || tag.is_not_empty() {
            return tag.to_html();
        }

        let html = tag.open();
        self.tags.push(tag);
        html
    }

    /// Close the most recently opened tag
    ///
    /// # Errors
    ///
    /// Returns [`UiError::NoOpenTag`] when the stack is empty.
    pub fn close(&mut self) -> UiResult<String> {
        self.tags
            .pop()
            .map(|tag| tag.close())
            .ok_or(UiError::NoOpenTag)
    }

    /// Number of open tags
    #[must_use]
    pub fn depth(&self) -> usize {
        self.tags.len()
    }

    /// Whether every opened tag has been closed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// One logical render against a shared [`UiManager`]
///
/// # Examples
///
/// ```rust
/// use ui_forge::config::UiConfig;
/// use ui_forge::manager::UiManager;
/// use ui_forge::markup::AttributeBag;
///
/// let manager = UiManager::new(UiConfig::default());
/// let mut scope = manager.scope();
///
/// assert_eq!(scope.open_tag("span", AttributeBag::new(), None), "<span>");
/// assert_eq!(scope.close_tag().unwrap(), "</span>");
/// assert!(scope.close_tag().is_err());
/// ```
pub struct RenderScope<'m, H: ComponentHost = BindingTable> {
    manager: &'m UiManager<H>,
    tags: TagStack,
}

impl<'m, H: ComponentHost> RenderScope<'m, H> {
    pub(super) fn new(manager: &'m UiManager<H>) -> Self {
        Self {
            manager,
            tags: TagStack::new(),
        }
    }

    /// The manager this scope renders against
    #[must_use]
    pub const fn manager(&self) -> &'m UiManager<H> {
        self.manager
    }

    /// Open a tag for incremental writing
    ///
    /// The tag is resolved like a generic component: configured tag name,
    /// merged default attributes and default contents apply.
    pub fn open_tag(
        &mut self,
        name: &str,
        attributes: AttributeBag,
        contents: Option<Contents>,
    ) -> String {
        let tag = self.manager.make_component_tag(name, &attributes, contents);
        self.tags.open(tag)
    }

    /// Close the most recently opened tag
    ///
    /// # Errors
    ///
    /// Returns [`UiError::NoOpenTag`] when nothing is open.
    pub fn close_tag(&mut self) -> UiResult<String> {
        self.tags.close()
    }

    /// Number of tags still open in this scope
    #[must_use]
    pub fn depth(&self) -> usize {
        self.tags.depth()
    }

    /// See [`UiManager::make`]
    ///
    /// # Errors
    ///
    /// Propagates template engine failures.
    pub fn make(
        &self,
        alias: &str,
        attributes: AttributeBag,
        contents: Option<Contents>,
    ) -> UiResult<String> {
        self.manager.make(alias, attributes, contents)
    }

    /// See [`UiManager::render`]
    ///
    /// # Errors
    ///
    /// Propagates template engine failures.
    pub fn render(
        &self,
        template: &str,
        data: &serde_json::Value,
        delete_cache: bool,
    ) -> UiResult<String> {
        self.manager.render(template, data, delete_cache)
    }
}
