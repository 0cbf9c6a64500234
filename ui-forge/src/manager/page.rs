//! Full-page rendering from named views
//!
//! Without a layout the page is the view `pages/<path>.html`. With a layout,
//! `contents/<path>.html` is rendered first and handed to
//! `layouts/<layout>.html` as `content`. Dots in a path are directory
//! separators, so `blog.post` resolves to `pages/blog/post.html`.

use serde_json::{Map, Value};

use super::UiManager;
use crate::error::UiResult;
use crate::host::ComponentHost;

/// A page to render
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use ui_forge::manager::Page;
///
/// let page = Page::new("blog.post")
///     .with_data(json!({ "title": "Hello" }))
///     .with_layout("app", json!({ "lang": "en" }));
/// assert_eq!(page.layout(), Some("app"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    content: String,
    content_data: Map<String, Value>,
    layout: Option<String>,
    layout_data: Map<String, Value>,
    merge_data: Map<String, Value>,
}

impl Page {
    /// Page rendered from the view at `content`
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Data for the content view; non-object values are ignored
    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.content_data = into_object(data);
        self
    }

    /// Wrap the content in `layout`, rendered with `data`
    #[must_use]
    pub fn with_layout(mut self, layout: impl Into<String>, data: Value) -> Self {
        self.layout = Some(layout.into());
        self.layout_data = into_object(data);
        self
    }

    /// Data shared by every view of the page, overridden by view data
    #[must_use]
    pub fn with_merge_data(mut self, data: Value) -> Self {
        self.merge_data = into_object(data);
        self
    }

    /// Content view path
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Layout view path
    #[must_use]
    pub fn layout(&self) -> Option<&str> {
        self.layout.as_deref()
    }
}

impl<H: ComponentHost> UiManager<H> {
    /// Render `page` through the template engine's views
    ///
    /// The content view sees the merge data overlaid with its own data. The
    /// layout sees content data, then merge data, then layout data, and
    /// finally the rendered `content`, each overriding the previous.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Render`](crate::error::UiError::Render) when a view
    /// is missing or fails to render.
    pub fn page(&self, page: &Page) -> UiResult<String> {
        let content_scope = overlay(&[&page.merge_data, &page.content_data]);

        let Some(layout) = page.layout.as_deref() else {
            let name = view_name("pages", &page.content);
            tracing::debug!(view = %name, "Rendering page");
            return self.engine.render_view(&name, &content_scope);
        };

        let content_name = view_name("contents", &page.content);
        let layout_name = view_name("layouts", layout);
        tracing::debug!(content = %content_name, layout = %layout_name, "Rendering page");

        let content = self.engine.render_view(&content_name, &content_scope)?;
        let mut rendered = Map::new();
        rendered.insert("content".to_string(), Value::String(content));

        let layout_scope = overlay(&[
            &page.content_data,
            &page.merge_data,
            &page.layout_data,
            &rendered,
        ]);
        self.engine.render_view(&layout_name, &layout_scope)
    }
}

fn view_name(group: &str, path: &str) -> String {
    format!("{group}/{}.html", path.replace('.', "/"))
}

fn into_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn overlay(layers: &[&Map<String, Value>]) -> Value {
    let mut merged = Map::new();
    for layer in layers {
        for (key, value) in *layer {
            merged.insert(key.clone(), value.clone());
        }
    }
    Value::Object(merged)
}
