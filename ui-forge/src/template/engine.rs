//! minijinja-backed template engine with a bounded compiled-template cache

use minijinja::{path_loader, AutoEscape, Environment};
use parking_lot::RwLock;
use sha2::{Digest, Sha256};
use std::collections::VecDeque;
use std::path::Path;
use std::sync::Arc;

use super::{Directive, TemplateEngine};
use crate::error::UiResult;

/// Compiled inline templates kept by [`MiniJinjaEngine::new`]
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

#[derive(Debug)]
struct State {
    env: Environment<'static>,
    // Cache keys, oldest first
    cached: VecDeque<String>,
    capacity: usize,
}

impl State {
    fn remember(&mut self, name: String) {
        self.cached.push_back(name);
        while self.cached.len() > self.capacity {
            if let Some(oldest) = self.cached.pop_front() {
                self.env.remove_template(&oldest);
                tracing::trace!(template = %oldest, "Evicted template");
            }
        }
    }

    fn forget(&mut self, name: &str) {
        self.env.remove_template(name);
        self.cached.retain(|cached| cached != name);
    }
}

/// Thread-safe minijinja environment caching the template strings it compiles
///
/// Templates are keyed by the SHA-256 digest of their source. At most
/// `capacity` compiled templates are kept; the oldest is evicted first.
/// Auto-escaping is disabled: inputs are markup produced by the component
/// layer.
///
/// Named views are resolved through an optional views directory.
///
/// # Examples
///
/// ```rust
/// use ui_forge::template::{MiniJinjaEngine, TemplateEngine};
///
/// let engine = MiniJinjaEngine::new();
/// let html = engine
///     .compile_and_render("<b>{{ name }}</b>", &serde_json::json!({"name": "Ada"}), false)
///     .unwrap();
/// assert_eq!(html, "<b>Ada</b>");
/// ```
#[derive(Debug, Clone)]
pub struct MiniJinjaEngine {
    state: Arc<RwLock<State>>,
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniJinjaEngine {
    /// Create an engine with an empty cache of [`DEFAULT_CACHE_CAPACITY`]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Create an engine keeping at most `capacity` compiled templates
    ///
    /// A capacity of zero disables caching.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);

        Self {
            state: Arc::new(RwLock::new(State {
                env,
                cached: VecDeque::new(),
                capacity,
            })),
        }
    }

    /// Resolve named views from files under `dir`
    #[must_use]
    pub fn with_views(self, dir: impl AsRef<Path>) -> Self {
        self.state.write().env.set_loader(path_loader(dir));
        self
    }

    /// Number of compiled inline templates currently cached
    #[must_use]
    pub fn cached(&self) -> usize {
        self.state.read().cached.len()
    }

    fn cache_key(template: &str) -> String {
        format!("inline:{}", hex::encode(Sha256::digest(template.as_bytes())))
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn compile_and_render(
        &self,
        template: &str,
        data: &serde_json::Value,
        clear_cache: bool,
    ) -> UiResult<String> {
        let name = Self::cache_key(template);

        if clear_cache {
            self.state.write().forget(&name);
        } else if let Ok(compiled) = self.state.read().env.get_template(&name) {
            return Ok(compiled.render(data)?);
        }

        let capacity = self.state.read().capacity;
        if capacity == 0 {
            return Ok(self.state.read().env.render_str(template, data)?);
        }

        {
            let mut state = self.state.write();
            if state.env.get_template(&name).is_err() {
                state
                    .env
                    .add_template_owned(name.clone(), template.to_string())?;
                state.remember(name.clone());
                tracing::trace!(template = %name, "Compiled template");
            }
        }

        let state = self.state.read();
        let compiled = state.env.get_template(&name)?;
        Ok(compiled.render(data)?)
    }

    fn render_view(&self, name: &str, data: &serde_json::Value) -> UiResult<String> {
        let state = self.state.read();
        let view = state.env.get_template(name)?;
        Ok(view.render(data)?)
    }

    fn register_directive(&self, name: &'static str, directive: Directive) {
        self.state
            .write()
            .env
            .add_filter(name, move |value: String| -> String { directive(&value) });
        tracing::debug!(directive = name, "Registered directive");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_renders_with_data() {
        let engine = MiniJinjaEngine::new();
        let html = engine
            .compile_and_render("<p>{{ greeting }}, {{ name }}</p>", &json!({"greeting": "Hi", "name": "Bo"}), false)
            .unwrap();
        assert_eq!(html, "<p>Hi, Bo</p>");
    }

    #[test]
    fn test_markup_is_not_escaped() {
        let engine = MiniJinjaEngine::new();
        let html = engine
            .compile_and_render("{{ body }}", &json!({"body": "<em>x</em>"}), false)
            .unwrap();
        assert_eq!(html, "<em>x</em>");
    }

    #[test]
    fn test_cached_and_cleared_render_agree() {
        let engine = MiniJinjaEngine::new();
        let data = json!({"n": 1});
        let first = engine.compile_and_render("{{ n }}", &data, false).unwrap();
        let cached = engine.compile_and_render("{{ n }}", &data, false).unwrap();
        let cleared = engine.compile_and_render("{{ n }}", &data, true).unwrap();
        assert_eq!(first, "1");
        assert_eq!(cached, first);
        assert_eq!(cleared, first);
    }

    #[test]
    fn test_plain_markup_passes_through() {
        let engine = MiniJinjaEngine::new();
        let html = engine
            .compile_and_render("<div class=\"a\">\n  text\n</div>\n", &json!({}), false)
            .unwrap();
        assert_eq!(html, "<div class=\"a\">\n  text\n</div>\n");
    }

    #[test]
    fn test_syntax_error_is_reported() {
        let engine = MiniJinjaEngine::new();
        let result = engine.compile_and_render("{{ unclosed", &json!({}), false);
        assert!(matches!(result, Err(crate::error::UiError::Render(_))));
    }

    #[test]
    fn test_cache_is_bounded() {
        let engine = MiniJinjaEngine::with_capacity(8);
        for i in 0..100 {
            let html = engine
                .compile_and_render(&format!("<p>{i}</p>"), &json!({}), false)
                .unwrap();
            assert_eq!(html, format!("<p>{i}</p>"));
        }

        assert_eq!(engine.cached(), 8);
        let state = engine.state.read();
        assert_eq!(state.env.templates().count(), 8);
        assert!(state.env.get_template(&MiniJinjaEngine::cache_key("<p>99</p>")).is_ok());
        assert!(state.env.get_template(&MiniJinjaEngine::cache_key("<p>0</p>")).is_err());
    }

    #[test]
    fn test_repeated_template_is_cached_once() {
        let engine = MiniJinjaEngine::new();
        for n in 0..5 {
            engine.compile_and_render("{{ n }}", &json!({ "n": n }), false).unwrap();
        }
        engine.compile_and_render("{{ n }}", &json!({ "n": 0 }), true).unwrap();
        assert_eq!(engine.cached(), 1);
    }

    #[test]
    fn test_zero_capacity_caches_nothing() {
        let engine = MiniJinjaEngine::with_capacity(0);
        let html = engine
            .compile_and_render("<i>{{ x }}</i>", &json!({ "x": 1 }), false)
            .unwrap();
        assert_eq!(html, "<i>1</i>");
        assert_eq!(engine.cached(), 0);
        assert_eq!(engine.state.read().env.templates().count(), 0);
    }

    #[test]
    fn test_render_view_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("pages")).unwrap();
        std::fs::write(dir.path().join("pages/home.html"), "<h1>{{ title }}</h1>").unwrap();

        let engine = MiniJinjaEngine::new().with_views(dir.path());
        let html = engine
            .render_view("pages/home.html", &json!({ "title": "Home" }))
            .unwrap();
        assert_eq!(html, "<h1>Home</h1>");
        assert!(engine.render_view("pages/missing.html", &json!({})).is_err());
    }

    #[test]
    fn test_registered_directive_is_a_filter() {
        fn shout(value: &str) -> String {
            value.to_uppercase()
        }

        let engine = MiniJinjaEngine::new();
        engine.register_directive("shout", shout);
        let html = engine
            .compile_and_render("{{ word | shout }}", &json!({"word": "hey"}), false)
            .unwrap();
        assert_eq!(html, "HEY");
    }
}
