//! Template engine integration
//!
//! The component layer never compiles templates itself; it hands markup and
//! data bindings to a [`TemplateEngine`]. [`MiniJinjaEngine`] is the default.

mod directives;
mod engine;

pub use directives::DIRECTIVES;
pub use engine::{MiniJinjaEngine, DEFAULT_CACHE_CAPACITY};

use crate::error::UiResult;

/// Syntax extension callback: transforms a value into markup
pub type Directive = fn(&str) -> String;

/// Compiles and renders template strings
pub trait TemplateEngine: Send + Sync {
    /// Compile `template` (reusing a cached compilation unless `clear_cache`)
    /// and render it with `data`
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Render`](crate::error::UiError::Render) when the
    /// template does not compile or fails to render.
    fn compile_and_render(
        &self,
        template: &str,
        data: &serde_json::Value,
        clear_cache: bool,
    ) -> UiResult<String>;

    /// Render the named view with `data`
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Render`](crate::error::UiError::Render) when the
    /// view cannot be found, does not compile or fails to render.
    fn render_view(&self, name: &str, data: &serde_json::Value) -> UiResult<String>;

    /// Expose a directive to templates under `name`
    fn register_directive(&self, name: &'static str, directive: Directive);
}
