//! ui-forge: component registration and tag rendering for server-rendered HTML
//!
//! ui-forge sits between application code and a template engine:
//! - **Registry**: components indexed by namespace, class and alias, with
//!   configured variants registered as aliases of their own
//! - **Rendering**: `make` merges configured defaults with caller input and
//!   emits reactive, templated or generic markup
//! - **Tag stack**: incremental open/close writing, scoped per render
//! - **Compression**: whitespace and comment stripping of rendered HTML
//!
//! # Quick Start
//!
//! ```rust
//! use ui_forge::prelude::*;
//!
//! let config = UiConfig::default().with_debug(false);
//! let mut manager = UiManager::new(config);
//! manager.register(&ComponentClass::reactive("Counter"), None, false);
//!
//! let html = manager
//!     .make("counter", AttributeBag::new().with("count", "1"), None)
//!     .unwrap();
//! assert_eq!(html, r#"<reactive:ui-counter count="1"/>"#);
//! ```

// Lint configuration is handled at the workspace level in Cargo.toml
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod host;
pub mod manager;
pub mod markup;
pub mod observability;
pub mod registry;
pub mod template;

pub mod prelude {
    //! Convenience re-exports for common types and traits
    //!
    //! # Examples
    //!
    //! ```rust
    //! use ui_forge::prelude::*;
    //! ```

    pub use crate::config::{ClassDecl, UiConfig};
    pub use crate::error::{UiError, UiResult};
    pub use crate::host::{BindingTable, ComponentHost};
    pub use crate::manager::{ClassRegistration, Page, RenderScope, UiManager};
    pub use crate::markup::{
        compress, AttrValue, AttributeBag, ComponentSlot, ComponentTag, Contents,
    };
    pub use crate::registry::{
        Capability, ComponentClass, ComponentKind, ComponentOptions, ComponentRegistry,
    };
    pub use crate::template::{MiniJinjaEngine, TemplateEngine};

    pub use serde_json::json;
}
