//! Component manager
//!
//! [`UiManager`] owns the registry and ties it to configuration, the
//! template engine and the external component systems. It is built once at
//! startup; after registration it is only read, so it can be shared across
//! threads behind an `Arc`. Per-render state lives in a [`RenderScope`].
//!
//! # Example
//!
//! ```rust
//! use ui_forge::config::UiConfig;
//! use ui_forge::manager::UiManager;
//! use ui_forge::markup::AttributeBag;
//! use ui_forge::registry::{ComponentClass, ComponentOptions};
//!
//! let config = UiConfig::default().with_debug(false).with_component(
//!     "button",
//!     ComponentOptions {
//!         tag: Some("button".to_string()),
//!         attributes: AttributeBag::new().with("type", "button"),
//!         ..Default::default()
//!     },
//! );
//!
//! let mut manager = UiManager::new(config);
//! manager.register(&ComponentClass::templated("Button"), None, false);
//!
//! let html = manager
//!     .make("button", AttributeBag::new().with("class", "big"), Some("Go".into()))
//!     .unwrap();
//! assert_eq!(html, r#"<button type="button" class="big">Go</button>"#);
//! ```

mod page;
mod scope;

pub use page::Page;
pub use scope::{RenderScope, TagStack};

use indexmap::IndexMap;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use tracing::{debug, trace};

use crate::config::UiConfig;
use crate::error::UiResult;
use crate::host::{BindingTable, ComponentHost};
use crate::markup::{compress, AttributeBag, ComponentTag, Contents};
use crate::registry::{
    derive_alias, qualify, ComponentClass, ComponentDescriptor, ComponentEntry, ComponentKind,
    ComponentRegistry, Namespace, ANONYMOUS_SEPARATOR, PATH_SEPARATOR,
};
use crate::template::{MiniJinjaEngine, TemplateEngine, DIRECTIVES};

/// A class to register, with an optional explicit alias
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRegistration {
    /// Class reference
    pub class: ComponentClass,
    /// Explicit alias
    pub alias: Option<String>,
}

impl From<ComponentClass> for ClassRegistration {
    fn from(class: ComponentClass) -> Self {
        Self { class, alias: None }
    }
}

impl From<(ComponentClass, &str)> for ClassRegistration {
    fn from((class, alias): (ComponentClass, &str)) -> Self {
        Self {
            class,
            alias: Some(alias.to_string()),
        }
    }
}

impl From<(ComponentClass, String)> for ClassRegistration {
    fn from((class, alias): (ComponentClass, String)) -> Self {
        Self {
            class,
            alias: Some(alias),
        }
    }
}

/// Registers components and renders them
pub struct UiManager<H: ComponentHost = BindingTable> {
    config: UiConfig,
    registry: ComponentRegistry,
    host: H,
    engine: Box<dyn TemplateEngine>,
}

impl UiManager<BindingTable> {
    /// Manager with an in-process [`BindingTable`] and the minijinja engine
    #[must_use]
    pub fn new(config: UiConfig) -> Self {
        Self::with_host(config, BindingTable::new())
    }

    /// Manager with every class declared under `registrations` already
    /// registered
    #[must_use]
    pub fn bootstrap(config: UiConfig) -> Self {
        let mut manager = Self::new(config);
        manager.register_declared();
        manager
    }
}

impl<H: ComponentHost> UiManager<H> {
    /// Manager feeding a custom host
    #[must_use]
    pub fn with_host(config: UiConfig, host: H) -> Self {
        let engine = MiniJinjaEngine::with_capacity(config.template_cache);
        let engine = match &config.views_dir {
            Some(dir) => engine.with_views(dir),
            None => engine,
        };
        Self::with_parts(config, host, Box::new(engine))
    }

    /// Manager from explicit parts
    ///
    /// Built-in directives are registered with `engine` here.
    #[must_use]
    pub fn with_parts(config: UiConfig, host: H, engine: Box<dyn TemplateEngine>) -> Self {
        for (name, directive) in DIRECTIVES {
            engine.register_directive(*name, *directive);
        }

        Self {
            config,
            registry: ComponentRegistry::new(),
            host,
            engine,
        }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Registered components
    #[must_use]
    pub const fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// The external component systems
    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Prefix under which aliases are exposed
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.config.prefix
    }

    /// Alias a named class would be registered under
    #[must_use]
    pub fn alias_for(&self, class: &str) -> String {
        derive_alias(class, &self.config.component_namespace)
    }

    /// Register every class declared in configuration
    pub fn register_declared(&mut self) {
        let declared = self.config.registrations.clone();
        for decl in &declared {
            self.register(&decl.component_class(), decl.alias.as_deref(), decl.anonymous);
        }
    }

    /// Register `class` and the variants configured for its alias
    ///
    /// Named classes default to an alias derived from their path; anonymous
    /// ones use the path verbatim. At most one registration is recorded per
    /// alias and later attempts are ignored.
    pub fn register(&mut self, class: &ComponentClass, alias: Option<&str>, anonymous: bool) {
        let alias = match alias {
            Some(alias) => alias.to_string(),
            None if anonymous => class.path.clone(),
            None => self.alias_for(&class.path),
        };

        if self.registry.contains(&alias) {
            debug!(alias = %alias, class = %class.path, "Alias already registered, skipping");
            return;
        }

        let namespace = Namespace::for_anonymous(anonymous);
        let qualified = match namespace {
            Namespace::Anonymous => {
                qualify(&class.path, &self.config.anonymous_namespace, ANONYMOUS_SEPARATOR)
            }
            Namespace::Named => {
                qualify(&class.path, &self.config.component_namespace, PATH_SEPARATOR)
            }
        };

        let descriptor = self
            .config
            .component(&alias)
            .map(ComponentDescriptor::from_options)
            .unwrap_or_default();
        let kind = ComponentKind::classify(class, anonymous);

        self.add(namespace, &qualified, &alias, kind, descriptor);
    }

    /// Register several classes sharing one anonymity flag
    pub fn register_many(
        &mut self,
        classes: impl IntoIterator<Item = impl Into<ClassRegistration>>,
        anonymous: bool,
    ) {
        for registration in classes {
            let ClassRegistration { class, alias } = registration.into();
            self.register(&class, alias.as_deref(), anonymous);
        }
    }

    fn add(
        &mut self,
        namespace: Namespace,
        class: &str,
        alias: &str,
        kind: ComponentKind,
        descriptor: ComponentDescriptor,
    ) {
        let variants = descriptor.variants.clone();

        if !self.registry.insert(namespace, class, alias, kind, descriptor) {
            debug!(alias, class, "Alias already registered, skipping");
            return;
        }
        self.bind(class, alias, kind);

        for (name, variant) in variants {
            let variant_alias = ComponentDescriptor::variant_alias(&name, alias);
            self.add(namespace, class, &variant_alias, kind, variant);
        }
    }

    fn bind(&mut self, class: &str, alias: &str, kind: ComponentKind) {
        let prefix = self.config.prefix.as_str();
        match kind {
            ComponentKind::Reactive => {
                self.host
                    .register_reactive(&format!("{prefix}-{alias}"), class);
            }
            ComponentKind::Templated => self.host.register_templated(class, alias, prefix),
            ComponentKind::Generic => {}
        }
        debug!(alias, class, ?kind, "Registered component");
    }

    /// First registry entry under `alias`
    #[must_use]
    pub fn find(&self, alias: &str) -> Option<ComponentEntry<'_>> {
        self.registry.find(alias)
    }

    /// Configured tag of a registered alias
    #[must_use]
    pub fn component_tag(&self, alias: &str) -> Option<&str> {
        self.find(alias).and_then(|entry| entry.descriptor.tag.as_deref())
    }

    /// Default attributes of a registered alias
    #[must_use]
    pub fn component_attributes(&self, alias: &str) -> Option<&AttributeBag> {
        self.find(alias).map(|entry| &entry.descriptor.attributes)
    }

    /// Default contents of a registered alias
    #[must_use]
    pub fn component_contents(&self, alias: &str) -> Option<&str> {
        self.find(alias).map(|entry| entry.descriptor.contents.as_str())
    }

    /// Effective variants of a registered alias
    #[must_use]
    pub fn component_variants(
        &self,
        alias: &str,
    ) -> Option<&IndexMap<String, ComponentDescriptor>> {
        self.find(alias).map(|entry| &entry.descriptor.variants)
    }

    /// Caller attributes merged onto the registered defaults of `alias`
    #[must_use]
    pub fn merge_attributes(&self, alias: &str, attributes: &AttributeBag) -> AttributeBag {
        match self.component_attributes(alias) {
            Some(defaults) => attributes.merge_onto(defaults),
            None => attributes.clone(),
        }
    }

    /// Caller contents, or the registered defaults of `alias` when absent
    #[must_use]
    pub fn merge_contents(&self, alias: &str, contents: Option<Contents>) -> String {
        contents.map_or_else(
            || self.component_contents(alias).unwrap_or_default().to_string(),
            Contents::into_html,
        )
    }

    /// Resolve `alias` into a generic tag
    ///
    /// The registered tag name falls back to the alias itself.
    #[must_use]
    pub fn make_component_tag(
        &self,
        alias: &str,
        attributes: &AttributeBag,
        contents: Option<Contents>,
    ) -> ComponentTag {
        let name = self.component_tag(alias).unwrap_or(alias);
        self.tag(
            name,
            self.merge_attributes(alias, attributes),
            self.merge_contents(alias, contents),
        )
    }

    /// Produce markup for `alias`
    ///
    /// Registered aliases get their defaults merged in and the result is
    /// passed through [`render`](Self::render). Aliases only present in
    /// configuration are built from it directly. Anything else becomes a
    /// literal tag named `alias`.
    ///
    /// # Errors
    ///
    /// Propagates template engine failures for registered aliases.
    pub fn make(
        &self,
        alias: &str,
        attributes: AttributeBag,
        contents: Option<Contents>,
    ) -> UiResult<String> {
        if let Some(entry) = self.find(alias) {
            let markup = match entry.kind {
                ComponentKind::Reactive => self.reactive_markup(
                    entry.alias,
                    &attributes.merge_onto(&entry.descriptor.attributes),
                    &self.merge_contents(alias, contents),
                ),
                ComponentKind::Templated | ComponentKind::Generic => self
                    .make_component_tag(alias, &attributes, contents)
                    .to_html(),
            };
            trace!(alias, kind = ?entry.kind, "Rendering registered component");
            return self.render(&markup, &Value::Object(Map::new()), false);
        }

        if let Some(options) = self.config.component(alias) {
            trace!(alias, "Rendering configured component");
            let contents = contents.map_or_else(
                || options.contents.clone().unwrap_or_default(),
                Contents::into_html,
            );
            let name = options.tag.as_deref().unwrap_or(alias);
            let tag = self.tag(name, attributes.merge_onto(&options.attributes), contents);
            return Ok(tag.to_html());
        }

        let contents = contents.map(Contents::into_html).unwrap_or_default();
        Ok(self.tag(alias, attributes, contents).to_html())
    }

    /// Compile and render a template string
    ///
    /// Output is compressed unless `debug` is set in configuration.
    ///
    /// # Errors
    ///
    /// Propagates template engine failures.
    pub fn render(&self, template: &str, data: &Value, delete_cache: bool) -> UiResult<String> {
        let rendered = self.engine.compile_and_render(template, data, delete_cache)?;
        if self.config.debug {
            Ok(rendered)
        } else {
            Ok(compress(&rendered))
        }
    }

    /// See [`markup::compress`](crate::markup::compress)
    #[must_use]
    pub fn compress(&self, markup: &str) -> String {
        compress(markup)
    }

    /// Start a render with its own tag stack
    #[must_use]
    pub fn scope(&self) -> RenderScope<'_, H> {
        RenderScope::new(self)
    }

    fn tag(&self, name: &str, attributes: AttributeBag, contents: String) -> ComponentTag {
        ComponentTag::with_void_tags(name, attributes, contents, &self.config.void_tags)
    }

    fn reactive_markup(&self, alias: &str, attributes: &AttributeBag, contents: &str) -> String {
        let name = format!("{}-{alias}", self.config.prefix);

        if contents.is_empty() {
            if attributes.is_empty() {
                format!("<reactive:{name}/>")
            } else {
                format!("<reactive:{name} {}/>", attributes.to_html())
            }
        } else {
            let key = hex::encode(Sha256::digest(contents.as_bytes()));
            format!("@reactive('{name}', {}, key('{key}'))", attributes.to_json())
        }
    }
}
