//! Alias derivation for named component classes
//!
//! Components are grouped hierarchically (`Input::Date`); the alias reverses
//! the path so the most specific segment comes first (`date-input`).

use convert_case::{Boundary, Case, Converter};
use once_cell::sync::Lazy;

/// Separator between segments of a named class path
pub const PATH_SEPARATOR: &str = "::";

/// Separator between segments of an anonymous component path
pub const ANONYMOUS_SEPARATOR: &str = ".";

/// Word boundary before every ASCII uppercase letter that is not the first
/// character. Digits and acronyms get no boundary of their own.
const BEFORE_UPPERCASE: Boundary = Boundary::Custom {
    condition: next_is_uppercase,
    arg: None,
    start: 1,
    len: 0,
};

static KEBAB: Lazy<Converter> = Lazy::new(|| {
    Converter::new()
        .set_boundaries(&[BEFORE_UPPERCASE])
        .to_case(Case::Kebab)
});

fn next_is_uppercase(graphemes: &[&str], _: Option<&'static str>) -> bool {
    graphemes
        .get(1)
        .is_some_and(|grapheme| grapheme.chars().next().is_some_and(|c| c.is_ascii_uppercase()))
}

/// Kebab-case an identifier, hyphenating before each uppercase letter
///
/// # Examples
///
/// ```rust
/// use ui_forge::registry::kebab;
///
/// assert_eq!(kebab("DateInput"), "date-input");
/// assert_eq!(kebab("Heading1"), "heading1");
/// assert_eq!(kebab("HTMLBlock"), "h-t-m-l-block");
/// ```
#[must_use]
pub fn kebab(identifier: &str) -> String {
    KEBAB.convert(identifier)
}

/// Derive the public alias of a class
///
/// The namespace prefix is stripped when present; a non-matching namespace is
/// not an error, the whole identifier is used instead.
///
/// # Examples
///
/// ```rust
/// use ui_forge::registry::derive_alias;
///
/// assert_eq!(derive_alias("app::components::Input::Date", "app::components"), "date-input");
/// assert_eq!(derive_alias("Input::Date", "app::components"), "date-input");
/// ```
#[must_use]
pub fn derive_alias(class: &str, namespace: &str) -> String {
    let namespace = normalize_namespace(namespace);
    let relative = class.strip_prefix(namespace.as_str()).unwrap_or(class);

    let mut segments: Vec<&str> = relative.split(PATH_SEPARATOR).collect();
    segments.reverse();
    kebab(&segments.concat())
}

/// Fully qualify a class path, leaving already-qualified paths untouched
#[must_use]
pub fn qualify(class: &str, namespace: &str, separator: &str) -> String {
    let prefix = if namespace.ends_with(separator) {
        namespace.to_string()
    } else {
        format!("{namespace}{separator}")
    };

    if class.starts_with(&prefix) {
        class.to_string()
    } else {
        format!("{prefix}{class}")
    }
}

fn normalize_namespace(namespace: &str) -> String {
    if namespace.ends_with(PATH_SEPARATOR) {
        namespace.to_string()
    } else {
        format!("{namespace}{PATH_SEPARATOR}")
    }
}
