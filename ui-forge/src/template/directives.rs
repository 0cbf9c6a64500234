//! Built-in directives exposed to templates

use super::Directive;
use crate::markup::{compress, escape_attribute};
use crate::registry::kebab;

/// Directive table registered with every engine a manager is built with
pub const DIRECTIVES: &[(&str, Directive)] = &[
    ("compress", compress_directive),
    ("kebab", kebab_directive),
    ("escape_attr", escape_attr_directive),
];

fn compress_directive(value: &str) -> String {
    compress(value)
}

fn kebab_directive(value: &str) -> String {
    kebab(value)
}

fn escape_attr_directive(value: &str) -> String {
    escape_attribute(value)
}
