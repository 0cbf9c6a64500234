//! Markup building blocks
//!
//! - [`AttributeBag`]: ordered attributes with merge-with-precedence
//! - [`ComponentTag`]: one element with open/close fragments
//! - [`ComponentSlot`] / [`Contents`]: caller-supplied inner content
//! - [`compress`]: whitespace and comment stripping for rendered output

mod attributes;
mod compress;
mod slot;
mod tag;

pub use attributes::{escape_attribute, AttrValue, AttributeBag};
pub use compress::compress;
pub use slot::{ComponentSlot, Contents};
pub use tag::{ComponentTag, DEFAULT_VOID_TAGS};
