//! HTML building blocks for feeding into templates.
//!
//! - [`Attributes`]: ordered `name="value"` pairs with `style`/`class` helpers
//! - [`Element`]: a tag owning its attributes and an ordered list of aliased
//!   children, each either another element or raw text ([`Node`])
//!
//! Elements own their children; there are no parent links. Adding "next to" an
//! element means adding to the element that owns it.

mod attributes;
mod element;

pub use attributes::Attributes;
pub use element::{Element, Node};
