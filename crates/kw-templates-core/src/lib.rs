//! Core library for the kw-templates toolkit.
//!
//! A [`template::Template`] owns a map of placeholder values and renders raw text
//! obtained from a pluggable [`source::TemplateSource`]:
//! - [`source::FileSource`]: reads the template from a file on every render
//! - [`source::GroupedSource`]: selects the template from a named table that is
//!   built once per group and cached in a [`registry::TemplateRegistry`]
//!
//! The crate also ships a few compile-time [`embedded`] templates and small
//! [`html`] builders ([`html::Attributes`], [`html::Element`]) for producing
//! markup to feed into templates.

pub mod config;
pub mod embedded;
pub mod error;
pub mod html;
pub mod registry;
pub mod source;
pub mod template;
