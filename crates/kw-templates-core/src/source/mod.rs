//! Loading strategies that supply raw template text.
//!
//! A [`crate::template::Template`] is parameterised by one [`TemplateSource`],
//! chosen at construction:
//! - [`FileSource`] reads a file path on every render
//! - [`GroupedSource`] picks text from a cached table of named templates
//! - [`StaticSource`] holds text given in code
//!
//! [`DirectoryGroup`] is a ready-made group that turns a directory of files into
//! a table for [`GroupedSource`].

mod directory;
mod file;
mod grouped;

pub use directory::DirectoryGroup;
pub use file::FileSource;
pub use grouped::GroupedSource;

use crate::error::Result;

/// Supplies the raw text a template renders from.
pub trait TemplateSource {
    fn load_template(&self) -> Result<String>;
}

/// Template text fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticSource {
    text: String,
}

impl StaticSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TemplateSource for StaticSource {
    fn load_template(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}
