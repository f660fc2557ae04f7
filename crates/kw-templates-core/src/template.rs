//! Template rendering with placeholder substitution.
//!
//! A [`Template`] pairs a loading strategy with a map of items. Rendering takes
//! the text set through [`Template::set_template`] when present, otherwise it asks
//! the source for it, and then replaces every `{name}` placeholder whose name is
//! in the items map.
//!
//! Substitution is a single left-to-right pass:
//! - values are inserted literally and never rescanned
//! - placeholders without an item are copied unchanged
//! - an opening delimiter without a matching close is copied unchanged
//!
//! ```ignore
//! use kw_templates_core::source::FileSource;
//! use kw_templates_core::template::Template;
//!
//! let mut page = Template::new(FileSource::new("page.tmpl"));
//! page.add_item("title", "Home");
//! let html = page.render()?;
//! ```

use std::collections::BTreeMap;

use crate::config::Delimiters;
use crate::error::Result;
use crate::source::TemplateSource;

/// Placeholder name to substitution value.
pub type Items = BTreeMap<String, String>;

/// A renderable template backed by a loading strategy `S`.
#[derive(Debug)]
pub struct Template<S> {
    source: S,
    template: Option<String>,
    items: Items,
    delimiters: Delimiters,
}

impl<S: TemplateSource> Template<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            template: None,
            items: Items::new(),
            delimiters: Delimiters::default(),
        }
    }

    /// Use a different placeholder syntax.
    pub fn with_delimiters(mut self, delimiters: Delimiters) -> Self {
        self.delimiters = delimiters;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    /// Text set explicitly or through a selection, if any.
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    /// Replace the raw text. It takes precedence over the source on render.
    pub fn set_template(&mut self, text: impl Into<String>) -> &mut Self {
        self.template = Some(text.into());
        self
    }

    pub fn items(&self) -> &Items {
        &self.items
    }

    pub fn item(&self, name: &str) -> Option<&str> {
        self.items.get(name).map(String::as_str)
    }

    /// Set a single item, replacing any previous value.
    pub fn add_item(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.items.insert(name.into(), value.into());
        self
    }

    /// Merge several items, later pairs winning over earlier ones.
    pub fn update_items<I, K, V>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.items
            .extend(items.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Drop every item.
    pub fn reset_items(&mut self) -> &mut Self {
        self.items.clear();
        self
    }

    /// Produce the final text.
    ///
    /// Errors from the source propagate unchanged and no partial output is returned.
    pub fn render(&self) -> Result<String> {
        let raw = match &self.template {
            Some(text) => text.clone(),
            None => self.source.load_template()?,
        };
        tracing::debug!(
            len = raw.len(),
            items = self.items.len(),
            "rendering template"
        );
        Ok(substitute(&raw, &self.items, &self.delimiters))
    }
}

/// Replace each known placeholder in `text` in one pass.
pub fn substitute(text: &str, items: &Items, delimiters: &Delimiters) -> String {
    let open = delimiters.open();
    let close = delimiters.close();
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    // First closer at or after the last name start, reused while still ahead.
    let mut next_close: Option<usize> = None;

    while let Some(found) = text[pos..].find(open) {
        let start = pos + found;
        let name_start = start + open.len();
        out.push_str(&text[pos..start]);

        let end = match next_close {
            Some(c) if c >= name_start => c,
            _ => match text[name_start..].find(close) {
                Some(offset) => name_start + offset,
                None => {
                    out.push_str(&text[start..]);
                    return out;
                }
            },
        };
        next_close = Some(end);

        match items.get(&text[name_start..end]) {
            Some(value) => {
                out.push_str(value);
                pos = end + close.len();
            }
            None => {
                // Not a known name: keep the opener and rescan right after it,
                // so `{{name}}` still fills the inner placeholder.
                out.push_str(open);
                pos = name_start;
            }
        }
    }
    out.push_str(&text[pos..]);
    out
}
