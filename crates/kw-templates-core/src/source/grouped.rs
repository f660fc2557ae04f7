use std::sync::Arc;

use crate::error::{Result, TemplateError};
use crate::registry::{TemplateGroup, TemplateRegistry, TemplateTable};
use crate::source::TemplateSource;
use crate::template::Template;

/// Selects template text from a [`TemplateGroup`]'s cached table.
///
/// Loading only makes sure the table exists and yields an empty string; the
/// actual text arrives through [`Template::select_template`].
#[derive(Debug)]
pub struct GroupedSource<G> {
    group: G,
    registry: Arc<TemplateRegistry>,
}

impl<G: TemplateGroup> GroupedSource<G> {
    /// Cache the group's table in the process-wide registry.
    pub fn new(group: G) -> Self {
        Self::with_registry(group, TemplateRegistry::global())
    }

    pub fn with_registry(group: G, registry: Arc<TemplateRegistry>) -> Self {
        Self { group, registry }
    }

    pub fn group(&self) -> &G {
        &self.group
    }

    pub fn table(&self) -> Result<Arc<TemplateTable>> {
        self.registry.table(&self.group)
    }
}

impl<G: TemplateGroup> TemplateSource for GroupedSource<G> {
    fn load_template(&self) -> Result<String> {
        self.table()?;
        Ok(String::new())
    }
}

impl<G: TemplateGroup> Template<GroupedSource<G>> {
    /// Make the template named `key` the current text.
    ///
    /// On an unknown key the current text is left as it was.
    pub fn select_template(&mut self, key: &str) -> Result<&mut Self> {
        let table = self.source().table()?;
        let Some(text) = table.get(key) else {
            return Err(TemplateError::UnknownTemplate {
                key: key.to_string(),
                group: self.source().group().group_id(),
            });
        };
        tracing::debug!(%key, "selected grouped template");
        Ok(self.set_template(text.as_str()))
    }

    /// Keys of the group's table, in order.
    pub fn available_templates(&self) -> Result<Vec<String>> {
        Ok(self.source().table()?.keys().cloned().collect())
    }
}
