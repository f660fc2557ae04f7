//! Cache of template groups.
//!
//! A [`TemplateGroup`] defines a table of named templates. The
//! [`TemplateRegistry`] builds that table on first use and hands out the same
//! shared copy afterwards, so every template of the group sees one table.
//!
//! Each group id has its own slot. Population happens under that slot's lock: a
//! group is defined at most once per registry, even when several threads ask
//! for it at the same time, and other groups stay available meanwhile. A group
//! that defines no templates is not cached and is asked again on the next call.
//! `define_available_templates` may look up other groups in the same registry
//! but must not ask for its own.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use crate::error::Result;

/// Selector key to template text.
pub type TemplateTable = BTreeMap<String, String>;

/// A named, fixed set of templates.
pub trait TemplateGroup {
    /// Identity under which the table is cached. Defaults to the type name.
    fn group_id(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }

    /// Build the table of available templates.
    fn define_available_templates(&self) -> Result<TemplateTable>;
}

/// Shared store of populated template tables, keyed by group id.
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    slots: Mutex<HashMap<String, Slot>>,
}

type Slot = Arc<Mutex<Option<Arc<TemplateTable>>>>;

static GLOBAL: OnceLock<Arc<TemplateRegistry>> = OnceLock::new();

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry used by [`crate::source::GroupedSource::new`].
    pub fn global() -> Arc<Self> {
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(Self::new())))
    }

    /// Return the group's table, defining it first if needed.
    pub fn table<G: TemplateGroup + ?Sized>(&self, group: &G) -> Result<Arc<TemplateTable>> {
        let id = group.group_id();
        let slot = Arc::clone(lock(&self.slots).entry(id.clone()).or_default());
        let mut cached = lock(&slot);
        if let Some(table) = cached.as_ref() {
            return Ok(Arc::clone(table));
        }

        tracing::debug!(group = %id, "defining template group");
        let table = Arc::new(group.define_available_templates()?);
        if table.is_empty() {
            tracing::debug!(group = %id, "group defined no templates, not caching");
        } else {
            tracing::debug!(group = %id, count = table.len(), "cached template group");
            *cached = Some(Arc::clone(&table));
        }
        Ok(table)
    }

    /// Whether a table is cached for `group_id`.
    pub fn is_populated(&self, group_id: &str) -> bool {
        let Some(slot) = lock(&self.slots).get(group_id).cloned() else {
            return false;
        };
        let cached = lock(&slot);
        cached.is_some()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
