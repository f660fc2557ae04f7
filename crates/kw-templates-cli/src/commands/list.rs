use anyhow::Result;

use kw_templates_core::embedded::BuiltinGroup;
use kw_templates_core::registry::{TemplateGroup, TemplateRegistry};
use kw_templates_core::source::DirectoryGroup;

use crate::output;
use crate::GroupSource;

/// Print every template key in the group with its size.
pub fn run(source: &GroupSource) -> Result<()> {
    match &source.dir {
        Some(dir) => list_group(&DirectoryGroup::new(dir)),
        None => list_group(&BuiltinGroup),
    }
}

fn list_group<G: TemplateGroup>(group: &G) -> Result<()> {
    let id = group.group_id();
    output::print_header(&format!("kw-templates list: {id}"));

    let table = TemplateRegistry::global().table(group)?;
    if table.is_empty() {
        output::print_warning("No templates found");
        return Ok(());
    }
    for (key, text) in table.iter() {
        output::print_key_value(key, &format!("{} bytes", text.len()));
    }
    Ok(())
}
