use std::path::Path;

use anyhow::{Context, Result};

use kw_templates_core::config::Delimiters;
use kw_templates_core::embedded::BuiltinGroup;
use kw_templates_core::registry::TemplateGroup;
use kw_templates_core::source::{DirectoryGroup, FileSource, GroupedSource};
use kw_templates_core::template::{Items, Template};

use crate::output;
use crate::RenderSource;

/// Render a template with the given items.
///
/// Items from `--items` are applied first, so `--set` assignments override them.
/// The result goes to stdout unless `out_path` is given.
pub fn run(
    source: &RenderSource,
    key: Option<&str>,
    assignments: &[(String, String)],
    items_file: Option<&Path>,
    open: &str,
    close: &str,
    out_path: Option<&Path>,
) -> Result<()> {
    let delimiters = Delimiters::new(open, close)?;

    let mut items = Items::new();
    if let Some(path) = items_file {
        items.extend(load_items(path)?);
    }
    items.extend(assignments.iter().cloned());
    tracing::info!(count = items.len(), "collected items");

    let rendered = if let Some(path) = &source.file {
        let mut template = Template::new(FileSource::new(path)).with_delimiters(delimiters);
        template.update_items(items);
        template.render()?
    } else if let Some(dir) = &source.dir {
        render_grouped(DirectoryGroup::new(dir), key, items, delimiters)?
    } else {
        render_grouped(BuiltinGroup, key, items, delimiters)?
    };

    match out_path {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            output::print_success(&format!("Rendered to {}", path.display()));
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

fn render_grouped<G: TemplateGroup>(
    group: G,
    key: Option<&str>,
    items: Items,
    delimiters: Delimiters,
) -> Result<String> {
    let key = key.context("--key is required with --dir or --builtin")?;
    let mut template = Template::new(GroupedSource::new(group)).with_delimiters(delimiters);
    template.update_items(items);
    Ok(template.select_template(key)?.render()?)
}

fn load_items(path: &Path) -> Result<Items> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read items file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("items file {} must be a JSON object of strings", path.display()))
}

/// Parse a `NAME=VALUE` assignment. The value may itself contain `=`.
pub fn parse_assignment(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("invalid item '{raw}' (expected NAME=VALUE)")),
    }
}
