//! Compile-time embedded templates.
//!
//! Each constant loads a file from `templates/` via [`include_str!`]. The paths are
//! relative to this source file (`crates/kw-templates-core/src/embedded.rs`).
//!
//! ## Adding a new template
//!
//! 1. Place the file under `crates/kw-templates-core/templates/`
//! 2. Add a `pub const` here with `include_str!("../templates/<file>")`
//! 3. Register it in [`BuiltinGroup::define_available_templates`]
//!
//! Do NOT rename template files without updating the `include_str!` path here, and
//! keep placeholder names in sync with what callers pass as items.

use crate::error::Result;
use crate::registry::{TemplateGroup, TemplateTable};

/// `Hello, {name}!`
pub const GREETING: &str = include_str!("../templates/greeting.tmpl");

/// Minimal HTML page. Placeholders: `{lang}`, `{title}`, `{attributes}`, `{body}`.
pub const PAGE: &str = include_str!("../templates/page.html.tmpl");

/// Look up an embedded template by name.
pub fn get_embedded(name: &str) -> Option<&'static str> {
    match name {
        "greeting" => Some(GREETING),
        "page" => Some(PAGE),
        _ => None,
    }
}

/// Template group over the embedded templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinGroup;

impl BuiltinGroup {
    pub const NAMES: [&'static str; 2] = ["greeting", "page"];
}

impl TemplateGroup for BuiltinGroup {
    fn group_id(&self) -> String {
        "builtin".to_string()
    }

    fn define_available_templates(&self) -> Result<TemplateTable> {
        Ok(Self::NAMES
            .iter()
            .filter_map(|name| get_embedded(name).map(|text| (name.to_string(), text.to_string())))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::Attributes;
    use crate::source::GroupedSource;
    use crate::template::Template;

    #[test]
    fn test_get_embedded_known() {
        assert_eq!(get_embedded("greeting"), Some("Hello, {name}!"));
        assert!(get_embedded("page").unwrap().contains("<title>{title}</title>"));
    }

    #[test]
    fn test_get_embedded_unknown() {
        assert!(get_embedded("unknown-template").is_none());
    }

    #[test]
    fn test_builtin_group_lists_all_names() {
        let table = BuiltinGroup.define_available_templates().unwrap();
        assert_eq!(table.len(), BuiltinGroup::NAMES.len());
    }

    #[test]
    fn test_builtin_greeting() {
        let mut template = Template::new(GroupedSource::new(BuiltinGroup));
        template.add_item("name", "World");
        let rendered = template
            .select_template("greeting")
            .unwrap()
            .render()
            .unwrap();
        assert_eq!(rendered, "Hello, World!");
    }

    #[test]
    fn test_builtin_page_with_attributes() {
        let mut body = Attributes::new();
        body.add_class("home").add_css("margin", "0");

        let mut template = Template::new(GroupedSource::new(BuiltinGroup));
        template.update_items([
            ("lang", "en".to_string()),
            ("title", "Home".to_string()),
            ("attributes", body.render()),
            ("body", "<p>hi</p>".to_string()),
        ]);
        let page = template.select_template("page").unwrap().render().unwrap();

        assert!(page.contains("<html lang=\"en\">"));
        assert!(page.contains("<title>Home</title>"));
        assert!(page.contains("<body class=\"home\" style=\"margin:0;\">"));
        assert!(page.contains("<p>hi</p>"));
    }
}
