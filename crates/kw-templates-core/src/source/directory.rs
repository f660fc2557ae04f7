use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, TemplateError};
use crate::registry::{TemplateGroup, TemplateTable};

/// A template group made of every file below a directory.
///
/// Keys are paths relative to the root with `/` separators and the last
/// extension dropped: `mail/welcome.html.tmpl` is selected as `mail/welcome.html`.
/// Two files that only differ in that extension are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryGroup {
    root: PathBuf,
}

impl DirectoryGroup {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_for(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?.with_extension("");
        let parts: Vec<_> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        if parts.is_empty() {
            return None;
        }
        Some(parts.join("/"))
    }
}

impl TemplateGroup for DirectoryGroup {
    fn group_id(&self) -> String {
        format!("dir:{}", self.root.display())
    }

    fn define_available_templates(&self) -> Result<TemplateTable> {
        let mut table = TemplateTable::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(|source| TemplateError::Directory {
                path: self.root.clone(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(key) = self.key_for(entry.path()) else {
                continue;
            };
            if table.contains_key(&key) {
                return Err(TemplateError::DuplicateTemplate {
                    key,
                    path: entry.path().to_path_buf(),
                });
            }
            let text = std::fs::read_to_string(entry.path()).map_err(|source| {
                TemplateError::FileNotFound {
                    path: entry.path().to_path_buf(),
                    source,
                }
            })?;
            tracing::trace!(%key, path = %entry.path().display(), "loaded template");
            table.insert(key, text);
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TemplateRegistry;
    use crate::source::GroupedSource;
    use crate::template::Template;
    use std::sync::Arc;

    #[test]
    fn test_keys_from_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("mail")).unwrap();
        std::fs::write(dir.path().join("greeting.tmpl"), "Hello, {name}!").unwrap();
        std::fs::write(dir.path().join("page.html.tmpl"), "<p>{body}</p>").unwrap();
        std::fs::write(dir.path().join("mail/welcome.txt"), "Welcome").unwrap();
        std::fs::write(dir.path().join("README"), "no extension").unwrap();

        let table = DirectoryGroup::new(dir.path())
            .define_available_templates()
            .unwrap();
        let keys: Vec<_> = table.keys().map(String::as_str).collect();
        assert_eq!(keys, ["README", "greeting", "mail/welcome", "page.html"]);
        assert_eq!(table["page.html"], "<p>{body}</p>");
    }

    #[test]
    fn test_same_key_twice_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.tmpl"), "from tmpl").unwrap();
        std::fs::write(dir.path().join("a.txt"), "from txt").unwrap();

        let err = DirectoryGroup::new(dir.path())
            .define_available_templates()
            .unwrap_err();
        let TemplateError::DuplicateTemplate { key, path } = err else {
            panic!("expected duplicate template error, got {err:?}");
        };
        assert_eq!(key, "a");
        assert_eq!(path, dir.path().join("a.txt"));
    }

    #[test]
    fn test_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let group = DirectoryGroup::new(dir.path().join("absent"));
        assert!(matches!(
            group.define_available_templates(),
            Err(TemplateError::Directory { .. })
        ));
    }

    #[test]
    fn test_each_directory_is_its_own_group() {
        let one = tempfile::tempdir().unwrap();
        let two = tempfile::tempdir().unwrap();
        std::fs::write(one.path().join("t.tmpl"), "one").unwrap();
        std::fs::write(two.path().join("t.tmpl"), "two").unwrap();

        let registry = Arc::new(TemplateRegistry::new());
        let mut first = Template::new(GroupedSource::with_registry(
            DirectoryGroup::new(one.path()),
            Arc::clone(&registry),
        ));
        let mut second = Template::new(GroupedSource::with_registry(
            DirectoryGroup::new(two.path()),
            Arc::clone(&registry),
        ));

        assert_eq!(first.select_template("t").unwrap().render().unwrap(), "one");
        assert_eq!(second.select_template("t").unwrap().render().unwrap(), "two");
    }

    #[test]
    fn test_unknown_key_names_directory_group() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.tmpl"), "a").unwrap();

        let registry = Arc::new(TemplateRegistry::new());
        let mut template = Template::new(GroupedSource::with_registry(
            DirectoryGroup::new(dir.path()),
            registry,
        ));
        let err = template.select_template("b").map(|_| ()).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("unknown template b from group dir:{}", dir.path().display())
        );
    }
}
