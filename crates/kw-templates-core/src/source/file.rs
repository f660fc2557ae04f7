use std::path::{Path, PathBuf};

use crate::error::{Result, TemplateError};
use crate::source::TemplateSource;

/// Reads the whole template from a file.
///
/// Nothing is cached: every render reads the file again, so edits on disk show
/// up on the next render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TemplateSource for FileSource {
    fn load_template(&self) -> Result<String> {
        tracing::debug!(path = %self.path.display(), "reading template file");
        std::fs::read_to_string(&self.path).map_err(|source| TemplateError::FileNotFound {
            path: self.path.clone(),
            source,
        })
    }
}
