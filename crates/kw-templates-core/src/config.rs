//! Placeholder syntax configuration.

use crate::error::{Result, TemplateError};

/// Tokens surrounding a placeholder name, `{name}` by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    open: String,
    close: String,
}

impl Delimiters {
    /// Build a custom pair. Both tokens must be non-empty.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Result<Self> {
        let open = open.into();
        let close = close.into();
        if open.is_empty() || close.is_empty() {
            return Err(TemplateError::InvalidDelimiters { open, close });
        }
        Ok(Self { open, close })
    }

    pub fn open(&self) -> &str {
        &self.open
    }

    pub fn close(&self) -> &str {
        &self.close
    }

    /// Wrap `name` into a full placeholder token.
    pub fn token(&self, name: &str) -> String {
        format!("{}{}{}", self.open, name, self.close)
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            open: "{".into(),
            close: "}".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_braces() {
        let d = Delimiters::default();
        assert_eq!(d.open(), "{");
        assert_eq!(d.close(), "}");
        assert_eq!(d.token("name"), "{name}");
    }

    #[test]
    fn test_custom_delimiters() {
        let d = Delimiters::new("{{", "}}").unwrap();
        assert_eq!(d.token("title"), "{{title}}");
    }

    #[test]
    fn test_empty_delimiters_rejected() {
        assert!(matches!(
            Delimiters::new("", "}"),
            Err(TemplateError::InvalidDelimiters { .. })
        ));
        assert!(matches!(
            Delimiters::new("[", ""),
            Err(TemplateError::InvalidDelimiters { .. })
        ));
    }
}
