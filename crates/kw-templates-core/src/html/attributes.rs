//! [`Attributes`] keeps `name="value"` pairs in insertion order, one value per
//! name, and renders them as a string ready to drop into a tag:
//!
//! ```ignore
//! let mut attrs = Attributes::new();
//! attrs.set_attribute("id", "main").add_class("wide").add_css("color", "red");
//! template.add_item("attributes", attrs.render());
//! // -> ` id="main" class="wide" style="color:red;"`
//! ```
//!
//! The `style` and `class` attributes get helpers that edit them entry by entry.

use std::sync::LazyLock;

use regex::Regex;

/// `name=` followed by a double-quoted, single-quoted or bare value.
static ATTRIBUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z][A-Za-z0-9_-]*)=(?:"([^"]*)"|'([^']*)'|(\S+))"#)
        .expect("attribute pattern is a valid regex")
});

/// Ordered `(name, value)` pairs, unique by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    attributes: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set one value, keeping the position of an existing name.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    pub fn remove_attribute(&mut self, name: &str) -> &mut Self {
        self.attributes.retain(|(k, _)| k != name);
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.attributes.clear();
        self
    }

    /// Merge pairs, lower-casing names and values.
    pub fn add_attributes<I, K, V>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (name, value) in pairs {
            self.set_attribute(
                name.as_ref().to_lowercase(),
                value.as_ref().to_lowercase(),
            );
        }
        self
    }

    /// Replace everything with `pairs`, normalised as in [`Self::add_attributes`].
    pub fn set_attributes<I, K, V>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.attributes.clear();
        self.add_attributes(pairs)
    }

    /// Set a multi-part value, joined with `;`.
    pub fn add_attribute_values(&mut self, name: &str, values: &[&str]) -> &mut Self {
        let joined = values.join(";");
        self.add_attributes([(name, joined)])
    }

    /// Merge attributes written as markup: `width="100px" height='150px' hidden=1`.
    ///
    /// Anything that does not look like `name=value` is skipped.
    pub fn add_attributes_str(&mut self, markup: &str) -> &mut Self {
        let pairs = parse_attributes(markup);
        self.add_attributes(pairs)
    }

    /// Serialize as ` name="value"` per pair.
    pub fn render(&self) -> String {
        self.attributes
            .iter()
            .map(|(name, value)| format!(" {name}=\"{value}\""))
            .collect()
    }

    // --- style ---

    /// Set one declaration inside the `style` attribute.
    pub fn add_css(&mut self, name: &str, value: &str) -> &mut Self {
        let mut styles = self.read_css();
        match styles.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_string(),
            None => styles.push((name.to_string(), value.to_string())),
        }
        self.write_css(&styles)
    }

    pub fn css(&self, name: &str) -> Option<String> {
        self.read_css()
            .into_iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    pub fn remove_css(&mut self, name: &str) -> &mut Self {
        let mut styles = self.read_css();
        styles.retain(|(k, _)| k != name);
        self.write_css(&styles)
    }

    fn read_css(&self) -> Vec<(String, String)> {
        self.attribute("style")
            .unwrap_or_default()
            .split(';')
            .filter_map(|part| part.split_once(':'))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn write_css(&mut self, styles: &[(String, String)]) -> &mut Self {
        let style: String = styles.iter().map(|(k, v)| format!("{k}:{v};")).collect();
        self.set_attribute("style", style)
    }

    // --- class ---

    /// Append a class unless it is already present.
    pub fn add_class(&mut self, name: &str) -> &mut Self {
        match self.attribute("class").filter(|c| !c.is_empty()) {
            Some(current) => {
                if !current.split(' ').any(|c| c == name) {
                    let joined = format!("{current} {name}");
                    self.set_attribute("class", joined);
                }
                self
            }
            None => self.set_attribute("class", name),
        }
    }

    pub fn remove_class(&mut self, name: &str) -> &mut Self {
        if let Some(current) = self.attribute("class") {
            let left: Vec<_> = current.split(' ').filter(|c| *c != name).collect();
            let joined = left.join(" ");
            self.set_attribute("class", joined);
        }
        self
    }
}

/// Split attribute markup into raw `(name, value)` pairs.
fn parse_attributes(markup: &str) -> Vec<(String, String)> {
    ATTRIBUTE_RE
        .captures_iter(markup.trim())
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str();
            let value = caps.get(2).or(caps.get(3)).or(caps.get(4))?.as_str();
            Some((name.to_string(), value.trim().to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple() {
        let mut data = Attributes::new();
        assert!(data.is_empty());
        assert!(data.attribute("foo").is_none());

        data.set_attribute("foo", "bar");
        assert_eq!(data.attribute("foo"), Some("bar"));
        data.set_attribute("foo", "baz");
        assert_eq!(data.attribute("foo"), Some("baz"));

        data.remove_attribute("foo");
        assert!(data.attribute("foo").is_none());
        assert!(data.is_empty());
    }

    #[test]
    fn test_extend() {
        let mut data = Attributes::new();
        data.set_attribute("foo", "bar").set_attribute("ijn", "ujm");
        data.add_attributes([("ijn", "zgv"), ("edc", "rdx")]);
        assert_eq!(data.attribute("ijn"), Some("zgv"));
        assert_eq!(data.attributes()[1], ("ijn".to_string(), "zgv".to_string()));

        data.add_attribute_values("ojv", &["lkj", "nbv", "gfd"]);
        assert_eq!(data.attribute("ojv"), Some("lkj;nbv;gfd"));

        data.set_attributes(Vec::<(&str, &str)>::new());
        assert!(data.is_empty());
    }

    #[test]
    fn test_add_attributes_lowercases() {
        let mut data = Attributes::new();
        data.add_attributes([("ID", "Main")]);
        assert_eq!(data.attribute("id"), Some("main"));
    }

    #[test]
    fn test_string_input() {
        let mut data = Attributes::new();
        data.add_attributes_str(r#"avail="from:left;insecure:15em;""#);
        assert_eq!(data.attribute("avail"), Some("from:left;insecure:15em;"));

        data.set_attribute("avail", "xrb");
        assert_eq!(data.attribute("avail"), Some("xrb"));
    }

    #[test]
    fn test_string_input_quotes_and_bare() {
        let mut data = Attributes::new();
        data.add_attributes_str(r#"width="100px" height='150px' hidden=1 junk"#);
        assert_eq!(data.attribute("width"), Some("100px"));
        assert_eq!(data.attribute("height"), Some("150px"));
        assert_eq!(data.attribute("hidden"), Some("1"));
        assert_eq!(data.attributes().len(), 3);
    }

    #[test]
    fn test_attribute_pattern_compiles() {
        assert!(ATTRIBUTE_RE.is_match("a=b"));
        assert!(!ATTRIBUTE_RE.is_match("no value here"));
    }

    #[test]
    fn test_repeated_parsing_reuses_pattern() {
        let mut data = Attributes::new();
        for i in 0..100 {
            data.add_attributes_str(&format!("n{i}=\"{i}\""));
        }
        assert_eq!(data.attributes().len(), 100);
        assert_eq!(data.attribute("n42"), Some("42"));
    }

    #[test]
    fn test_render() {
        let mut data = Attributes::new();
        data.add_attributes_str(r#"avail="from:left;insecure:15em;""#);
        data.set_attribute("foo", "bar").set_attribute("ijn", "ujm");
        assert_eq!(
            data.render(),
            r#" avail="from:left;insecure:15em;" foo="bar" ijn="ujm""#
        );
        assert_eq!(Attributes::new().render(), "");
    }

    #[test]
    fn test_styles() {
        let mut data = Attributes::new();
        assert!(data.attribute("style").is_none());

        data.add_css("foo", "snt").add_css("bar", "fgs").add_css("baz", "sdf");
        assert_eq!(data.css("baz").as_deref(), Some("sdf"));
        assert_eq!(data.attribute("style"), Some("foo:snt;bar:fgs;baz:sdf;"));

        data.remove_css("bar");
        assert_eq!(data.attribute("style"), Some("foo:snt;baz:sdf;"));

        data.add_css("foo", "new");
        assert_eq!(data.attribute("style"), Some("foo:new;baz:sdf;"));
    }

    #[test]
    fn test_classes() {
        let mut data = Attributes::new();
        assert!(data.attribute("class").is_none());

        data.add_class("foo").add_class("bar").add_class("baz");
        assert_eq!(data.attribute("class"), Some("foo bar baz"));

        data.add_class("bar");
        assert_eq!(data.attribute("class"), Some("foo bar baz"));

        data.remove_class("bar");
        assert_eq!(data.attribute("class"), Some("foo baz"));
    }
}
