use std::fmt;

use crate::html::Attributes;

/// Tags rendered self-closing, without children.
const VOID_ELEMENTS: [&str; 11] = [
    "img", "hr", "br", "input", "meta", "area", "embed", "keygen", "link", "param", "frame",
];

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Inner HTML, rendered verbatim.
    Text(String),
}

impl Node {
    pub fn render(&self) -> String {
        match self {
            Self::Element(element) => element.render(),
            Self::Text(text) => text.clone(),
        }
    }

    fn alias(&self) -> Option<&str> {
        match self {
            Self::Element(element) => element.alias(),
            Self::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// An HTML element with attributes and ordered children.
///
/// Children carry an optional alias. Adding a child under an alias that is
/// already taken replaces that child in place; children without an alias are
/// always appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    alias: Option<String>,
    attributes: Attributes,
    children: Vec<(Option<String>, Node)>,
    child_delimiter: String,
}

impl Element {
    /// Build from a tag such as `div`, `<br>` or `a href="/" class=nav`.
    ///
    /// Angle brackets are dropped; everything after the first space is parsed as
    /// attribute markup.
    pub fn new(tag: &str) -> Self {
        let cleaned: String = tag.chars().filter(|c| !matches!(*c, '<' | '>')).collect();
        let cleaned = cleaned.trim();
        let (name, markup) = cleaned.split_once(' ').unwrap_or((cleaned, ""));

        let mut attributes = Attributes::new();
        attributes.add_attributes_str(markup);
        Self {
            name: name.to_string(),
            alias: None,
            attributes,
            children: Vec::new(),
            child_delimiter: "\n".to_string(),
        }
    }

    /// Alias used when this element is added as a child without an explicit one.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Separator between rendered children, a newline by default.
    pub fn with_child_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.child_delimiter = delimiter.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Whether the tag renders self-closing.
    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.name.to_lowercase().as_str())
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    // --- children ---

    /// Add a child, replacing the one stored under the same alias.
    ///
    /// An empty `alias` counts as none; an element child then falls back to its
    /// own alias.
    pub fn add_child(&mut self, child: impl Into<Node>, alias: Option<&str>) -> &mut Self {
        let node = child.into();
        let alias = resolve_alias(alias, &node);
        self.put_child(alias, node)
    }

    /// Like [`Self::add_child`], but an element already stored under the alias
    /// absorbs `child` through [`Self::merge`] instead of being replaced.
    pub fn merge_child(&mut self, child: Element, alias: Option<&str>) -> &mut Self {
        let alias = alias
            .filter(|a| !a.is_empty())
            .or(child.alias())
            .map(str::to_string);
        if let Some(a) = alias.as_deref() {
            if let Some(Node::Element(existing)) = self.child_mut(a) {
                existing.merge(&child);
                return self;
            }
        }
        self.put_child(alias, Node::Element(child))
    }

    /// Replace all children.
    pub fn set_children<I, N>(&mut self, children: I) -> &mut Self
    where
        I: IntoIterator<Item = (Option<String>, N)>,
        N: Into<Node>,
    {
        self.children.clear();
        for (alias, child) in children {
            self.add_child(child, alias.as_deref());
        }
        self
    }

    pub fn remove_child(&mut self, alias: &str) -> &mut Self {
        self.children.retain(|(a, _)| a.as_deref() != Some(alias));
        self
    }

    pub fn child(&self, alias: &str) -> Option<&Node> {
        self.children
            .iter()
            .find(|(a, _)| a.as_deref() == Some(alias))
            .map(|(_, node)| node)
    }

    pub fn child_mut(&mut self, alias: &str) -> Option<&mut Node> {
        self.children
            .iter_mut()
            .find(|(a, _)| a.as_deref() == Some(alias))
            .map(|(_, node)| node)
    }

    pub fn last_child(&self) -> Option<&Node> {
        self.children.last().map(|(_, node)| node)
    }

    /// Children in order, with their aliases.
    pub fn children(&self) -> impl Iterator<Item = (Option<&str>, &Node)> {
        self.children.iter().map(|(a, node)| (a.as_deref(), node))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Take over `other`'s children (by alias) and replace attributes with its.
    pub fn merge(&mut self, other: &Element) -> &mut Self {
        for (alias, node) in other.children.iter().cloned() {
            self.put_child(alias, node);
        }
        self.attributes = other.attributes.clone();
        self
    }

    /// Copy of `child` carrying this element's attributes and children as well.
    pub fn inherit(&self, child: &Element) -> Element {
        let mut element = child.clone();
        element.attributes.add_attributes(
            self.attributes
                .attributes()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str())),
        );
        for (alias, node) in self.children.iter().cloned() {
            element.put_child(alias, node);
        }
        element
    }

    /// Serialize the element and its children.
    pub fn render(&self) -> String {
        let attributes = self.attributes.render();
        if self.is_void() {
            return format!("<{}{} />", self.name, attributes);
        }
        let children: Vec<String> = self.children.iter().map(|(_, node)| node.render()).collect();
        format!(
            "<{name}{attributes}>{children}</{name}>",
            name = self.name,
            children = children.join(&self.child_delimiter)
        )
    }

    fn put_child(&mut self, alias: Option<String>, node: Node) -> &mut Self {
        if let Some(alias) = alias.as_deref() {
            if let Some(slot) = self.child_mut(alias) {
                *slot = node;
                return self;
            }
        }
        self.children.push((alias, node));
        self
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn resolve_alias(alias: Option<&str>, node: &Node) -> Option<String> {
    alias
        .filter(|a| !a.is_empty())
        .or_else(|| node.alias())
        .map(str::to_string)
}
