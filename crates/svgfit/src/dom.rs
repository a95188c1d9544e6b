//! Owned element tree built from SVG markup.

use crate::error::Result;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SvgElement {
    pub name: String,
    pub attrs: BTreeMap<String, String>,
    pub children: Vec<SvgElement>,
}

impl SvgElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: SvgElement) -> Self {
        self.children.push(child);
        self
    }

    /// Parses markup and returns its root element.
    ///
    /// Element and attribute names are local names (namespace prefixes dropped). Only element
    /// children are kept; text, comments and processing instructions are discarded.
    pub fn parse_document(text: &str) -> Result<Self> {
        let opts = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        };
        let doc = roxmltree::Document::parse_with_options(text, opts)?;
        Ok(Self::from_node(doc.root_element()))
    }

    fn from_node(node: roxmltree::Node<'_, '_>) -> Self {
        let attrs = node
            .attributes()
            .map(|a| (a.name().to_string(), a.value().to_string()))
            .collect();
        let children = node
            .children()
            .filter(|n| n.is_element())
            .map(Self::from_node)
            .collect();
        Self {
            name: node.tag_name().name().to_string(),
            attrs,
            children,
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Numeric attribute with a trailing unit suffix stripped; `default` when the attribute is
    /// missing or not a number.
    pub fn float_attr(&self, key: &str, default: f64) -> f64 {
        self.attr(key).and_then(parse_length).unwrap_or(default)
    }
}

/// Parses `"12"`, `" 12.5px "`, `"3mm"` and friends. The unit itself is ignored.
pub fn parse_length(raw: &str) -> Option<f64> {
    let s = raw.trim().trim_end_matches(|c: char| c.is_ascii_alphabetic());
    let s = s.trim_end();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok()
}
