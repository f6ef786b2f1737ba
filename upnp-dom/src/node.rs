//! Text extraction and tag search over `xmltree` elements.
//!
//! The root element of a parsed document stands in for the document node:
//! every search includes the element it starts from, so searching a document
//! and searching its root element give the same result.

use crate::error::{DomError, Result};
use xmltree::{Element, EmitterConfig, XMLNode};

/// Tag that matches every element.
pub const ANY_TAG: &str = "*";

/// Parse an XML document into its root element.
pub fn parse_document(xml: &str) -> Result<Element> {
    Element::parse(xml.as_bytes()).map_err(|e| DomError::Parse(e.to_string()))
}

/// Qualified name of an element (`prefix:name`, or just `name`).
pub fn qualified_name(element: &Element) -> String {
    match &element.prefix {
        Some(prefix) => format!("{}:{}", prefix, element.name),
        None => element.name.clone(),
    }
}

fn matches_tag(element: &Element, tag: &str) -> bool {
    if tag == ANY_TAG {
        return true;
    }
    match (tag.split_once(':'), element.prefix.as_deref()) {
        (Some((prefix, name)), Some(element_prefix)) => {
            prefix == element_prefix && name == element.name
        }
        (None, None) => tag == element.name,
        _ => false,
    }
}

/// Extract the value of an element such as `<Channel>11</Channel>`.
///
/// Returns the first child's text when that child is a text node, `None`
/// otherwise (empty element, nested element or comment first). The parser
/// reads a CDATA section as text, so a CDATA first child yields its content.
///
/// ```
/// let doc = upnp_dom::parse_document("<Channel>11</Channel>").unwrap();
/// assert_eq!(upnp_dom::element_value(&doc).as_deref(), Some("11"));
/// ```
pub fn element_value(element: &Element) -> Option<String> {
    match element.children.first() {
        Some(XMLNode::Text(text)) => Some(text.clone()),
        _ => None,
    }
}

/// All elements named `tag` at or below `element`, in document order.
pub fn elements_by_tag_name<'a>(element: &'a Element, tag: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_by_tag(element, tag, &mut found);
    found
}

fn collect_by_tag<'a>(element: &'a Element, tag: &str, found: &mut Vec<&'a Element>) {
    if matches_tag(element, tag) {
        found.push(element);
    }
    for child in &element.children {
        if let XMLNode::Element(child) = child {
            collect_by_tag(child, tag, found);
        }
    }
}

/// First element named `tag` at or below `element`, in document order.
pub fn first_element<'a>(element: &'a Element, tag: &str) -> Option<&'a Element> {
    if matches_tag(element, tag) {
        return Some(element);
    }
    element.children.iter().find_map(|child| match child {
        XMLNode::Element(child) => first_element(child, tag),
        _ => None,
    })
}

/// Serialize a node back to XML text, without declaration or indentation.
pub fn print_node(element: &Element) -> Result<String> {
    let config = EmitterConfig::new()
        .write_document_declaration(false)
        .perform_indent(false);

    let mut buffer = Vec::new();
    element
        .write_with_config(&mut buffer, config)
        .map_err(|e| DomError::Serialize(e.to_string()))?;

    String::from_utf8(buffer).map_err(|e| DomError::Serialize(e.to_string()))
}
