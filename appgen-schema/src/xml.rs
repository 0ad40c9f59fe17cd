//! Minimal element tree over `quick-xml` events.
//!
//! The loader needs path-style lookups (`Fields/Field`, every `Tab` in the
//! document) rather than a single forward pass, so the document is read
//! once into an [`Element`] tree. Lookups come in two flavours: optional
//! ones return `Option`, required ones turn absence into
//! [`ParseError::MissingElement`].

use crate::error::ParseError;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// An XML element with its attributes, text content and child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// Parses an XML document and returns its root element.
    ///
    /// # Errors
    /// Returns `ParseError` if the document is malformed, has no root
    /// element, or has more than one.
    pub fn parse(xml: &str) -> Result<Self, ParseError> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    stack.push(Self::from_start(e)?);
                }
                Ok(Event::Empty(ref e)) => {
                    let element = Self::from_start(e)?;
                    attach(&mut stack, &mut root, element)?;
                }
                Ok(Event::End(_)) => {
                    let mut element = stack
                        .pop()
                        .ok_or_else(|| ParseError::structure("unexpected end tag"))?;
                    element.finish_text();
                    attach(&mut stack, &mut root, element)?;
                }
                Ok(Event::Text(ref t)) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(std::str::from_utf8(t.as_ref())?);
                    }
                }
                Ok(Event::CData(ref c)) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(std::str::from_utf8(c.as_ref())?);
                    }
                }
                Ok(Event::GeneralRef(ref r)) => {
                    if let Some(current) = stack.last_mut() {
                        let name = std::str::from_utf8(r.as_ref())?;
                        current.text.push(resolve_reference(name)?);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(ParseError::Xml(e)),
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(ParseError::structure(format!(
                "element '{}' is not closed",
                open.name
            )));
        }

        root.ok_or_else(|| ParseError::structure("document has no root element"))
    }

    fn from_start(e: &BytesStart<'_>) -> Result<Self, ParseError> {
        let name = std::str::from_utf8(e.name().as_ref())?.to_string();
        let mut attributes = Vec::new();

        for attr in e.attributes().flatten() {
            let key = std::str::from_utf8(attr.key.as_ref())?;
            let value = std::str::from_utf8(&attr.value)?;
            attributes.push((key.to_string(), value.to_string()));
        }

        Ok(Self {
            name,
            attributes,
            text: String::new(),
            children: Vec::new(),
        })
    }

    fn finish_text(&mut self) {
        let trimmed = self.text.trim();
        if trimmed.len() != self.text.len() {
            self.text = trimmed.to_string();
        }
    }

    /// Returns the element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the trimmed text directly inside this element.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the value of an attribute, if present.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the first child element with the given name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Returns the first child element with the given name, or an error.
    ///
    /// # Errors
    /// Returns `ParseError::MissingElement` if no such child exists.
    pub fn require_child(&self, name: &str) -> Result<&Element, ParseError> {
        self.child(name)
            .ok_or_else(|| ParseError::missing_element(name, &self.name))
    }

    /// Iterates over the child elements with the given name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Returns the text of a required child element.
    ///
    /// # Errors
    /// Returns `ParseError::MissingElement` if the child is absent.
    pub fn required_text(&self, name: &str) -> Result<&str, ParseError> {
        self.require_child(name).map(Element::text)
    }

    /// Returns the text of an optional child element.
    #[must_use]
    pub fn optional_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(Element::text)
    }

    /// Iterates, in document order, over this element and every element
    /// below it that has the given name.
    pub fn descendants_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        Descendants { stack: vec![self] }.filter(move |e| e.name == name)
    }
}

/// Pre-order walk over an element subtree.
struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}

/// Attaches a completed element to its parent, or makes it the root.
fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), ParseError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(ParseError::structure(format!(
            "second root element '{}'",
            element.name
        )));
    }
    *root = Some(element);
    Ok(())
}

/// Resolves a predefined entity or a numeric character reference.
fn resolve_reference(name: &str) -> Result<char, ParseError> {
    let resolved = match name {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "amp" => Some('&'),
        "apos" => Some('\''),
        "quot" => Some('"'),
        _ => name.strip_prefix('#').and_then(|code| {
            let value = match code.strip_prefix('x') {
                Some(hex) => u32::from_str_radix(hex, 16).ok(),
                None => code.parse().ok(),
            };
            value.and_then(char::from_u32)
        }),
    };
    resolved.ok_or_else(|| ParseError::invalid_value("entity", format!("&{name};")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Root kind="test">
    <Name>  Padded  </Name>
    <Items>
        <Item><Name>first</Name></Item>
        <Item><Name>second</Name></Item>
    </Items>
    <Nested><Item><Name>third</Name></Item></Nested>
    <Empty/>
</Root>"#;

    #[test]
    fn test_parse_root() {
        let root = Element::parse(DOC).expect("Failed to parse");
        assert_eq!(root.name(), "Root");
        assert_eq!(root.attr("kind"), Some("test"));
        assert_eq!(root.attr("missing"), None);
    }

    #[test]
    fn test_text_is_trimmed() {
        let root = Element::parse(DOC).expect("Failed to parse");
        assert_eq!(root.required_text("Name").unwrap(), "Padded");
        assert_eq!(root.optional_text("Empty"), Some(""));
        assert_eq!(root.optional_text("Absent"), None);
    }

    #[test]
    fn test_require_child_missing() {
        let root = Element::parse(DOC).expect("Failed to parse");
        let err = root.require_child("Absent").unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingElement { ref element, ref context }
                if element == "Absent" && context == "Root"
        ));
    }

    #[test]
    fn test_children_named() {
        let root = Element::parse(DOC).expect("Failed to parse");
        let names: Vec<&str> = root
            .require_child("Items")
            .unwrap()
            .children_named("Item")
            .map(|i| i.required_text("Name").unwrap())
            .collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_descendants_in_document_order() {
        let root = Element::parse(DOC).expect("Failed to parse");
        let names: Vec<&str> = root
            .descendants_named("Item")
            .map(|i| i.required_text("Name").unwrap())
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_descendants_include_root() {
        let root = Element::parse(DOC).expect("Failed to parse");
        assert_eq!(root.descendants_named("Root").count(), 1);
    }

    #[test]
    fn test_entities_and_cdata() {
        let root =
            Element::parse("<a><b>Tom &amp; Jerry &#65;&#x42;</b><c><![CDATA[x < y]]></c></a>")
                .expect("Failed to parse");
        assert_eq!(root.required_text("b").unwrap(), "Tom & Jerry AB");
        assert_eq!(root.required_text("c").unwrap(), "x < y");
    }

    #[test]
    fn test_unknown_entity() {
        assert!(Element::parse("<a>&bogus;</a>").is_err());
    }

    #[test]
    fn test_no_root() {
        let err = Element::parse("<?xml version=\"1.0\"?>").unwrap_err();
        assert!(matches!(err, ParseError::InvalidStructure { .. }));
    }

    #[test]
    fn test_mismatched_end_tag() {
        assert!(Element::parse("<a><b></a>").is_err());
    }
}
