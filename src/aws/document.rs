//! Element tree model for service responses.
//!
//! Responses arrive as XML (`Items` → `Item` → `ItemAttributes` → ...).
//! The tree is immutable after parsing; every extraction accessor
//! borrows, nothing mutates.

use crate::error::{PaapiError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

/// One element of a response document: tag name, attributes, text
/// content, and ordered child elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    fn new(name: String, attributes: Vec<(String, String)>) -> Self {
        Self { name, attributes, text: String::new(), children: Vec::new() }
    }

    /// Tag name of this element.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trimmed text content, `None` when the element holds no text.
    pub fn text(&self) -> Option<&str> {
        let text = self.text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Value of the named attribute, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
    }

    /// Direct children, in document order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Every descendant element with the given tag name, any depth,
    /// document order. The element itself is never included.
    pub fn descendants<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect_descendants(name, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
        for child in &self.children {
            if child.name == name {
                found.push(child);
            }
            child.collect_descendants(name, found);
        }
    }

    /// First descendant with the given tag name, if any.
    pub fn first_descendant(&self, name: &str) -> Option<&Element> {
        for child in &self.children {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = child.first_descendant(name) {
                return Some(found);
            }
        }
        None
    }
}

/// A parsed response document. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultDocument {
    root: Element,
}

impl ResultDocument {
    /// Parses a response body into an element tree.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);
        let mut buf = Vec::new();

        // Sentinel at the bottom of the stack collects the root element.
        let mut stack: Vec<Element> = vec![Element::new("#document".to_string(), Vec::new())];

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    stack.push(Element::new(local_name(e.local_name().as_ref()), attributes(&e)));
                }
                Ok(Event::Empty(e)) => {
                    let element = Element::new(local_name(e.local_name().as_ref()), attributes(&e));
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(element);
                    }
                }
                Ok(Event::End(_)) => {
                    let done = match stack.pop() {
                        Some(element) => element,
                        None => {
                            return Err(PaapiError::MalformedResponse(
                                "unbalanced closing tag".to_string(),
                            ))
                        }
                    };
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(done),
                        None => {
                            return Err(PaapiError::MalformedResponse(
                                "unbalanced closing tag".to_string(),
                            ))
                        }
                    }
                }
                Ok(Event::Text(e)) => {
                    let text = e.unescape().unwrap_or_default();
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&text);
                    }
                }
                Ok(Event::CData(e)) => {
                    let text = String::from_utf8_lossy(e.into_inner().as_ref()).to_string();
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&text);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(PaapiError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        if stack.len() != 1 {
            return Err(PaapiError::MalformedResponse("unclosed element".to_string()));
        }
        let sentinel = match stack.pop() {
            Some(element) => element,
            None => return Err(PaapiError::MalformedResponse("empty document".to_string())),
        };
        let root = sentinel
            .children
            .into_iter()
            .next()
            .ok_or_else(|| PaapiError::MalformedResponse("document has no root element".to_string()))?;

        Ok(Self { root })
    }

    /// Root element of the document.
    pub fn root(&self) -> &Element {
        &self.root
    }
}

fn local_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).to_string()
}

fn attributes(e: &quick_xml::events::BytesStart<'_>) -> Vec<(String, String)> {
    e.attributes()
        .flatten()
        .map(|attr| {
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).to_string();
            let value = attr.unescape_value().unwrap_or_default().to_string();
            (key, value)
        })
        .collect()
}
