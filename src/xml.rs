//! Element tree built from `quick-xml` events.
//!
//! API responses are small, so they are materialized as a whole with
//! [`parse_document`]. Data dumps hold every nation or region of the game and
//! are walked with [`for_each_child`], which only keeps one child subtree in
//! memory at a time.

use std::fmt::Display;
use std::io::BufRead;
use std::str;

use log::warn;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::{Error, Result};

/// An XML element with its attributes, direct text content and children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    fn from_start(start: &BytesStart<'_>) -> Result<Self> {
        let name = str::from_utf8(start.name().as_ref())
            .map_err(malformed)?
            .to_string();

        let mut attributes = Vec::new();
        for attribute in start.attributes() {
            let attribute = attribute.map_err(malformed)?;
            let key = str::from_utf8(attribute.key.as_ref())
                .map_err(malformed)?
                .to_string();
            let value = attribute.unescape_value().map_err(malformed)?.into_owned();
            attributes.push((key, value));
        }

        Ok(Element {
            name,
            attributes,
            text: String::new(),
            children: Vec::new(),
        })
    }

    /// Tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unescaped text directly inside the element, untrimmed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Value of the attribute `name`, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First child element called `name`.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Every child element called `name`, in document order.
    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Whether the element has any child element.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Parse a whole document and return its root element.
///
/// # Errors
///
/// Returns [`Error::ApiResponseInvalid`] when the input is empty or is not
/// well-formed XML.
pub fn parse_document<R: BufRead>(input: R) -> Result<Element> {
    let mut reader = Reader::from_reader(input);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf).map_err(malformed)? {
            Event::Start(start) => {
                let root = Element::from_start(&start)?;
                return read_children(&mut reader, root);
            }
            Event::Empty(start) => return Element::from_start(&start),
            Event::Eof => return Err(empty_document()),
            _ => {}
        }
        buf.clear();
    }
}

/// Stream the `child` elements of a document whose root is `container`.
///
/// Each child is handed to `visit` fully built, then dropped. Other elements
/// found under the root are skipped. Returns the number of visited children.
///
/// # Errors
///
/// Returns [`Error::ApiResponseInvalid`] when the root element is not
/// `container` or the document is malformed, and any error returned by `visit`.
pub fn for_each_child<R, F>(input: R, container: &str, child: &str, mut visit: F) -> Result<usize>
where
    R: BufRead,
    F: FnMut(Element) -> Result<()>,
{
    let mut reader = Reader::from_reader(input);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf).map_err(malformed)? {
            Event::Start(start) => {
                expect_name(&Element::from_start(&start)?, container)?;
                break;
            }
            Event::Empty(start) => {
                expect_name(&Element::from_start(&start)?, container)?;
                return Ok(0);
            }
            Event::Eof => return Err(empty_document()),
            _ => {}
        }
        buf.clear();
    }
    buf.clear();

    let mut visited = 0;
    loop {
        let element = match reader.read_event_into(&mut buf).map_err(malformed)? {
            Event::Start(start) => {
                let element = Element::from_start(&start)?;
                Some(read_children(&mut reader, element)?)
            }
            Event::Empty(start) => Some(Element::from_start(&start)?),
            Event::End(_) => return Ok(visited),
            Event::Eof => return Err(truncated_document()),
            _ => None,
        };
        buf.clear();

        let Some(element) = element else {
            continue;
        };
        if element.name == child {
            visit(element)?;
            visited += 1;
        } else {
            warn!("skip unexpected <{}> element in <{}>", element.name, container);
        }
    }
}

/// Read the content of `root` up to its closing tag.
fn read_children<R: BufRead>(reader: &mut Reader<R>, root: Element) -> Result<Element> {
    let mut buf = Vec::new();
    let mut stack = vec![root];

    loop {
        match reader.read_event_into(&mut buf).map_err(malformed)? {
            Event::Start(start) => stack.push(Element::from_start(&start)?),
            Event::Empty(start) => {
                let element = Element::from_start(&start)?;
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(element);
                }
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(malformed)?;
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&text);
                }
            }
            Event::CData(data) => {
                let data = data.into_inner();
                let text = str::from_utf8(&data).map_err(malformed)?;
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(text);
                }
            }
            Event::End(_) => {
                let Some(element) = stack.pop() else {
                    return Err(truncated_document());
                };
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => return Ok(element),
                }
            }
            Event::Eof => return Err(truncated_document()),
            _ => {}
        }
        buf.clear();
    }
}

/// Check that `element` is called `name`.
pub(crate) fn expect_name(element: &Element, name: &str) -> Result<()> {
    if element.name != name {
        return Err(Error::response_invalid(
            format!("a <{name}> element"),
            format!("<{}>", element.name),
        ));
    }
    Ok(())
}

fn malformed(error: impl Display) -> Error {
    Error::response_invalid("well-formed XML", error.to_string())
}

fn empty_document() -> Error {
    Error::response_invalid("an XML document", "no root element")
}

fn truncated_document() -> Error {
    Error::response_invalid("a closing tag", "the end of the document")
}
