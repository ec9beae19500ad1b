//! A minimal element tree over `quick-xml`'s namespace-aware reader.
//!
//! The RFC index is a few megabytes of shallow, regular XML, so it is read
//! into a small owned tree first and then walked entry by entry.

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;
use tracing::trace;

use super::RfcIndexError;

/// Namespace every element of `rfc-index.xml` lives in.
pub const NAMESPACE: &str = "http://www.rfc-editor.org/rfc-index";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Element {
    name: String,
    in_namespace: bool,
    text: String,
    children: Vec<Element>,
}

impl Element {
    fn new(name: String, in_namespace: bool) -> Self {
        Self {
            name,
            in_namespace,
            ..Self::default()
        }
    }

    /// Local name, or `None` for elements outside the index namespace.
    pub(crate) fn tag(&self) -> Option<&str> {
        self.in_namespace.then_some(self.name.as_str())
    }

    /// Text content with surrounding whitespace removed; `None` when empty.
    pub(crate) fn text(&self) -> Option<&str> {
        let text = self.text.trim();
        (!text.is_empty()).then_some(text)
    }

    pub(crate) fn children(&self) -> &[Element] {
        &self.children
    }

    /// Texts of every `<doc-id>` child, as found in `<updates>`, `<is-also>` and friends.
    pub(crate) fn doc_ids(&self) -> Vec<String> {
        self.children
            .iter()
            .filter_map(|child| match child.tag() {
                Some("doc-id") => child.text().map(str::to_string),
                _ => {
                    child.skip(&self.name);
                    None
                }
            })
            .collect()
    }

    /// Logs that this element was ignored while reading `parent`.
    pub(crate) fn skip(&self, parent: &str) {
        trace!(element = %self.name, within = parent, "skipping unknown element");
    }
}

/// Parses a whole document and returns its root element.
pub(crate) fn parse(xml: &str) -> Result<Element, RfcIndexError> {
    let mut reader = NsReader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    loop {
        let (resolved, event) = reader.read_resolved_event().map_err(RfcIndexError::xml)?;
        let in_namespace =
            matches!(resolved, ResolveResult::Bound(Namespace(ns)) if ns == NAMESPACE.as_bytes());
        match event {
            Event::Start(start) => stack.push(Element::new(local_name(&start)?, in_namespace)),
            Event::Empty(start) => {
                let element = Element::new(local_name(&start)?, in_namespace);
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| RfcIndexError::structure("closing tag without opening tag"))?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&text.unescape().map_err(RfcIndexError::xml)?);
                }
            }
            Event::CData(data) => {
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(RfcIndexError::structure(format!(
            "document ends inside <{}>",
            open.name
        )));
    }
    root.ok_or_else(|| RfcIndexError::structure("document has no root element"))
}

fn local_name(start: &BytesStart<'_>) -> Result<String, RfcIndexError> {
    std::str::from_utf8(start.local_name().as_ref())
        .map(str::to_string)
        .map_err(|e| RfcIndexError::structure(format!("element name is not UTF-8: {e}")))
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), RfcIndexError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
        Ok(())
    } else if root.is_none() {
        *root = Some(element);
        Ok(())
    } else {
        Err(RfcIndexError::structure("more than one root element"))
    }
}
