use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use tracing::debug;

use super::Node;
use crate::error::{BrowseError, Result};
use crate::links;

const FIELD_TAG: &[u8] = b"field-declaration";
const TYPE_USAGE_TAG: &[u8] = b"type-usage";

/// Type id upstream uses for "no resolved type".
pub const UNRESOLVED_TYPE_ID: i64 = -1;

/// What an open element turns into once its end tag is seen.
#[derive(Debug)]
enum Shape {
    Root,
    Link(String),
    Span,
    /// Unknown element: children are spliced into the parent.
    Unwrap,
}

#[derive(Debug)]
struct Frame {
    tag: Vec<u8>,
    shape: Shape,
    children: Vec<Node>,
}

/// Parse annotated markup into output nodes.
///
/// Only the children of the root element are returned; the root wrapper and
/// any prolog are dropped.
pub fn parse(doc: &str) -> Result<Vec<Node>> {
    let mut reader = Reader::from_str(doc);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Option<Vec<Node>> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            BrowseError::MalformedInput(format!("at byte {}: {e}", reader.buffer_position()))
        })?;
        match event {
            Event::Start(e) => {
                let shape = open(&e, stack.is_empty(), root.is_some())?;
                stack.push(Frame {
                    tag: e.name().as_ref().to_vec(),
                    shape,
                    children: Vec::new(),
                });
            }
            Event::Empty(e) => {
                let shape = open(&e, stack.is_empty(), root.is_some())?;
                let frame = Frame {
                    tag: e.name().as_ref().to_vec(),
                    shape,
                    children: Vec::new(),
                };
                close(frame, &mut stack, &mut root);
            }
            Event::End(e) => {
                let frame = stack.pop().ok_or_else(|| {
                    BrowseError::MalformedInput("unexpected closing tag".to_string())
                })?;
                if frame.tag != e.name().as_ref() {
                    return Err(BrowseError::MalformedInput(format!(
                        "mismatched closing tag </{}>",
                        String::from_utf8_lossy(e.name().as_ref())
                    )));
                }
                close(frame, &mut stack, &mut root);
            }
            Event::Text(t) => {
                let text = t.unescape()?;
                push_text(&mut stack, &text)?;
            }
            Event::CData(c) => {
                let text = std::str::from_utf8(&c)
                    .map_err(|e| BrowseError::MalformedInput(format!("CDATA is not UTF-8: {e}")))?;
                push_text(&mut stack, text)?;
            }
            Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
            Event::Eof => break,
        }
    }

    if let Some(open) = stack.last() {
        return Err(BrowseError::MalformedInput(format!(
            "unclosed element <{}>",
            String::from_utf8_lossy(&open.tag)
        )));
    }
    root.ok_or_else(|| BrowseError::MalformedInput("no root element".to_string()))
}

fn open(e: &BytesStart<'_>, is_root: bool, root_seen: bool) -> Result<Shape> {
    if is_root {
        if root_seen {
            return Err(BrowseError::MalformedInput(
                "content after the root element".to_string(),
            ));
        }
        return Ok(Shape::Root);
    }
    match e.name().as_ref() {
        FIELD_TAG => {
            let field = attr(e, "field")?.ok_or_else(|| missing("field-declaration", "field"))?;
            Ok(Shape::Link(links::search_url(&field)))
        }
        TYPE_USAGE_TAG => {
            let raw_id = attr(e, "type-id")?
                .or(attr(e, "typeId")?)
                .ok_or_else(|| missing("type-usage", "type-id"))?;
            let type_id: i64 = raw_id.trim().parse().map_err(|_| {
                BrowseError::MalformedInput(format!("type-usage: type-id {raw_id:?} is not an integer"))
            })?;
            let resolved = match attr(e, "resolved")? {
                Some(raw) => parse_bool(&raw)?,
                None => false,
            };
            if resolved && type_id != UNRESOLVED_TYPE_ID {
                Ok(Shape::Link(links::type_url(type_id)))
            } else {
                Ok(Shape::Span)
            }
        }
        other => {
            debug!("Unwrapping unknown element <{}>", String::from_utf8_lossy(other));
            Ok(Shape::Unwrap)
        }
    }
}

fn close(frame: Frame, stack: &mut Vec<Frame>, root: &mut Option<Vec<Node>>) {
    let Frame {
        shape, children, ..
    } = frame;
    let Some(parent) = stack.last_mut() else {
        *root = Some(children);
        return;
    };
    match shape {
        Shape::Link(href) => parent.children.push(Node::Hyperlink { href, children }),
        Shape::Span => parent.children.push(Node::Span { children }),
        Shape::Unwrap | Shape::Root => {
            for child in children {
                match child {
                    Node::Text(t) => append_text(&mut parent.children, &t),
                    node => parent.children.push(node),
                }
            }
        }
    }
}

fn push_text(stack: &mut [Frame], text: &str) -> Result<()> {
    match stack.last_mut() {
        Some(frame) => {
            append_text(&mut frame.children, text);
            Ok(())
        }
        // Whitespace between the prolog and the root is fine.
        None if text.trim().is_empty() => Ok(()),
        None => Err(BrowseError::MalformedInput(
            "text outside the root element".to_string(),
        )),
    }
}

fn append_text(children: &mut Vec<Node>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Node::Text(last)) = children.last_mut() {
        last.push_str(text);
    } else {
        children.push(Node::Text(text.to_string()));
    }
}

fn attr(e: &BytesStart<'_>, name: &str) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == name.as_bytes() {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        _ => Err(BrowseError::MalformedInput(format!(
            "type-usage: resolved {raw:?} is not a boolean"
        ))),
    }
}

fn missing(element: &str, attribute: &str) -> BrowseError {
    BrowseError::MalformedInput(format!("{element}: missing attribute {attribute}"))
}
