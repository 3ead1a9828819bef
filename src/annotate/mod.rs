/// Annotated source → hyperlinked HTML fragment.
///
/// Upstream wraps raw source text in a root element and marks symbol
/// occurrences with two element kinds:
///
/// - `<field-declaration field="name">` becomes a link to a search for `name`
/// - `<type-usage type-id="42" resolved="true">` becomes a link to the type's
///   detail route, or an inert `<span>` when there is no confident target
///
/// The markup is parsed into fresh typed [`Node`]s and then emitted; nothing
/// from the input tree is retagged in place, and none of the input attributes
/// reach the output.
pub mod parse;
pub mod render;

use crate::error::Result;

pub use parse::parse;
pub use render::render;

/// Output tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Unescaped text, emitted verbatim (after escaping).
    Text(String),
    Hyperlink { href: String, children: Vec<Node> },
    /// Inline element without a destination.
    Span { children: Vec<Node> },
}

impl Node {
    /// Concatenated text of this node and its descendants.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Hyperlink { children, .. } | Node::Span { children } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}

/// Parse annotated markup and render it as an inline HTML fragment.
///
/// Fails with `MalformedInput` when the markup is not well formed or an
/// annotation lacks a required attribute.
pub fn transform(doc: &str) -> Result<String> {
    let nodes = parse(doc)?;
    Ok(render(&nodes))
}
