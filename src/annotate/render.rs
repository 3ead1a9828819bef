use quick_xml::escape::{escape, minimal_escape};

use super::Node;

/// Emit nodes as an inline HTML fragment.
pub fn render(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node);
    }
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        // Only `&` and `<` need escaping in HTML text; `>` and quotes pass through.
        Node::Text(text) => out.push_str(&minimal_escape(text.as_str())),
        Node::Hyperlink { href, children } => {
            out.push_str("<a href=\"");
            out.push_str(&escape(href.as_str()));
            out.push_str("\">");
            for child in children {
                write_node(out, child);
            }
            out.push_str("</a>");
        }
        Node::Span { children } => {
            out.push_str("<span>");
            for child in children {
                write_node(out, child);
            }
            out.push_str("</span>");
        }
    }
}
