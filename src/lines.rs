//! Byte offset to line mapping and line-gutter helpers.

/// Lines of leading context shown above a jump target.
pub const CONTEXT_LINES: usize = 10;

const ANCHOR_PREFIX: &str = "line_no_";

/// 0-based line of the byte at `offset`.
///
/// Offsets outside `[0, content.len()]` are clamped, never rejected.
pub fn line_number(content: &str, offset: i64) -> usize {
    let end = offset.clamp(0, content.len() as i64) as usize;
    content.as_bytes()[..end]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
}

/// Scroll target that leaves [`CONTEXT_LINES`] lines above `line`.
pub fn centered_line(line: usize) -> usize {
    line.saturating_sub(CONTEXT_LINES)
}

/// Number of `\n` characters in `content`.
pub fn total_lines(content: &str) -> usize {
    content.bytes().filter(|&b| b == b'\n').count()
}

pub fn line_anchor_id(line: usize) -> String {
    format!("{ANCHOR_PREFIX}{line}")
}

/// Anchor ids `line_no_0 .. line_no_{n-1}` for `n = total_lines(content)`.
pub fn line_anchor_ids(content: &str) -> Vec<String> {
    (0..total_lines(content)).map(line_anchor_id).collect()
}

/// `<li>` items for the line-number gutter, one per line.
pub fn line_gutter_html(content: &str) -> String {
    let mut html = String::new();
    for i in 0..total_lines(content) {
        html.push_str(&format!("<li id=\"{}\">{i}</li>", line_anchor_id(i)));
    }
    html
}
