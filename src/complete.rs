/// Search-box completions.
///
/// Upstream returns candidate hits for a partially typed query; each becomes
/// a dropdown entry that jumps straight to its source.
use serde::Serialize;

use crate::links;
use crate::model::{CompletionHit, HitKind};

/// Entries the search box asks for by default.
pub const DEFAULT_COMPLETION_LIMIT: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionEntry {
    /// Position in the dropdown, used for keyboard selection.
    pub index: usize,
    pub kind: HitKind,
    pub label: String,
    pub url: String,
    /// Only present for type hits; empty when the type is unused.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_count_text: Option<String>,
}

/// `"3 uses"`, `"1 use"`, or empty.
pub fn use_count_text(n: u64) -> String {
    match n {
        0 => String::new(),
        1 => "1 use".to_string(),
        n => format!("{n} uses"),
    }
}

/// Turn upstream hits into at most `limit` dropdown entries, in input order.
pub fn build_completions(hits: &[CompletionHit], limit: usize) -> Vec<CompletionEntry> {
    hits.iter()
        .take(limit)
        .enumerate()
        .map(|(index, hit)| {
            let (label, use_count_text) = match (hit.kind, &hit.class_type) {
                (HitKind::Type, Some(class)) => (
                    class.handle.name.clone(),
                    Some(use_count_text(class.use_count)),
                ),
                (HitKind::Type, None) => (
                    format!("{}{}", hit.project, hit.path),
                    Some(String::new()),
                ),
                _ => (format!("{}{}", hit.project, hit.path), None),
            };
            CompletionEntry {
                index,
                kind: hit.kind,
                label,
                url: links::jump_url(&hit.jump_target),
                use_count_text,
            }
        })
        .collect()
}
