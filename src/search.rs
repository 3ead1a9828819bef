/// Search result pages.
///
/// The assembler never learns the total hit count, so every page links to a
/// next page; an empty fetch is how the caller finds the end.
use serde::Serialize;

use crate::links;
use crate::listing::kind_label;
use crate::model::SearchHit;

/// Half-open, zero-based rank range `[from, to)` for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankWindow {
    pub rank_from: usize,
    pub rank_to: usize,
}

impl RankWindow {
    /// Window for page `page_no`. Ranks saturate at `usize::MAX`, so an
    /// absurd page number yields an empty window past every real hit.
    pub fn for_page(page_no: usize, page_size: usize) -> Self {
        let rank_from = page_size.saturating_mul(page_no);
        Self {
            rank_from,
            rank_to: rank_from.saturating_add(page_size),
        }
    }

    pub fn len(&self) -> usize {
        self.rank_to - self.rank_from
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A hit shaped for the results list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResultItem {
    pub title: String,
    pub kind: String,
    pub url: String,
    pub summary: String,
}

impl From<&SearchHit> for SearchResultItem {
    fn from(hit: &SearchHit) -> Self {
        Self {
            title: format!("{}{}", hit.project, hit.path),
            kind: kind_label(hit.class_type.as_ref().map(|c| c.kind)),
            url: links::jump_url(&hit.jump_target),
            summary: hit.summary.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub query: String,
    pub page_no: usize,
    #[serde(flatten)]
    pub window: RankWindow,
    pub hits: Vec<SearchResultItem>,
    pub next_page_url: String,
}

/// Assemble page `page_no` from hits already fetched for its rank window.
///
/// Call only after the upstream status has been checked.
pub fn assemble_page(query: &str, page_no: usize, page_size: usize, hits: &[SearchHit]) -> SearchPage {
    let window = RankWindow::for_page(page_no, page_size);
    if hits.len() > window.len() {
        tracing::warn!(
            "Upstream returned {} hits for a window of {}",
            hits.len(),
            window.len()
        );
    }
    SearchPage {
        query: query.to_string(),
        page_no,
        window,
        hits: hits.iter().map(SearchResultItem::from).collect(),
        next_page_url: links::search_page_url(query, page_no.saturating_add(1)),
    }
}
