/// The "view source" response: rendered markup, scroll position, gutter,
/// path bar and outline for one file.
use serde::Serialize;
use tracing::debug;

use crate::annotate;
use crate::error::Result;
use crate::layout::{Breadcrumb, breadcrumbs};
use crate::lines;
use crate::listing::{ClassOutline, build_outline};
use crate::model::{ClassType, SourceFile};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceView {
    pub project: String,
    pub path: String,
    pub html: String,
    /// Line holding the requested offset.
    pub line: usize,
    /// Line to scroll to so `line` has context above it.
    pub scroll_line: usize,
    pub line_anchors: Vec<String>,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub outline: Vec<ClassOutline>,
}

impl SourceView {
    pub fn build(file: &SourceFile, classes: &[ClassType], offset: i64) -> Result<Self> {
        let html = annotate::transform(&file.annotated_source)?;
        let line = lines::line_number(&file.source, offset);
        debug!(
            "Rendered {}{} ({} bytes), offset {offset} on line {line}",
            file.project,
            file.path,
            file.source.len()
        );
        Ok(Self {
            project: file.project.clone(),
            path: file.path.clone(),
            html,
            line,
            scroll_line: lines::centered_line(line),
            line_anchors: lines::line_anchor_ids(&file.source),
            breadcrumbs: breadcrumbs(&file.project, &file.path),
            outline: build_outline(classes),
        })
    }
}
