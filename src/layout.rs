/// Directory tree nodes and breadcrumbs for the file browser.
///
/// The tree is expanded one level per call: directories come back without a
/// link and the UI asks again with the clicked directory as the new query.
use quick_xml::escape::escape;
use serde::Serialize;

use crate::links;
use crate::model::{DirectoryChild, FileRef};

/// One row of the lazy tree widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutNode {
    pub text: String,
    pub has_children: bool,
}

/// Build the rows for one directory level of `project`.
pub fn build_layout(project: &str, queried_path: &str, children: &[DirectoryChild]) -> Vec<LayoutNode> {
    children
        .iter()
        .map(|child| {
            let name = child.name.trim();
            if child.is_directory {
                LayoutNode {
                    text: escape(name.trim_end_matches('/')).into_owned(),
                    has_children: true,
                }
            } else {
                let file = FileRef::path(project, links::join_path(queried_path, name));
                LayoutNode {
                    text: format!(
                        "<a href=\"{}\">{}</a>",
                        escape(links::source_url(&file, None).as_str()),
                        escape(name)
                    ),
                    has_children: false,
                }
            }
        })
        .collect()
}

/// Same as [`build_layout`] for upstreams that return children as paths.
pub fn build_layout_legacy(project: &str, queried_path: &str, raw_children: &[String]) -> Vec<LayoutNode> {
    let children: Vec<DirectoryChild> = raw_children
        .iter()
        .map(|raw| DirectoryChild::from_legacy(queried_path, raw))
        .collect();
    build_layout(project, queried_path, &children)
}

/// One segment of the path bar above the source view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub active: bool,
}

/// Path bar for `path` in `project`: the project, each directory and the
/// file itself (active, unlinked).
///
/// Project and directory crumbs link to the directory listing route, not to
/// the source route, since a directory has no source to show.
pub fn breadcrumbs(project: &str, path: &str) -> Vec<Breadcrumb> {
    let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
    let mut crumbs = Vec::with_capacity(parts.len() + 1);
    crumbs.push(Breadcrumb {
        name: project.to_string(),
        url: Some(links::layout_url(project, "/")),
        active: parts.is_empty(),
    });

    let mut dir = String::new();
    for (i, part) in parts.iter().enumerate() {
        dir.push('/');
        dir.push_str(part);
        let last = i + 1 == parts.len();
        crumbs.push(Breadcrumb {
            name: part.to_string(),
            url: if last {
                None
            } else {
                Some(links::layout_url(project, &dir))
            },
            active: last,
        });
    }
    crumbs
}
