//! URL builders for the browser routes.
//!
//! Project names and paths are escaped independently; paths are escaped one
//! segment at a time so their `/` separators survive.
use urlencoding::encode;

use crate::model::{FileRef, SourceLocation};

pub const SEARCH_ROUTE: &str = "/search";
pub const TYPE_ROUTE: &str = "/goto/type";
pub const SOURCE_ROUTE: &str = "/goto/source";
pub const LAYOUT_ROUTE: &str = "/ajax/layout";

/// Escape each `/`-separated segment of `path`, keeping the separators.
pub fn escape_path(path: &str) -> String {
    path.split('/')
        .map(|segment| encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Join a directory and a child name with exactly one `/` between them.
pub fn join_path(dir: &str, name: &str) -> String {
    let dir = dir.trim_end_matches('/');
    let name = name.trim_start_matches('/');
    format!("{dir}/{name}")
}

pub fn search_url(query: &str) -> String {
    format!("{SEARCH_ROUTE}?q={}", encode(query))
}

pub fn search_page_url(query: &str, page_no: usize) -> String {
    format!("{SEARCH_ROUTE}?q={}&page={page_no}", encode(query))
}

pub fn type_url(type_id: i64) -> String {
    format!("{TYPE_ROUTE}/{type_id}")
}

/// Deep link to a file, optionally scrolled to a byte offset.
pub fn source_url(file: &FileRef, offset: Option<i64>) -> String {
    let mut url = match file {
        FileRef::Id(id) => format!("{SOURCE_ROUTE}/{id}"),
        FileRef::Path { project, path } => {
            let path = if path.starts_with('/') {
                path.clone()
            } else {
                format!("/{path}")
            };
            format!("{SOURCE_ROUTE}/{}{}", encode(project), escape_path(&path))
        }
    };
    if let Some(offset) = offset {
        url.push_str(&format!("?offset={offset}"));
    }
    url
}

/// Directory listing route: the children of `dir` in `project`.
pub fn layout_url(project: &str, dir: &str) -> String {
    let dir = dir.trim_matches('/');
    format!("{LAYOUT_ROUTE}/{}/{}", encode(project), escape_path(dir))
}

/// Where a jump target redirects to.
pub fn jump_url(target: &SourceLocation) -> String {
    source_url(&FileRef::Id(target.file_id), Some(target.offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_escapes() {
        assert_eq!(search_url("foo"), "/search?q=foo");
        assert_eq!(search_url("a b&c"), "/search?q=a%20b%26c");
    }

    #[test]
    fn test_search_page_url() {
        assert_eq!(search_page_url("Widget run", 3), "/search?q=Widget%20run&page=3");
    }

    #[test]
    fn test_type_url() {
        assert_eq!(type_url(42), "/goto/type/42");
    }

    #[test]
    fn test_source_url_by_id() {
        assert_eq!(source_url(&FileRef::Id(7), None), "/goto/source/7");
        assert_eq!(source_url(&FileRef::Id(7), Some(120)), "/goto/source/7?offset=120");
    }

    #[test]
    fn test_source_url_by_path() {
        let file = FileRef::path("my proj", "/src/My File.java");
        assert_eq!(
            source_url(&file, None),
            "/goto/source/my%20proj/src/My%20File.java"
        );
        let relative = FileRef::path("acme", "src/Main.java");
        assert_eq!(source_url(&relative, None), "/goto/source/acme/src/Main.java");
    }

    #[test]
    fn test_jump_url() {
        let target = SourceLocation {
            file_id: 3,
            offset: 99,
        };
        assert_eq!(jump_url(&target), "/goto/source/3?offset=99");
    }

    #[test]
    fn test_layout_url() {
        assert_eq!(layout_url("acme", "/"), "/ajax/layout/acme/");
        assert_eq!(layout_url("acme", "/src/main/"), "/ajax/layout/acme/src/main");
        assert_eq!(layout_url("my proj", "a b"), "/ajax/layout/my%20proj/a%20b");
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("/src", "Main.java"), "/src/Main.java");
        assert_eq!(join_path("/src/", "Main.java"), "/src/Main.java");
        assert_eq!(join_path("/", "README"), "/README");
    }
}
