/// End-to-end tests over the public API.
///
/// Each test feeds an upstream response the way the calling layer would:
///   JSON → Upstream<T> → status check → transformation
use srcview::complete::build_completions;
use srcview::error::BrowseError;
use srcview::layout::build_layout;
use srcview::listing::build_listing;
use srcview::model::{CompletionHit, DirectoryChild, HitKind, SearchHit, SourceFile, SymbolRecord};
use srcview::search::assemble_page;
use srcview::view::SourceView;
use srcview::{StatusCode, Upstream, annotate, lines, names};

/// Source view built from an upstream "source" response
#[test]
fn test_source_view_pipeline() {
    let json = r#"{
        "status": "OK",
        "payload": {
            "id": 5,
            "project": "acme",
            "path": "/src/Widget.java",
            "source": "class Widget {\n  Arg arg;\n}\n",
            "annotatedSource": "<?xml version=\"1.0\" ?><source>class <type-usage type-id=\"42\" resolved=\"true\">Widget</type-usage> {\n  <type-usage type-id=\"-1\" resolved=\"false\">Arg</type-usage> <field-declaration field=\"arg\">arg</field-declaration>;\n}\n</source>"
        }
    }"#;
    let resp: Upstream<SourceFile> = serde_json::from_str(json).unwrap();
    let file = resp.into_result("file 5").unwrap();

    let view = SourceView::build(&file, &[], 17).unwrap();
    assert_eq!(
        view.html,
        "class <a href=\"/goto/type/42\">Widget</a> {\n  <span>Arg</span> <a href=\"/search?q=arg\">arg</a>;\n}\n"
    );
    assert_eq!(view.line, 1);
    assert_eq!(view.scroll_line, 0);
    assert_eq!(view.line_anchors, vec!["line_no_0", "line_no_1", "line_no_2"]);
    assert_eq!(view.breadcrumbs.last().unwrap().name, "Widget.java");
}

/// A missing file surfaces as NotFound before any transformation runs
#[test]
fn test_not_found_status() {
    let resp: Upstream<SourceFile> = serde_json::from_str(r#"{"status": "FILE_NOT_FOUND"}"#).unwrap();
    assert_eq!(
        resp.into_result("/src/Gone.java").unwrap_err(),
        BrowseError::NotFound("/src/Gone.java".to_string())
    );

    let resp: Upstream<Vec<SearchHit>> = Upstream::failed(StatusCode::UnknownError);
    assert_eq!(
        resp.into_result("search").unwrap_err(),
        BrowseError::UpstreamFailure(StatusCode::UnknownError)
    );
}

/// Symbol listing from upstream records, absent lists included
#[test]
fn test_listing_pipeline() {
    let json = r#"{
        "status": "OK",
        "payload": [
            {"variant": "ClassType", "handle": {"name": "com.acme.Widget"}, "kind": "CLASS"},
            {"variant": "Field", "handle": {"name": "com.acme.Widget#arg"}, "type": {"name": "com.acme.Arg"}},
            {"variant": "Method", "handle": {"name": "com.acme.Widget#run"},
             "parameters": [{"type": {"name": "com.acme.Arg"}}],
             "returnType": {"name": "java.lang.Boolean"}},
            {"variant": "Method", "handle": {"name": "com.acme.Widget#stop"},
             "returnType": {"name": "void"}}
        ]
    }"#;
    let resp: Upstream<Vec<SymbolRecord>> = serde_json::from_str(json).unwrap();
    let listing = build_listing(resp.into_result("types").unwrap());
    let names: Vec<&str> = listing.iter().map(|d| d.display_name.as_str()).collect();
    assert_eq!(names, vec!["Widget", "arg: Arg", "run(Arg): Boolean", "stop: void"]);
}

/// Layout rows serialize the way the tree widget expects
#[test]
fn test_layout_pipeline() {
    let json = r#"{
        "status": "OK",
        "payload": [
            {"name": "utils", "isDirectory": true},
            {"name": "Main.java", "isDirectory": false}
        ]
    }"#;
    let resp: Upstream<Vec<DirectoryChild>> = serde_json::from_str(json).unwrap();
    let nodes = build_layout("acme", "/src", &resp.into_result("/src").unwrap());
    let out = serde_json::to_value(&nodes).unwrap();
    assert_eq!(
        out,
        serde_json::json!([
            {"text": "utils", "hasChildren": true},
            {"text": "<a href=\"/goto/source/acme/src/Main.java\">Main.java</a>", "hasChildren": false}
        ])
    );
}

/// Search page window and next-page link
#[test]
fn test_search_pipeline() {
    let json = r#"{
        "status": "OK",
        "payload": [
            {"rank": 20, "project": "acme", "path": "/src/Widget.java", "summary": "class Widget",
             "jumpTarget": {"fileId": 5, "offset": 6},
             "classType": {"handle": {"name": "com.acme.Widget"}, "kind": "CLASS"}}
        ]
    }"#;
    let resp: Upstream<Vec<SearchHit>> = serde_json::from_str(json).unwrap();
    let page = assemble_page("Widget", 2, 10, &resp.into_result("search").unwrap());
    assert_eq!(page.window.rank_from, 20);
    assert_eq!(page.window.rank_to, 30);
    assert_eq!(page.next_page_url, "/search?q=Widget&page=3");
    assert_eq!(page.hits[0].url, "/goto/source/5?offset=6");
    assert_eq!(page.hits[0].kind, "[class]");
}

/// Offset properties hold for arbitrary content
#[test]
fn test_line_properties() {
    let samples = ["", "a", "\n", "one\ntwo\nthree", "x\n\n\ny\n"];
    for content in samples {
        let len = content.len() as i64;
        assert_eq!(lines::line_number(content, 0), 0);
        assert_eq!(lines::line_number(content, len), lines::total_lines(content));
        for offset in [-3, 0, 1, len, len + 7] {
            assert_eq!(
                lines::line_number(content, offset),
                lines::line_number(content, offset.clamp(0, len))
            );
        }
    }
}

/// Plain text comes back unchanged; names shorten as expected
#[test]
fn test_plain_text_and_names() {
    let text = "int main() { return 0; }";
    assert_eq!(annotate::transform(&format!("<source>{text}</source>")).unwrap(), text);
    assert_eq!(names::short_type("com.acme.Widget"), "Widget");
    assert_eq!(names::short_member("com.acme.Widget#doThing"), "doThing");
}

/// Completion dropdown from an upstream "complete" response
#[test]
fn test_completion_pipeline() {
    let json = r#"{
        "status": "OK",
        "payload": [
            {"kind": "TYPE", "project": "acme", "path": "/src/Widget.java",
             "jumpTarget": {"fileId": 5, "offset": 6},
             "classType": {"handle": {"name": "com.acme.Widget"}, "kind": "CLASS", "useCount": 7}},
            {"kind": "FILE", "project": "acme", "path": "/src/Widget.java",
             "jumpTarget": {"fileId": 5, "offset": 0}},
            {"kind": "PACKAGE", "project": "acme", "path": "/src",
             "jumpTarget": {"fileId": 1, "offset": 0}}
        ]
    }"#;
    let resp: Upstream<Vec<CompletionHit>> = serde_json::from_str(json).unwrap();
    let entries = build_completions(&resp.into_result("completions").unwrap(), 2);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].label, "com.acme.Widget");
    assert_eq!(entries[0].use_count_text.as_deref(), Some("7 uses"));
    assert_eq!(entries[0].url, "/goto/source/5?offset=6");
    assert_eq!(entries[1].kind, HitKind::File);
    assert_eq!(entries[1].label, "acme/src/Widget.java");
}

/// Directory names with markup characters stay inert in tree rows
#[test]
fn test_layout_escapes_names() {
    let children = vec![DirectoryChild::directory("<b>")];
    let nodes = build_layout("acme", "/", &children);
    assert_eq!(nodes[0].text, "&lt;b&gt;");
}
