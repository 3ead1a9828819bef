//! Display shorteners for qualified names.
//!
//! Only used for labels; the full qualified name stays the identifier.

/// Last `.`-delimited component: `com.acme.Widget` → `Widget`.
pub fn short_type(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}

/// Substring after the last `#`: `com.acme.Widget#run` → `run`.
///
/// A name without `#` is returned whole.
pub fn short_member(handle: &str) -> &str {
    handle.rsplit('#').next().unwrap_or(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_type() {
        assert_eq!(short_type("com.acme.Widget"), "Widget");
        assert_eq!(short_type("Widget"), "Widget");
        assert_eq!(short_type("int"), "int");
        assert_eq!(short_type(""), "");
    }

    #[test]
    fn test_short_member() {
        assert_eq!(short_member("com.acme.Widget#doThing"), "doThing");
        assert_eq!(short_member("com.acme.Widget"), "com.acme.Widget");
        assert_eq!(short_member("a#b#c"), "c");
    }

    #[test]
    fn test_trailing_separator() {
        assert_eq!(short_type("com.acme."), "");
        assert_eq!(short_member("com.acme.Widget#"), "");
    }
}
