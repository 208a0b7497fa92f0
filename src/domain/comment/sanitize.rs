use regex::Regex;
use std::sync::LazyLock;

// `<` up to the nearest `>`; a lone `<` with no closing `>` is left alone.
static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid html tag regex"));

/// Returns `content` with every HTML-tag-like substring removed.
pub fn strip_html_tags(content: &str) -> String {
    HTML_TAG.replace_all(content, "").into_owned()
}
