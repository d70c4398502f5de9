//! Text sanitization for submitted settings.
//!
//! Rendering emits stored values verbatim, so anything written into the store
//! from user input must pass through [`sanitize_text_field`] first.

use once_cell::sync::Lazy;
use regex::Regex;

static SCRIPT_OR_STYLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<(?:script|style)\b[^>]*>.*?</(?:script|style)\s*>").expect("valid regex")
});

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^<>]*>").expect("valid regex"));

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\r\n\t ]+").expect("valid regex"));

static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").expect("valid regex"));

static OCTET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)%[a-f0-9]{2}").expect("valid regex"));

/// Cleans a single-line text value from a form submission.
///
/// - `<script>` and `<style>` elements are dropped along with their content
/// - every other tag is stripped, keeping its inner text
/// - a `<` that does not open a tag becomes `&lt;`
/// - runs of spaces, tabs and line breaks collapse to one space
/// - percent-encoded octets such as `%3C` are removed
/// - the result is trimmed
///
/// # Example
///
/// ```rust
/// use fcrm_styles::sanitize_text_field;
///
/// assert_eq!(sanitize_text_field("  #FF0000\n"), "#FF0000");
/// assert_eq!(sanitize_text_field("</style><script>"), "");
/// assert_eq!(sanitize_text_field("rgba(0, 0, 0,\t0.5)"), "rgba(0, 0, 0, 0.5)");
/// ```
pub fn sanitize_text_field(input: &str) -> String {
    let mut text = input.to_string();

    if text.contains('<') {
        text = SCRIPT_OR_STYLE.replace_all(&text, "").into_owned();
        text = TAG.replace_all(&text, "").into_owned();
        text = text.replace('<', "&lt;");
    }

    text = WHITESPACE_RUN.replace_all(&text, " ").trim().to_string();

    let mut found_octets = false;
    while OCTET.is_match(&text) {
        text = OCTET.replace_all(&text, "").into_owned();
        found_octets = true;
    }
    if found_octets {
        text = SPACE_RUN.replace_all(text.trim(), " ").into_owned();
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_colors_pass_through() {
        assert_eq!(sanitize_text_field("#ff0000"), "#ff0000");
        assert_eq!(sanitize_text_field("rgba(0,0,255,0.5)"), "rgba(0,0,255,0.5)");
    }

    #[test]
    fn test_trims_and_collapses_whitespace() {
        assert_eq!(sanitize_text_field("\t rgb(1,\r\n 2, 3) \n"), "rgb(1, 2, 3)");
    }

    #[test]
    fn test_drops_script_with_content() {
        assert_eq!(
            sanitize_text_field("<script>alert('x')</script>#fff"),
            "#fff"
        );
        assert_eq!(
            sanitize_text_field("<STYLE type=\"text/css\">a{}</STYLE>#000"),
            "#000"
        );
    }

    #[test]
    fn test_strips_tags_keeping_text() {
        assert_eq!(sanitize_text_field("<b>#abc</b>"), "#abc");
    }

    #[test]
    fn test_stray_less_than_is_encoded() {
        assert_eq!(sanitize_text_field("a < b"), "a &lt; b");
        assert_eq!(sanitize_text_field("a < b <i>c</i>"), "a &lt; b c");
    }

    #[test]
    fn test_breakout_attempt_is_neutralized() {
        assert_eq!(sanitize_text_field("red;}</style><script>x()</script>"), "red;}");
    }

    #[test]
    fn test_removes_percent_octets() {
        assert_eq!(sanitize_text_field("%3Cb%3E"), "b");
        assert_eq!(sanitize_text_field("a %20 b"), "a b");
    }

    #[test]
    fn test_removes_nested_octets() {
        assert_eq!(sanitize_text_field("%%4141x"), "x");
    }

    #[test]
    fn test_percent_without_hex_is_kept() {
        assert_eq!(sanitize_text_field("rgb(10%, 20%, 30%)"), "rgb(10%, 20%, 30%)");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize_text_field(""), "");
        assert_eq!(sanitize_text_field(" \n\t "), "");
    }

    #[test]
    fn test_every_pattern_compiles() {
        for pattern in [&SCRIPT_OR_STYLE, &TAG, &WHITESPACE_RUN, &SPACE_RUN, &OCTET] {
            assert!(!Lazy::force(pattern).as_str().is_empty());
        }
    }
}
