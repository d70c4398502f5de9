//! Stylesheet queue for the document head.
//!
//! This module provides [`StyleQueue`], a minimal asset pipeline that keeps
//! each stylesheet together with the inline CSS attached to it. Rendering
//! walks the queue in insertion order and emits every inline block directly
//! after its sheet, so inline custom properties always follow the rules they
//! override.

use minijinja::{Environment, Value};
use serde::{Deserialize, Serialize};

/// Template for the head fragment.
///
/// Attribute values go through the `attr` filter; inline CSS is emitted as is.
const HEAD_TEMPLATE: &str = concat!(
    "{% for entry in entries %}",
    "<link rel='stylesheet' id='{{ entry.handle | attr }}-css' ",
    "href='{{ entry.url | attr }}' media='{{ entry.media | attr }}' />\n",
    "{% if entry.inline %}",
    "<style id='{{ entry.handle | attr }}-inline-css'>\n",
    "{{ entry.inline | join(\"\\n\") }}\n",
    "</style>\n",
    "{% endif %}",
    "{% endfor %}",
);

/// A stylesheet registered under a unique handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stylesheet {
    /// Unique name other assets refer to this sheet by.
    pub handle: String,
    /// Location of the sheet, relative or absolute.
    pub href: String,
    /// Appended as `?ver=<version>` for cache busting.
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default = "default_media")]
    pub media: String,
}

fn default_media() -> String {
    "all".to_string()
}

impl Stylesheet {
    pub fn new(handle: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            href: href.into(),
            version: None,
            media: default_media(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_media(mut self, media: impl Into<String>) -> Self {
        self.media = media.into();
        self
    }

    /// Returns the href with the version query appended, if any.
    pub fn url(&self) -> String {
        match &self.version {
            Some(version) => {
                let sep = if self.href.contains('?') { '&' } else { '?' };
                format!("{}{}ver={}", self.href, sep, version)
            }
            None => self.href.clone(),
        }
    }
}

/// Error type for queue operations.
#[derive(Debug, thiserror::Error)]
pub enum InjectError {
    /// Inline CSS was attached to a handle that was never enqueued.
    #[error("no stylesheet enqueued under handle \"{handle}\"")]
    UnknownHandle { handle: String },

    /// The head fragment failed to render.
    #[error("failed to render stylesheet tags: {0}")]
    Render(#[from] minijinja::Error),
}

#[derive(Debug, Clone)]
struct QueuedSheet {
    sheet: Stylesheet,
    inline: Vec<String>,
}

#[derive(Serialize)]
struct HeadEntry<'a> {
    handle: &'a str,
    url: String,
    media: &'a str,
    inline: &'a [String],
}

/// Ordered stylesheets and their inline CSS.
///
/// # Example
///
/// ```rust
/// use fcrm_styles::{StyleQueue, Stylesheet};
///
/// let mut queue = StyleQueue::new();
/// queue.enqueue(Stylesheet::new("tributes", "css/tributes.css").with_version("1.0"));
/// queue.add_inline("tributes", ":root {--fcrm-link-color: #123;}").unwrap();
///
/// let head = queue.render_head().unwrap();
/// assert_eq!(
///     head,
///     "<link rel='stylesheet' id='tributes-css' href='css/tributes.css?ver=1.0' media='all' />\n\
///      <style id='tributes-inline-css'>\n\
///      :root {--fcrm-link-color: #123;}\n\
///      </style>\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleQueue {
    sheets: Vec<QueuedSheet>,
}

impl StyleQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a stylesheet to the end of the queue.
    ///
    /// A sheet whose handle is already queued is ignored, keeping the first
    /// registration and its position.
    pub fn enqueue(&mut self, sheet: Stylesheet) {
        if self.position(&sheet.handle).is_some() {
            log::debug!("stylesheet {} already enqueued", sheet.handle);
            return;
        }
        self.sheets.push(QueuedSheet {
            sheet,
            inline: Vec::new(),
        });
    }

    /// Attaches CSS to be emitted right after the sheet named `handle`.
    ///
    /// Empty CSS is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`InjectError::UnknownHandle`] if no sheet has that handle.
    pub fn add_inline(&mut self, handle: &str, css: impl Into<String>) -> Result<(), InjectError> {
        let index = self
            .position(handle)
            .ok_or_else(|| InjectError::UnknownHandle {
                handle: handle.to_string(),
            })?;
        let css = css.into();
        if !css.is_empty() {
            self.sheets[index].inline.push(css);
        }
        Ok(())
    }

    /// Returns queued handles in document order.
    pub fn handles(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(|q| q.sheet.handle.as_str())
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Renders `<link>` and `<style>` tags for the whole queue.
    pub fn render_head(&self) -> Result<String, InjectError> {
        let mut env = Environment::new();
        env.add_filter("attr", escape_attr);
        env.add_template("head", HEAD_TEMPLATE)?;

        let entries: Vec<HeadEntry<'_>> = self
            .sheets
            .iter()
            .map(|q| HeadEntry {
                handle: &q.sheet.handle,
                url: q.sheet.url(),
                media: &q.sheet.media,
                inline: &q.inline,
            })
            .collect();

        let tmpl = env.get_template("head")?;
        Ok(tmpl.render(minijinja::context! { entries => entries })?)
    }

    fn position(&self, handle: &str) -> Option<usize> {
        self.sheets.iter().position(|q| q.sheet.handle == handle)
    }
}

/// Escapes a value for a single-quoted HTML attribute.
///
/// minijinja's `escape` also encodes `/` as `&#x2f;`, which would mangle every
/// href; this only encodes the five attribute-breaking characters, with `'` as
/// `&#039;` to match the host's attribute escaping.
fn escape_attr(value: Value) -> String {
    let text = value.to_string();
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#039;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_without_version() {
        let sheet = Stylesheet::new("a", "css/a.css");
        assert_eq!(sheet.url(), "css/a.css");
    }

    #[test]
    fn test_url_with_existing_query() {
        let sheet = Stylesheet::new("a", "css/a.css?lang=en").with_version("2");
        assert_eq!(sheet.url(), "css/a.css?lang=en&ver=2");
    }

    #[test]
    fn test_enqueue_is_first_wins() {
        let mut queue = StyleQueue::new();
        queue.enqueue(Stylesheet::new("a", "first.css"));
        queue.enqueue(Stylesheet::new("b", "b.css"));
        queue.enqueue(Stylesheet::new("a", "second.css"));

        assert_eq!(queue.handles().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(queue.render_head().unwrap().contains("first.css"));
    }

    #[test]
    fn test_add_inline_unknown_handle() {
        let mut queue = StyleQueue::new();
        let err = queue.add_inline("missing", "a{}").unwrap_err();
        assert!(matches!(err, InjectError::UnknownHandle { .. }));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_add_inline_empty_is_ignored() {
        let mut queue = StyleQueue::new();
        queue.enqueue(Stylesheet::new("a", "a.css"));
        queue.add_inline("a", "").unwrap();
        assert!(!queue.render_head().unwrap().contains("<style"));
    }

    #[test]
    fn test_inline_follows_its_own_sheet() {
        let mut queue = StyleQueue::new();
        queue.enqueue(Stylesheet::new("base", "base.css"));
        queue.enqueue(Stylesheet::new("later", "later.css"));
        queue.add_inline("base", ":root {--x: 1;}").unwrap();

        let head = queue.render_head().unwrap();
        let base = head.find("id='base-css'").unwrap();
        let inline = head.find(":root {--x: 1;}").unwrap();
        let later = head.find("id='later-css'").unwrap();
        assert!(base < inline && inline < later);
    }

    #[test]
    fn test_multiple_inline_blocks_share_one_style_tag() {
        let mut queue = StyleQueue::new();
        queue.enqueue(Stylesheet::new("a", "a.css"));
        queue.add_inline("a", "one{}").unwrap();
        queue.add_inline("a", "two{}").unwrap();

        let head = queue.render_head().unwrap();
        assert_eq!(head.matches("<style").count(), 1);
        assert!(head.contains("one{}\ntwo{}"));
    }

    #[test]
    fn test_attributes_are_escaped_but_css_is_not() {
        let mut queue = StyleQueue::new();
        queue.enqueue(Stylesheet::new("a", "x.css?'onload='alert(1)"));
        queue.add_inline("a", "</style><script>").unwrap();

        let head = queue.render_head().unwrap();
        assert!(head.contains("href='x.css?&#039;onload=&#039;alert(1)'"));
        assert!(head.contains("\n</style><script>\n"));
    }

    #[test]
    fn test_attr_escape_keeps_slashes_and_encodes_quotes() {
        assert_eq!(
            escape_attr(Value::from("css/a.css?x=1&y='2'")),
            "css/a.css?x=1&amp;y=&#039;2&#039;"
        );
        assert_eq!(escape_attr(Value::from("<\">")), "&lt;&quot;&gt;");
    }

    #[test]
    fn test_render_empty_queue() {
        assert_eq!(StyleQueue::new().render_head().unwrap(), "");
    }

    #[test]
    fn test_custom_media() {
        let mut queue = StyleQueue::new();
        queue.enqueue(Stylesheet::new("p", "print.css").with_media("print"));
        assert!(queue.render_head().unwrap().contains("media='print'"));
    }
}
