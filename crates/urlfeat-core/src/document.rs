//! Tag-queryable view of a fetched page.

use scraper::{Html, Selector};

/// The two queries page features need.
pub trait DocumentQuery {
    /// Text of every element matching `tag`, each whitespace-collapsed,
    /// joined by a single space. Empty when nothing matches.
    fn text_content(&self, tag: &str) -> String;

    /// Number of elements matching `tag`.
    fn count(&self, tag: &str) -> usize;
}

/// HTML document parsed with `scraper` (html5ever). Parsing is lenient and
/// never fails; broken markup yields a best-effort tree.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    fn selector(tag: &str) -> Option<Selector> {
        match Selector::parse(tag) {
            Ok(s) => Some(s),
            Err(e) => {
                tracing::debug!("unusable selector {:?}: {:?}", tag, e);
                None
            }
        }
    }
}

impl std::fmt::Debug for HtmlDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlDocument").finish_non_exhaustive()
    }
}

impl DocumentQuery for HtmlDocument {
    fn text_content(&self, tag: &str) -> String {
        let Some(sel) = Self::selector(tag) else {
            return String::new();
        };
        self.html
            .select(&sel)
            .map(|el| el.text().collect::<String>())
            .map(|t| t.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn count(&self, tag: &str) -> usize {
        Self::selector(tag)
            .map(|sel| self.html.select(&sel).count())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!doctype html>
<html>
  <head><title>Sign in</title>
    <script>var a = 1;</script>
    <script src="/x.js"></script>
  </head>
  <body>
    <h1>Welcome</h1>
    <h2>Please   log in</h2>
    <img src="a.png"><img src="b.png">
    <a href="/one">one</a> <a href="/two">two</a> <a>three</a>
    <script>
      go();
    </script>
  </body>
</html>"#;

    #[test]
    fn counts_tags() {
        let doc = HtmlDocument::parse(PAGE);
        assert_eq!(doc.count("img"), 2);
        assert_eq!(doc.count("a"), 3);
        assert_eq!(doc.count("script"), 3);
        assert_eq!(doc.count("h1"), 1);
        assert_eq!(doc.count("h3"), 0);
        assert_eq!(doc.count("html"), 1);
    }

    #[test]
    fn script_text_joined_and_collapsed() {
        let doc = HtmlDocument::parse(PAGE);
        assert_eq!(doc.text_content("script"), "var a = 1; go();");
    }

    #[test]
    fn heading_text_collapses_whitespace() {
        let doc = HtmlDocument::parse(PAGE);
        assert_eq!(doc.text_content("h2"), "Please log in");
    }

    #[test]
    fn missing_tag_is_empty() {
        let doc = HtmlDocument::parse("<p>hi</p>");
        assert_eq!(doc.text_content("script"), "");
        assert_eq!(doc.count("img"), 0);
    }

    #[test]
    fn unknown_h0_element_is_countable() {
        let doc = HtmlDocument::parse("<h0>odd</h0><h1>x</h1>");
        assert_eq!(doc.count("h0"), 1);
        assert_eq!(doc.count("h1"), 1);
    }

    #[test]
    fn empty_body_still_has_root() {
        let doc = HtmlDocument::parse("");
        assert_eq!(doc.count("html"), 1);
        assert_eq!(doc.text_content("html"), "");
    }

    #[test]
    fn invalid_selector_degrades() {
        let doc = HtmlDocument::parse(PAGE);
        assert_eq!(doc.count("<<"), 0);
        assert_eq!(doc.text_content("<<"), "");
    }
}
