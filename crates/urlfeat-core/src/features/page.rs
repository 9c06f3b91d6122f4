//! Page/document features.

use serde::Serialize;

use super::Featurizer;
use crate::document::DocumentQuery;

/// Heading tags counted by `num_titles`. Level 0 does not exist in HTML but
/// is part of the reference feature definition and is kept.
const TITLE_TAGS: [&str; 7] = ["h0", "h1", "h2", "h3", "h4", "h5", "h6"];

/// Raw counts derived from one parsed document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PageStats {
    pub body_length: usize,
    pub num_titles: usize,
    pub num_images: usize,
    pub num_links: usize,
    pub script_length: usize,
    pub special_characters: usize,
}

impl PageStats {
    pub fn from_document(doc: &dyn DocumentQuery) -> Self {
        let body = doc.text_content("html");
        let script = doc.text_content("script");
        Self {
            body_length: body.chars().count(),
            num_titles: TITLE_TAGS.iter().map(|t| doc.count(t)).sum(),
            num_images: doc.count("img"),
            num_links: doc.count("a"),
            script_length: script.chars().count(),
            special_characters: body
                .chars()
                .filter(|c| !c.is_alphabetic() && !c.is_numeric())
                .count(),
        }
    }

    pub fn script_to_special_chars_ratio(&self) -> f64 {
        self.script_length as f64 / (self.special_characters as f64 + 1.0)
    }

    pub fn script_to_body_ratio(&self) -> f64 {
        self.script_length as f64 / (self.body_length as f64 + 1.0)
    }

    pub fn body_to_special_char_ratio(&self) -> f64 {
        self.special_characters as f64 / (self.body_length as f64 + 1.0)
    }
}

impl Featurizer<'_> {
    /// Page statistics, computed on first use. `None` without a document.
    pub fn page_stats(&self) -> Option<&PageStats> {
        self.page
            .get_or_init(|| self.ctx.document().map(PageStats::from_document))
            .as_ref()
    }

    fn page_or<T>(&self, default: T, f: impl FnOnce(&PageStats) -> T) -> T {
        self.page_stats().map(f).unwrap_or(default)
    }

    pub fn body_length(&self) -> usize {
        self.page_or(0, |p| p.body_length)
    }

    pub fn num_titles(&self) -> usize {
        self.page_or(0, |p| p.num_titles)
    }

    pub fn num_images(&self) -> usize {
        self.page_or(0, |p| p.num_images)
    }

    pub fn num_links(&self) -> usize {
        self.page_or(0, |p| p.num_links)
    }

    pub fn script_length(&self) -> usize {
        self.page_or(0, |p| p.script_length)
    }

    pub fn special_characters(&self) -> usize {
        self.page_or(0, |p| p.special_characters)
    }

    pub fn script_to_special_chars_ratio(&self) -> f64 {
        self.page_or(0.0, PageStats::script_to_special_chars_ratio)
    }

    pub fn script_to_body_ratio(&self) -> f64 {
        self.page_or(0.0, PageStats::script_to_body_ratio)
    }

    pub fn body_to_special_char_ratio(&self) -> f64 {
        self.page_or(0.0, PageStats::body_to_special_char_ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::FeaturizerContext;
    use crate::fetch::FetchResult;
    use chrono::Utc;
    use std::collections::HashMap;

    /// Canned document answering from fixed tables.
    struct FixedDoc {
        text: HashMap<&'static str, &'static str>,
        counts: HashMap<&'static str, usize>,
    }

    impl DocumentQuery for FixedDoc {
        fn text_content(&self, tag: &str) -> String {
            self.text.get(tag).copied().unwrap_or("").to_string()
        }

        fn count(&self, tag: &str) -> usize {
            self.counts.get(tag).copied().unwrap_or(0)
        }
    }

    fn ctx_with(doc: FixedDoc) -> FeaturizerContext {
        FeaturizerContext::with_document(
            "https://example.com/",
            Utc::now(),
            None,
            None,
            Some(Box::new(doc)),
        )
    }

    #[test]
    fn stats_from_fixed_document() {
        let doc = FixedDoc {
            text: HashMap::from([("html", "Hi, you! 42"), ("script", "x=1;")]),
            counts: HashMap::from([("h0", 1), ("h1", 2), ("h6", 1), ("img", 3), ("a", 4)]),
        };
        let c = ctx_with(doc);
        let f = Featurizer::new(&c);
        assert_eq!(f.body_length(), 11);
        // ',', ' ', '!', ' '
        assert_eq!(f.special_characters(), 4);
        assert_eq!(f.num_titles(), 4);
        assert_eq!(f.num_images(), 3);
        assert_eq!(f.num_links(), 4);
        assert_eq!(f.script_length(), 4);
        assert!((f.script_to_special_chars_ratio() - 4.0 / 5.0).abs() < 1e-12);
        assert!((f.script_to_body_ratio() - 4.0 / 12.0).abs() < 1e-12);
        assert!((f.body_to_special_char_ratio() - 4.0 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn empty_body_divides_by_one() {
        let doc = FixedDoc {
            text: HashMap::from([("script", "abc")]),
            counts: HashMap::new(),
        };
        let c = ctx_with(doc);
        let f = Featurizer::new(&c);
        assert_eq!(f.body_length(), 0);
        assert_eq!(f.script_to_body_ratio(), 3.0);
        assert_eq!(f.script_to_special_chars_ratio(), 3.0);
        assert_eq!(f.body_to_special_char_ratio(), 0.0);
    }

    #[test]
    fn no_document_gives_zeros() {
        let c = FeaturizerContext::new("https://example.com/", Utc::now(), None, None);
        let f = Featurizer::new(&c);
        assert!(f.page_stats().is_none());
        assert_eq!(f.body_length(), 0);
        assert_eq!(f.num_titles(), 0);
        assert_eq!(f.num_images(), 0);
        assert_eq!(f.num_links(), 0);
        assert_eq!(f.script_length(), 0);
        assert_eq!(f.special_characters(), 0);
        assert_eq!(f.script_to_special_chars_ratio(), 0.0);
        assert_eq!(f.script_to_body_ratio(), 0.0);
        assert_eq!(f.body_to_special_char_ratio(), 0.0);
    }

    #[test]
    fn parsed_html_page() {
        let body = "<html><head><script>a()</script></head>\
                    <body><h1>T</h1><h3>U</h3><img><a href=x>l</a></body></html>";
        let c = FeaturizerContext::new(
            "https://example.com/",
            Utc::now(),
            None,
            Some(FetchResult::new(404, body)),
        );
        let f = Featurizer::new(&c);
        assert_eq!(f.num_titles(), 2);
        assert_eq!(f.num_images(), 1);
        assert_eq!(f.num_links(), 1);
        assert_eq!(f.script_length(), 3);
        // html text: "a()TUl"
        assert_eq!(f.body_length(), 6);
        assert_eq!(f.special_characters(), 2);
    }
}
