//! URL detection in message bodies.

use std::fmt;

use linkify::{LinkFinder, LinkKind};

/// Finds URLs in text.
///
/// A URL either carries a scheme (`https://...`) or starts with `www.`. Bare
/// `word.word` pairs such as `file.txt` are not links.
///
/// Holds no per-call state; build one and share it between every query of a
/// transcript.
///
/// # Example
///
/// ```
/// use chatstat::core::links::UrlExtractor;
///
/// let urls = UrlExtractor::new();
/// assert_eq!(urls.find_urls("Check http://x.co now").collect::<Vec<_>>(), vec!["http://x.co"]);
/// assert_eq!(urls.count("no links here"), 0);
/// ```
pub struct UrlExtractor {
    finder: LinkFinder,
}

impl UrlExtractor {
    /// Creates an extractor that also accepts `www.example.com` style URLs.
    pub fn new() -> Self {
        let mut finder = LinkFinder::new();
        finder.kinds(&[LinkKind::Url]);
        finder.url_must_have_scheme(false);
        Self { finder }
    }

    /// Iterates over the URLs in `text`.
    pub fn find_urls<'t>(&self, text: &'t str) -> impl Iterator<Item = &'t str> {
        self.finder
            .links(text)
            .map(|link| link.as_str())
            .filter(|url| is_well_formed(url))
    }

    /// Number of URLs in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.find_urls(text).count()
    }
}

fn is_well_formed(url: &str) -> bool {
    url.contains("://")
        || url
            .get(..4)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("www."))
}

impl Default for UrlExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for UrlExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlExtractor").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_scheme_urls() {
        let urls = UrlExtractor::new();
        let found: Vec<_> = urls
            .find_urls("see https://example.com/a?b=1 and http://x.co")
            .collect();
        assert_eq!(found, vec!["https://example.com/a?b=1", "http://x.co"]);
    }

    #[test]
    fn test_finds_www_urls() {
        let urls = UrlExtractor::new();
        let found: Vec<_> = urls.find_urls("try www.example.org/page today").collect();
        assert_eq!(found, vec!["www.example.org/page"]);
    }

    #[test]
    fn test_dotted_words_are_not_urls() {
        let urls = UrlExtractor::new();
        assert_eq!(urls.count("see file.txt"), 0);
        assert_eq!(urls.count("node.js rocks"), 0);
        assert_eq!(urls.count("lol.haha"), 0);
        assert_eq!(urls.count("file.txt and https://x.co"), 1);
    }

    #[test]
    fn test_no_urls_in_plain_text() {
        let urls = UrlExtractor::new();
        assert_eq!(urls.count("hello world"), 0);
        assert_eq!(urls.count("<Media omitted>"), 0);
        assert_eq!(urls.count(""), 0);
    }
}
