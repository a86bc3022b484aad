//! Link registry for footnote-style references.

/// Ordered list of URLs collected from anchors while rendering one document.
///
/// URLs are kept in first-seen order without deduplication: every anchor gets
/// its own number, even when it repeats an earlier URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkRegistry {
    links: Vec<String>,
}

impl LinkRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a URL and return its 1-based footnote number.
    pub fn push(&mut self, url: impl Into<String>) -> usize {
        self.links.push(url.into());
        self.links.len()
    }

    /// Number of recorded URLs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether no URL has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Recorded URLs in order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.links
    }

    /// Iterate over `(number, url)` pairs, numbering from 1.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.links
            .iter()
            .enumerate()
            .map(|(index, url)| (index + 1, url.as_str()))
    }
}
