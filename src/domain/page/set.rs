// SPDX-License-Identifier: MPL-2.0
//! Page content and page set identity.

use std::fmt;
use std::sync::Arc;

// =============================================================================
// PageContent
// =============================================================================

/// One page of markup, in the form it was received from the host.
///
/// The markup is opaque: it is never parsed or sanitized, only carried
/// through to the presentation widget.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageContent(String);

impl PageContent {
    /// Wraps a markup string.
    #[must_use]
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// Returns the raw markup.
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the markup is empty or only whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for PageContent {
    fn from(markup: &str) -> Self {
        Self::new(markup)
    }
}

impl From<String> for PageContent {
    fn from(markup: String) -> Self {
        Self(markup)
    }
}

impl fmt::Display for PageContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// PageSet
// =============================================================================

/// Ordered, immutable sequence of pages.
///
/// A page set has an identity separate from its content. Cloning shares the
/// identity; building a new set always creates a new one, even when the pages
/// are equal. The viewer rebuilds its widget whenever the identity changes.
///
/// # Example
///
/// ```
/// use flipbook::domain::page::PageSet;
///
/// let pages = PageSet::from_markup(["<p>Cover</p>", "<p>Page 1</p>"]);
/// let shared = pages.clone();
/// let rebuilt = PageSet::from_markup(["<p>Cover</p>", "<p>Page 1</p>"]);
///
/// assert!(pages.same_identity(&shared));
/// assert!(!pages.same_identity(&rebuilt));
/// assert_eq!(pages, rebuilt);
/// ```
#[derive(Clone)]
pub struct PageSet(Arc<[PageContent]>);

impl PageSet {
    /// Creates a page set with a fresh identity.
    #[must_use]
    pub fn new(pages: Vec<PageContent>) -> Self {
        Self(pages.into())
    }

    /// Creates a page set from raw markup strings, preserving order.
    #[must_use]
    pub fn from_markup<I, S>(markup: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(markup.into_iter().map(PageContent::new).collect())
    }

    /// Returns `true` if both sets share one identity.
    ///
    /// Equal content does not imply equal identity.
    #[must_use]
    pub fn same_identity(&self, other: &PageSet) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Returns the pages in reading order.
    #[must_use]
    pub fn pages(&self) -> &[PageContent] {
        &self.0
    }

    /// Returns the number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set has no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the pages in reading order.
    pub fn iter(&self) -> std::slice::Iter<'_, PageContent> {
        self.0.iter()
    }
}

impl Default for PageSet {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

// Content equality. Identity is checked with `same_identity`.
impl PartialEq for PageSet {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for PageSet {}

impl fmt::Debug for PageSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageSet")
            .field("len", &self.0.len())
            .field("identity", &Arc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

impl FromIterator<PageContent> for PageSet {
    fn from_iter<I: IntoIterator<Item = PageContent>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PageSet {
    type Item = &'a PageContent;
    type IntoIter = std::slice::Iter<'a, PageContent>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_content_keeps_markup_verbatim() {
        let page = PageContent::new("  <p>Cover</p>\n");
        assert_eq!(page.markup(), "  <p>Cover</p>\n");
        assert_eq!(page.to_string(), "  <p>Cover</p>\n");
    }

    #[test]
    fn page_content_blank_detection() {
        assert!(PageContent::new("").is_blank());
        assert!(PageContent::new(" \n\t").is_blank());
        assert!(!PageContent::new("<br>").is_blank());
    }

    #[test]
    fn page_set_preserves_order() {
        let pages = PageSet::from_markup(["a", "b", "c"]);
        let markup: Vec<_> = pages.iter().map(PageContent::markup).collect();
        assert_eq!(markup, vec!["a", "b", "c"]);
        assert_eq!(pages.len(), 3);
        assert!(!pages.is_empty());
    }

    #[test]
    fn clone_shares_identity() {
        let pages = PageSet::from_markup(["a"]);
        let clone = pages.clone();
        assert!(pages.same_identity(&clone));
        assert!(clone.same_identity(&pages));
    }

    #[test]
    fn equal_content_has_distinct_identity() {
        let first = PageSet::from_markup(["a", "b"]);
        let second = PageSet::from_markup(["a", "b"]);
        assert_eq!(first, second);
        assert!(!first.same_identity(&second));
    }

    #[test]
    fn empty_sets_have_distinct_identities() {
        let first = PageSet::default();
        let second = PageSet::default();
        assert!(first.is_empty());
        assert_eq!(first, second);
        assert!(!first.same_identity(&second));
    }

    #[test]
    fn collect_builds_new_identity() {
        let source = PageSet::from_markup(["x", "y"]);
        let collected: PageSet = source.iter().cloned().collect();
        assert_eq!(collected, source);
        assert!(!collected.same_identity(&source));
    }
}
