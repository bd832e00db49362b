// SPDX-License-Identifier: MPL-2.0
//! Page containers synthesized for the presentation widget.

use super::{PageContent, PageSet};

/// Class name given to every page container.
pub const PAGE_CLASS_NAME: &str = "page";

/// One page container, populated with a single page's markup.
///
/// The widget receives the whole ordered set of nodes in one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNode {
    index: usize,
    inner_html: String,
}

impl PageNode {
    /// Creates the container for the page at `index`.
    #[must_use]
    pub fn new(index: usize, content: &PageContent) -> Self {
        Self {
            index,
            inner_html: content.markup().to_owned(),
        }
    }

    /// Builds one node per page, in reading order.
    #[must_use]
    pub fn from_pages(pages: &PageSet) -> Vec<Self> {
        pages
            .iter()
            .enumerate()
            .map(|(index, content)| Self::new(index, content))
            .collect()
    }

    /// Zero-based position in reading order.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The container's class name.
    #[must_use]
    pub fn class_name(&self) -> &'static str {
        PAGE_CLASS_NAME
    }

    /// The page markup placed inside the container.
    #[must_use]
    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pages_keeps_order_and_markup() {
        let pages = PageSet::from_markup(["<p>Cover</p>", "<p>Page 1</p>", "<p>Page 2</p>"]);
        let nodes = PageNode::from_pages(&pages);

        assert_eq!(nodes.len(), 3);
        for (expected_index, (node, page)) in nodes.iter().zip(pages.iter()).enumerate() {
            assert_eq!(node.index(), expected_index);
            assert_eq!(node.inner_html(), page.markup());
            assert_eq!(node.class_name(), PAGE_CLASS_NAME);
        }
    }

    #[test]
    fn from_pages_on_empty_set_yields_no_nodes() {
        assert!(PageNode::from_pages(&PageSet::default()).is_empty());
    }
}
