//! Pagination types for list operations.

use serde::{Deserialize, Serialize};

/// A request for one page of users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// The page number (0-indexed).
    pub page: u32,
    /// The number of items per page, between 1 and [`Self::MAX_SIZE`].
    pub size: u32,
}

impl PageRequest {
    /// The default page size.
    pub const DEFAULT_SIZE: u32 = 20;
    /// The maximum allowed page size.
    pub const MAX_SIZE: u32 = 100;

    /// Creates a new page request, clamping `size` into `1..=MAX_SIZE`.
    #[must_use]
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.clamp(1, Self::MAX_SIZE),
        }
    }

    /// Creates a page request for the first page with default size.
    #[must_use]
    pub fn first() -> Self {
        Self::new(0, Self::DEFAULT_SIZE)
    }

    /// Row offset for `OFFSET` clauses.
    #[must_use]
    pub const fn offset(&self) -> i64 {
        self.page as i64 * self.size as i64
    }

    /// Row count for `LIMIT` clauses.
    #[must_use]
    pub const fn limit(&self) -> i64 {
        self.size as i64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// A page of results together with the total row count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub content: Vec<T>,
    /// The current page number (0-indexed).
    pub page: u32,
    /// The requested page size.
    pub size: u32,
    /// The total number of items across all pages.
    pub total_elements: u64,
}

impl<T> Page<T> {
    /// Creates a new page.
    #[must_use]
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page: request.page,
            size: request.size,
            total_elements,
        }
    }

    /// Total number of pages for the current size.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(u64::from(self.size))
    }

    /// Returns true if a later page holds more items.
    #[must_use]
    pub fn has_next(&self) -> bool {
        u64::from(self.page) + 1 < self.total_pages()
    }

    /// Returns true if the page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Maps the page content to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.into_iter()
    }
}
