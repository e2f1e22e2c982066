//! Resolution of a request against a known row count.

use serde::Serialize;

use crate::PageRequest;

/// A pagination request resolved against the total number of rows.
///
/// ## Invariants
/// - `total_pages >= 1`, even when `total == 0`
/// - `1 <= page <= total_pages`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page: u32,
    page_size: u32,
    total: u64,
    total_pages: u32,
}

impl PageRequest {
    /// Clamp the requested page to the pages available for `total` rows.
    #[must_use]
    pub fn resolve(self, total: u64) -> PageWindow {
        let page_size = u64::from(self.page_size());
        let total_pages = total.div_ceil(page_size).max(1);
        let total_pages = u32::try_from(total_pages).unwrap_or(u32::MAX);
        PageWindow {
            page: self.page().min(total_pages),
            page_size: self.page_size(),
            total,
            total_pages,
        }
    }
}

impl PageWindow {
    /// Effective page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Effective page size.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of rows matching the query.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Number of pages, at least one.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Number of rows to skip.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    /// Maximum number of rows on this page.
    #[must_use]
    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }

    /// Whether a later page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether an earlier page exists.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// JSON envelope for a page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Items on this page.
    pub results: Vec<T>,
    /// Effective page number.
    pub page: u32,
    /// Effective page size.
    pub page_size: u32,
    /// Number of matching rows across all pages.
    pub total: u64,
    /// Number of pages, at least one.
    pub total_pages: u32,
    /// Whether a later page exists.
    pub has_next: bool,
    /// Whether an earlier page exists.
    pub has_prev: bool,
}

impl<T> Page<T> {
    /// Wrap `results` with the metadata of `window`.
    #[must_use]
    pub fn new(window: PageWindow, results: Vec<T>) -> Self {
        Self {
            results,
            page: window.page(),
            page_size: window.page_size(),
            total: window.total(),
            total_pages: window.total_pages(),
            has_next: window.has_next(),
            has_prev: window.has_prev(),
        }
    }

    /// Transform every result while keeping the metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            results: self.results.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total: self.total,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_prev: self.has_prev,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(0, 1, 1, 1)]
    #[case(25, 1, 9, 3)]
    #[case(25, 10, 9, 3)]
    #[case(27, 4, 9, 3)]
    #[case(100, 2, 100, 1)]
    fn resolve_clamps_to_available_pages(
        #[case] total: u64,
        #[case] page: u32,
        #[case] page_size: u32,
        #[case] expected_pages: u32,
    ) {
        let window = PageRequest::new(page, page_size).resolve(total);
        assert_eq!(window.total_pages(), expected_pages);
        assert!(window.page() <= expected_pages);
        assert!(window.page() >= 1);
    }

    #[rstest]
    fn page_beyond_end_returns_last_page() {
        let window = PageRequest::new(50, 10).resolve(35);
        assert_eq!(window.page(), 4);
        assert_eq!(window.offset(), 30);
        assert_eq!(window.limit(), 10);
        assert!(!window.has_next());
        assert!(window.has_prev());
    }

    #[rstest]
    fn empty_result_has_single_page() {
        let window = PageRequest::default().resolve(0);
        assert_eq!(window.page(), 1);
        assert_eq!(window.offset(), 0);
        assert!(!window.has_next());
        assert!(!window.has_prev());
    }

    #[rstest]
    fn envelope_serialises_metadata() {
        let window = PageRequest::new(2, 2).resolve(5);
        let page = Page::new(window, vec![3, 4]).map(|n| n * 10);
        let value = serde_json::to_value(&page).expect("serialise page");
        assert_eq!(
            value,
            json!({
                "results": [30, 40],
                "page": 2,
                "page_size": 2,
                "total": 5,
                "total_pages": 3,
                "has_next": true,
                "has_prev": true,
            })
        );
    }
}
