//! Lenient parsing of client supplied pagination parameters.

/// Page size used when the client omits `page_size` or sends garbage.
pub const DEFAULT_PAGE_SIZE: u32 = 9;

/// Upper bound applied to any requested page size.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Normalised pagination request.
///
/// ## Invariants
/// - `page >= 1`
/// - `1 <= page_size <= MAX_PAGE_SIZE`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Build a request from numeric values, clamping them into range.
    ///
    /// A zero page size is treated as "not supplied".
    #[must_use]
    pub fn new(page: u32, page_size: u32) -> Self {
        let page_size = match page_size {
            0 => DEFAULT_PAGE_SIZE,
            size => size.min(MAX_PAGE_SIZE),
        };
        Self {
            page: page.max(1),
            page_size,
        }
    }

    /// Build a request from raw query string values.
    ///
    /// Non-numeric or non-positive values fall back to the defaults
    /// instead of producing an error.
    ///
    /// ```
    /// use pagination::{DEFAULT_PAGE_SIZE, PageRequest};
    ///
    /// let request = PageRequest::from_query(Some("abc"), Some("0"));
    /// assert_eq!(request.page(), 1);
    /// assert_eq!(request.page_size(), DEFAULT_PAGE_SIZE);
    /// ```
    #[must_use]
    pub fn from_query(page: Option<&str>, page_size: Option<&str>) -> Self {
        let page = parse_positive(page).unwrap_or(1);
        let page_size = parse_positive(page_size).unwrap_or(DEFAULT_PAGE_SIZE);
        Self::new(page, page_size)
    }

    /// Requested (1-based) page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Requested page size after clamping.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u32> {
    let value = raw?.trim().parse::<i64>().ok()?;
    if value < 1 {
        return None;
    }
    Some(u32::try_from(value).unwrap_or(u32::MAX))
}
