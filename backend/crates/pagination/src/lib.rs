//! Page-number pagination primitives.
//!
//! List endpoints accept loosely typed `page` and `page_size` query
//! parameters. [`PageRequest`] normalises them without ever failing, and
//! [`PageWindow`] resolves the request against the number of matching
//! rows so the caller can slice its result set. [`Page`] is the JSON
//! envelope returned to clients.
//!
//! ```
//! use pagination::{Page, PageRequest};
//!
//! let request = PageRequest::from_query(Some("7"), Some("500"));
//! let window = request.resolve(250);
//! assert_eq!(window.page(), 3);
//! assert_eq!(window.page_size(), 100);
//! assert_eq!(window.offset(), 200);
//!
//! let page = Page::new(window, vec!["last"; 50]);
//! assert!(!page.has_next);
//! ```

mod request;
mod window;

pub use request::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest};
pub use window::{Page, PageWindow};
