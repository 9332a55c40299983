//! Server-paginated result page.

use serde::{Deserialize, Serialize};

/// One page of a server-side paginated listing.
///
/// `items` keeps the server sort order — this layer never re-sorts.
/// `items.len()` never exceeds the requested page size; `total` counts
/// matches across all pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    /// Items of the current page, server order.
    pub items: Vec<T>,
    /// Total number of matches across all pages.
    pub total: u64,
}

impl<T> Page<T> {
    /// A page with no items and a total of zero.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}
