//! Per-view pagination and filter state machine.
//!
//! A view is *idle* until a filter submission passes composer validation,
//! then *loaded*. Submitting resets to the first page; paging keeps the
//! submitted snapshot. Failed validation leaves the machine exactly where
//! it was, so an illegal combination can never become a dispatched
//! request.

use crate::models::BasketScope;

use super::composer::{
    compose_basket, compose_global_search, BasketFilter, ComposeError, GlobalSearchFilter,
    SearchParams,
};

/// Submitted filter snapshot, decoupled from the live filter form.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Submitted {
    Basket {
        scope: BasketScope,
        filter: BasketFilter,
    },
    Search {
        filter: GlobalSearchFilter,
    },
}

/// State machine for one listing view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorklistState {
    size: u32,
    page: u32,
    submitted: Option<Submitted>,
}

impl WorklistState {
    /// An idle view with the given page size.
    #[must_use]
    pub const fn new(size: u32) -> Self {
        Self {
            size,
            page: 0,
            submitted: None,
        }
    }

    /// Whether no filters have been submitted yet.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        self.submitted.is_none()
    }

    /// Current zero-based page.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Configured page size.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Submit basket filters. On success the snapshot is replaced and the
    /// page resets to 0.
    ///
    /// # Errors
    ///
    /// Returns the composer guard failure; the previous snapshot and page
    /// remain untouched.
    pub fn submit_basket(
        &mut self,
        scope: BasketScope,
        filter: BasketFilter,
    ) -> Result<SearchParams, ComposeError> {
        let params = compose_basket(scope, &filter, 0, self.size)?;
        self.submitted = Some(Submitted::Basket { scope, filter });
        self.page = 0;
        Ok(params)
    }

    /// Submit a global search. On success the snapshot is replaced and
    /// the page resets to 0.
    ///
    /// # Errors
    ///
    /// Returns the composer guard failure; an idle view stays idle and a
    /// loaded view keeps its snapshot.
    pub fn submit_search(
        &mut self,
        filter: GlobalSearchFilter,
    ) -> Result<SearchParams, ComposeError> {
        let params = compose_global_search(&filter, 0, self.size)?;
        self.submitted = Some(Submitted::Search { filter });
        self.page = 0;
        Ok(params)
    }

    /// Move to another page of the submitted snapshot. Returns `None`
    /// while idle — there is nothing to page through.
    pub fn set_page(&mut self, page: u32) -> Option<SearchParams> {
        self.submitted.as_ref()?;
        self.page = page;
        self.params()
    }

    /// Parameters for the submitted snapshot at the current page, or
    /// `None` while idle.
    #[must_use]
    pub fn params(&self) -> Option<SearchParams> {
        let submitted = self.submitted.as_ref()?;
        let composed = match submitted {
            Submitted::Basket { scope, filter } => {
                compose_basket(*scope, filter, self.page, self.size)
            }
            Submitted::Search { filter } => compose_global_search(filter, self.page, self.size),
        };
        // The snapshot passed validation when it was submitted; a guard
        // cannot start failing for the same values.
        composed.ok()
    }
}
