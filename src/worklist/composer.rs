//! Builds validated search parameters from scope, filters, and paging.
//!
//! Two separate tracks share one parameter shape: basket listings carry
//! the selected scope to the server, while global search always runs with
//! TEAM-equivalent visibility and demands a minimum query length before
//! any request may be issued.

use std::fmt::{Display, Formatter};

use crate::cache::QueryKey;
use crate::models::{BasketScope, DomainObjectType, WorkItemStatus};
use crate::AppError;

/// Minimum number of characters for a global search query.
pub const MIN_QUERY_LEN: usize = 2;

/// Which listing track a parameter set belongs to. Determines the cache
/// key family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTrack {
    /// A basket listing.
    Basket,
    /// A full-bestand search.
    GlobalSearch,
}

/// Validated parameter bag for one listing request.
///
/// Only the composer functions construct this; a value existing means
/// its guards have passed. Sort order is fixed server-side
/// (most-recently-received first) and therefore not part of the bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Track this parameter set belongs to.
    pub track: ListTrack,
    /// Visibility scope sent to the server. TEAM for global search.
    pub basket: BasketScope,
    /// Free-text filter.
    pub q: Option<String>,
    /// Status filter.
    pub status: Option<WorkItemStatus>,
    /// Colleague name; present iff basket scope is COLLEAGUE.
    pub colleague: Option<String>,
    /// Business-object type filter.
    pub object_type: Option<DomainObjectType>,
    /// Business-object id filter.
    pub object_id: Option<String>,
    /// Zero-based page number.
    pub page: u32,
    /// Requested page size.
    pub size: u32,
}

impl SearchParams {
    /// Cache key identifying this request.
    #[must_use]
    pub fn query_key(&self) -> QueryKey {
        match self.track {
            ListTrack::Basket => QueryKey::Basket {
                scope: self.basket,
                q: self.q.clone(),
                status: self.status,
                colleague: self.colleague.clone(),
                object_type: self.object_type,
                object_id: self.object_id.clone(),
                page: self.page,
                size: self.size,
            },
            ListTrack::GlobalSearch => QueryKey::GlobalSearch {
                q: self.q.clone().unwrap_or_default(),
                status: self.status,
                page: self.page,
                size: self.size,
            },
        }
    }
}

/// Filter form values for a basket listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasketFilter {
    /// Free-text filter.
    pub q: Option<String>,
    /// Status filter.
    pub status: Option<WorkItemStatus>,
    /// Colleague name; required when the scope is COLLEAGUE.
    pub colleague: Option<String>,
    /// Business-object type filter.
    pub object_type: Option<DomainObjectType>,
    /// Business-object id filter.
    pub object_id: Option<String>,
}

/// Filter form values for the global search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalSearchFilter {
    /// Free-text query; must have at least [`MIN_QUERY_LEN`] characters.
    pub q: String,
    /// Status filter.
    pub status: Option<WorkItemStatus>,
}

/// Guard failures that keep a request from being dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeError {
    /// Scope is COLLEAGUE but no colleague is named yet.
    ColleagueRequired,
    /// Global search query is below the minimum length.
    QueryTooShort {
        /// Character count of the trimmed query.
        len: usize,
    },
}

impl Display for ComposeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ColleagueRequired => f.write_str("select a colleague"),
            Self::QueryTooShort { len } => write!(
                f,
                "search text needs at least {MIN_QUERY_LEN} characters, got {len}"
            ),
        }
    }
}

impl std::error::Error for ComposeError {}

impl From<ComposeError> for AppError {
    fn from(err: ComposeError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Compose parameters for a basket listing.
///
/// The colleague name travels only for COLLEAGUE scope so that equal
/// logical requests map to equal cache keys. Blank text filters are
/// dropped.
///
/// # Errors
///
/// Returns `ComposeError::ColleagueRequired` when scope is COLLEAGUE and
/// no non-blank colleague name is set — the unresolved state the UI
/// renders as "select a colleague".
pub fn compose_basket(
    scope: BasketScope,
    filter: &BasketFilter,
    page: u32,
    size: u32,
) -> Result<SearchParams, ComposeError> {
    let colleague = match scope {
        BasketScope::Colleague => {
            let name = filter
                .colleague
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .ok_or(ComposeError::ColleagueRequired)?;
            Some(name.to_owned())
        }
        BasketScope::My | BasketScope::Team => None,
    };
    Ok(SearchParams {
        track: ListTrack::Basket,
        basket: scope,
        q: normalize_text(filter.q.as_deref()),
        status: filter.status,
        colleague,
        object_type: filter.object_type,
        object_id: normalize_text(filter.object_id.as_deref()),
        page,
        size,
    })
}

/// Compose parameters for a full-bestand search.
///
/// The search always runs with TEAM-equivalent visibility, regardless of
/// which basket is currently selected.
///
/// # Errors
///
/// Returns `ComposeError::QueryTooShort` when the trimmed query has fewer
/// than [`MIN_QUERY_LEN`] characters; such a query must never trigger a
/// request.
pub fn compose_global_search(
    filter: &GlobalSearchFilter,
    page: u32,
    size: u32,
) -> Result<SearchParams, ComposeError> {
    let q = filter.q.trim();
    let len = q.chars().count();
    if len < MIN_QUERY_LEN {
        return Err(ComposeError::QueryTooShort { len });
    }
    Ok(SearchParams {
        track: ListTrack::GlobalSearch,
        basket: BasketScope::Team,
        q: Some(q.to_owned()),
        status: filter.status,
        colleague: None,
        object_type: None,
        object_id: None,
        page,
        size,
    })
}

fn normalize_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}
