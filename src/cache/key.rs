//! Deterministic, hierarchical cache keys.
//!
//! A key is stable for identical logical requests and distinct whenever
//! any input differs; equality is structural. The coarse [`KeyFamily`]
//! is the hierarchy prefix: invalidation can target one exact key or a
//! whole family.

use crate::models::{BasketScope, DomainObjectType, WorkItemStatus};

/// Cache key for one logical request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// One page of a basket listing.
    Basket {
        /// Visibility scope of the basket.
        scope: BasketScope,
        /// Free-text filter, if submitted.
        q: Option<String>,
        /// Status filter, if submitted.
        status: Option<WorkItemStatus>,
        /// Colleague name; present iff scope is COLLEAGUE.
        colleague: Option<String>,
        /// Business-object type filter, if submitted.
        object_type: Option<DomainObjectType>,
        /// Business-object id filter, if submitted.
        object_id: Option<String>,
        /// Zero-based page number.
        page: u32,
        /// Requested page size.
        size: u32,
    },
    /// One page of a full-bestand search.
    GlobalSearch {
        /// Free-text query, at least two characters.
        q: String,
        /// Status filter, if submitted.
        status: Option<WorkItemStatus>,
        /// Zero-based page number.
        page: u32,
        /// Requested page size.
        size: u32,
    },
    /// Detail view of one work item.
    Detail {
        /// Work item identifier.
        id: String,
    },
    /// Aggregate view of one business object.
    Context {
        /// Kind of business object.
        object_type: DomainObjectType,
        /// Business object identifier.
        object_id: String,
    },
}

/// Coarse key prefix used for family-wide invalidation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyFamily {
    /// All basket listing pages, across scopes and filters.
    BasketList,
    /// All global search pages.
    GlobalSearchList,
    /// All work item detail entries.
    Detail,
    /// All context view entries.
    Context,
}

impl QueryKey {
    /// Key for the detail view of one work item.
    #[must_use]
    pub fn detail(id: &str) -> Self {
        Self::Detail { id: id.to_owned() }
    }

    /// Key for the aggregate view of one business object.
    #[must_use]
    pub fn context(object_type: DomainObjectType, object_id: &str) -> Self {
        Self::Context {
            object_type,
            object_id: object_id.to_owned(),
        }
    }

    /// The family this key belongs to.
    #[must_use]
    pub const fn family(&self) -> KeyFamily {
        match self {
            Self::Basket { .. } => KeyFamily::BasketList,
            Self::GlobalSearch { .. } => KeyFamily::GlobalSearchList,
            Self::Detail { .. } => KeyFamily::Detail,
            Self::Context { .. } => KeyFamily::Context,
        }
    }

    /// Whether this key is one of the two list families.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(
            self.family(),
            KeyFamily::BasketList | KeyFamily::GlobalSearchList
        )
    }
}
