//! Cached data access: read accessors and the mutation coordinator.

mod mutations;
mod reads;

use std::sync::Arc;

use crate::api::ApiClient;
use crate::cache::QueryCache;

/// Facade over the REST client and the query cache.
///
/// Cheap to clone; clones share the same cache and connection pool.
#[derive(Clone)]
pub struct WorkItemService {
    api: Arc<ApiClient>,
    cache: QueryCache,
}

impl WorkItemService {
    /// Build a service around a configured API client, with an empty
    /// cache.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api: Arc::new(api),
            cache: QueryCache::new(),
        }
    }

    /// The shared query cache, for staleness peeks and tests.
    #[must_use]
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub(crate) fn api(&self) -> &Arc<ApiClient> {
        &self.api
    }
}
