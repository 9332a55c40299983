//! Read accessors: fetch, normalize, cache under the request's key.

use std::sync::Arc;

use crate::cache::{CacheValue, QueryKey};
use crate::models::{ContextView, DomainObjectType, Page, WorkItem};
use crate::worklist::SearchParams;
use crate::Result;

use super::WorkItemService;

impl WorkItemService {
    /// Fetch one listing page (basket or global search) for composed
    /// parameters, served from cache when fresh.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the cache keeps whatever it had.
    pub async fn search_work_items(&self, params: &SearchParams) -> Result<Page<WorkItem>> {
        let key = params.query_key();
        let api = Arc::clone(self.api());
        let request = params.clone();
        self.cache
            .get_or_fetch(key, move || async move {
                let dto = api.search_work_items(&request).await?;
                Ok(CacheValue::Page(dto.into()))
            })
            .await?
            .into_page()
    }

    /// Fetch one work item by id, served from cache when fresh.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` for an unknown id, otherwise the
    /// fetch error.
    pub async fn get_work_item(&self, id: &str) -> Result<WorkItem> {
        let key = QueryKey::detail(id);
        let api = Arc::clone(self.api());
        let item_id = id.to_owned();
        self.cache
            .get_or_fetch(key, move || async move {
                let dto = api.get_work_item(&item_id).await?;
                Ok(CacheValue::Detail(dto.into()))
            })
            .await?
            .into_detail()
    }

    /// Fetch the aggregate view of one business object, served from
    /// cache when fresh.
    ///
    /// # Errors
    ///
    /// Returns the fetch error.
    pub async fn get_context_view(
        &self,
        object_type: DomainObjectType,
        object_id: &str,
    ) -> Result<ContextView> {
        let key = QueryKey::context(object_type, object_id);
        let api = Arc::clone(self.api());
        let id = object_id.to_owned();
        self.cache
            .get_or_fetch(key, move || async move {
                let dto = api.get_context_view(object_type, &id).await?;
                Ok(CacheValue::Context(dto.into()))
            })
            .await?
            .into_context()
    }
}
