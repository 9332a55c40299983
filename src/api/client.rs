//! REST client for the work-item API.

use std::time::Duration;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ApiConfig;
use crate::models::{DomainObjectType, UploadDocumentCommand, WorkItemActionCommand};
use crate::worklist::SearchParams;
use crate::{AppError, Result};

use super::dto::{ContextViewDto, DocumentDto, WorkItemDto, WorkItemsPageDto};

/// Fixed sort for basket and search listings: most recently received
/// first, applied server-side. There is no client override.
pub const SORT_RECEIVED_AT_DESC: &str = "receivedAt,desc";

/// Thin typed wrapper around the five REST operations of the work-item
/// API. Stateless apart from the connection pool; caching happens a layer
/// above, in `crate::service`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|err| AppError::Config(format!("failed to build http client: {err}")))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// `GET /work-items` — search work items with paging and filtering.
    ///
    /// # Errors
    ///
    /// Returns a transport, HTTP, or decode error; never touches any cache.
    pub async fn search_work_items(&self, params: &SearchParams) -> Result<WorkItemsPageDto> {
        let url = format!("{}/work-items", self.base_url);
        let mut query: Vec<(&str, String)> = vec![
            ("page", params.page.to_string()),
            ("size", params.size.to_string()),
            ("sort", SORT_RECEIVED_AT_DESC.to_owned()),
            ("basket", params.basket.as_str().to_owned()),
        ];
        if let Some(ref q) = params.q {
            query.push(("q", q.clone()));
        }
        if let Some(status) = params.status {
            query.push(("status", status.as_str().to_owned()));
        }
        if let Some(ref colleague) = params.colleague {
            query.push(("colleague", colleague.clone()));
        }
        if let Some(object_type) = params.object_type {
            query.push(("objectType", object_type.as_str().to_owned()));
        }
        if let Some(ref object_id) = params.object_id {
            query.push(("objectId", object_id.clone()));
        }
        debug!(basket = %params.basket, page = params.page, size = params.size, "search work items");
        let response = self.http.get(&url).query(&query).send().await?;
        Self::decode(response).await
    }

    /// `GET /work-items/{id}` — fetch one work item.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` for an unknown id, otherwise a
    /// transport, HTTP, or decode error.
    pub async fn get_work_item(&self, id: &str) -> Result<WorkItemDto> {
        let url = format!("{}/work-items/{id}", self.base_url);
        debug!(%id, "get work item");
        let response = self.http.get(&url).send().await?;
        Self::decode(response).await
    }

    /// `GET /work-items/context` — fetch the aggregate view of one
    /// business object.
    ///
    /// # Errors
    ///
    /// Returns a transport, HTTP, or decode error.
    pub async fn get_context_view(
        &self,
        object_type: DomainObjectType,
        object_id: &str,
    ) -> Result<ContextViewDto> {
        let url = format!("{}/work-items/context", self.base_url);
        let query = [
            ("objectType", object_type.as_str()),
            ("objectId", object_id),
        ];
        debug!(object_type = %object_type, %object_id, "get context view");
        let response = self.http.get(&url).query(&query).send().await?;
        Self::decode(response).await
    }

    /// `POST /work-items/{id}/actions` — apply an action and receive the
    /// updated work item.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` for an unknown id, otherwise a
    /// transport, HTTP, or decode error.
    pub async fn apply_work_item_action(
        &self,
        id: &str,
        command: &WorkItemActionCommand,
    ) -> Result<WorkItemDto> {
        let url = format!("{}/work-items/{id}/actions", self.base_url);
        debug!(%id, action = %command.action, "apply work item action");
        let response = self.http.post(&url).json(command).send().await?;
        Self::decode(response).await
    }

    /// `POST /work-items/context/{objectType}/{objectId}/documents` —
    /// upload a document and receive the created record.
    ///
    /// # Errors
    ///
    /// Returns a transport, HTTP, or decode error.
    pub async fn upload_document(
        &self,
        object_type: DomainObjectType,
        object_id: &str,
        command: &UploadDocumentCommand,
    ) -> Result<DocumentDto> {
        let url = format!(
            "{}/work-items/context/{}/{object_id}/documents",
            self.base_url,
            object_type.as_str()
        );
        debug!(object_type = %object_type, %object_id, file = %command.file_name, "upload document");
        let response = self.http.post(&url).json(command).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::NotFound(body.trim().to_owned()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Http {
                status: status.as_u16(),
                message: body.trim().to_owned(),
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Decode(err.to_string()))
    }
}
