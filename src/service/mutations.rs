//! Mutation coordinator: execute a command, then repair every cache
//! entry the mutation has staled.
//!
//! The affected keys per mutation are an enumerated, closed set — never
//! "refetch everything":
//!
//! | Mutation  | Detail            | List rows         | Context        |
//! |-----------|-------------------|-------------------|----------------|
//! | action    | written back      | patched in place  | marked stale   |
//! | upload    | untouched         | untouched         | marked stale   |

use tracing::info;

use crate::cache::{CacheValue, QueryKey};
use crate::models::{
    Document, DomainObjectType, UploadDocumentCommand, WorkItem, WorkItemActionCommand,
};
use crate::Result;

use super::WorkItemService;

impl WorkItemService {
    /// Apply an action to a work item and propagate the confirmed result
    /// into the cache.
    ///
    /// The server's response is written into the detail cache (no
    /// re-fetch), every cached list row with this id is replaced in
    /// place, and the context view of the item's business object is
    /// marked stale — the server may have appended protocol entries the
    /// client cannot reconstruct.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` before any network I/O when the
    /// command is incomplete for its action. On any failure every cache
    /// entry is left exactly as it was; there is no automatic retry.
    pub async fn apply_work_item_action(
        &self,
        id: &str,
        command: &WorkItemActionCommand,
    ) -> Result<WorkItem> {
        command.validate()?;
        let dto = self.api().apply_work_item_action(id, command).await?;
        let item = WorkItem::from(dto);

        self.cache
            .insert(QueryKey::detail(id), CacheValue::Detail(item.clone()))
            .await;
        self.cache.patch_work_item(id, &item).await;
        self.cache
            .mark_stale(&QueryKey::context(item.object_type, &item.object_id))
            .await;

        info!(%id, action = %command.action, status = %item.status, "work item action applied");
        Ok(item)
    }

    /// Upload a document to a business object.
    ///
    /// Only the object's context view is marked stale: the created row is
    /// partially server-assigned (id, timestamp, index keywords), so the
    /// client does not patch the document list optimistically.
    ///
    /// # Errors
    ///
    /// Returns the transport/HTTP error; every cache entry is left
    /// exactly as it was.
    pub async fn upload_document(
        &self,
        object_type: DomainObjectType,
        object_id: &str,
        command: &UploadDocumentCommand,
    ) -> Result<Document> {
        let dto = self
            .api()
            .upload_document(object_type, object_id, command)
            .await?;
        self.cache
            .mark_stale(&QueryKey::context(object_type, object_id))
            .await;

        info!(object_type = %object_type, %object_id, file = %command.file_name, "document uploaded");
        Ok(dto.into())
    }
}
