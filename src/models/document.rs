//! Document view model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Evidence attached to a business object.
///
/// Created by an upload command and immutable afterwards — no edit or
/// delete operation exists in this layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unique document identifier, assigned by the server.
    pub id: String,
    /// Original file name.
    pub file_name: String,
    /// MIME type as reported on upload.
    pub mime_type: String,
    /// File size in bytes.
    pub size_in_bytes: u64,
    /// Index keywords; insertion order is the index order.
    pub index_keywords: Vec<String>,
    /// Upload timestamp, assigned by the server.
    pub uploaded_at: DateTime<Utc>,
    /// User who uploaded the document.
    pub uploaded_by: String,
}
