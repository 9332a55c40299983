//! Partial wire DTOs.
//!
//! Every field is optional — the server may omit any of them. Field names
//! follow the JSON contract (camelCase). Consumers never touch these
//! types directly; they pass through [`crate::api::normalize`] first.
//!
//! Field meanings are documented once, on the view models.
#![allow(missing_docs)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{DomainObjectType, WorkItemStatus};

/// Work item as found on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkItemDto {
    pub id: Option<String>,
    pub object_type: Option<DomainObjectType>,
    pub object_id: Option<String>,
    pub object_label: Option<String>,
    pub customer_name: Option<String>,
    pub contract_no: Option<String>,
    pub claim_no: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<WorkItemStatus>,
    pub priority: Option<i64>,
    pub received_at: Option<DateTime<Utc>>,
    pub due_at: Option<DateTime<Utc>>,
    pub assigned_to: Option<String>,
    pub team: Option<String>,
}

/// One page of work items as found on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkItemsPageDto {
    pub items: Option<Vec<WorkItemDto>>,
    pub total: Option<u64>,
}

/// Document as found on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentDto {
    pub id: Option<String>,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub size_in_bytes: Option<u64>,
    pub index_keywords: Option<Vec<String>>,
    pub uploaded_at: Option<DateTime<Utc>>,
    pub uploaded_by: Option<String>,
}

/// Protocol entry as found on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProtocolEntryDto {
    pub id: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub source: Option<String>,
    pub message: Option<String>,
}

/// Context view aggregate as found on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContextViewDto {
    pub object_type: Option<DomainObjectType>,
    pub object_id: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub tasks: Option<Vec<WorkItemDto>>,
    pub documents: Option<Vec<DocumentDto>>,
    pub protocol_entries: Option<Vec<ProtocolEntryDto>>,
}
