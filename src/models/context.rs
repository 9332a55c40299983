//! Context view aggregate and protocol entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::document::Document;
use super::work_item::{DomainObjectType, WorkItem};

/// One append-only log line on a business object. Read-only here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolEntry {
    /// Unique entry identifier.
    pub id: String,
    /// When the entry was written.
    pub timestamp: DateTime<Utc>,
    /// Producing subsystem, e.g. a rules engine or the clerk UI.
    pub source: String,
    /// Log message.
    pub message: String,
}

/// Aggregated view of one business object: its tasks, documents, and
/// protocol history as of fetch time.
///
/// Not independently persisted — a read projection that is invalidated
/// whenever a task action or document upload touches the object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContextView {
    /// Kind of business object.
    pub object_type: DomainObjectType,
    /// Identifier of the business object.
    pub object_id: String,
    /// Headline, e.g. the customer or contract label.
    pub title: String,
    /// Secondary line under the headline.
    pub subtitle: String,
    /// Work items attached to the object, server order.
    pub tasks: Vec<WorkItem>,
    /// Documents attached to the object, server order.
    pub documents: Vec<Document>,
    /// Protocol history, server order.
    pub protocol_entries: Vec<ProtocolEntry>,
}
