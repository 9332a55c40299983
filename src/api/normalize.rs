//! Default-filling conversions from partial DTOs to total view models.
//!
//! Rules: text defaults to `""`, numbers to `0`, collections to empty,
//! enums to their first declared member, timestamps to the Unix epoch.
//! Conversions are pure and idempotent — normalizing an already-total
//! value changes nothing.

use chrono::{DateTime, Utc};

use crate::models::{ContextView, Document, Page, ProtocolEntry, WorkItem};

use super::dto::{ContextViewDto, DocumentDto, ProtocolEntryDto, WorkItemDto, WorkItemsPageDto};

/// Deterministic default for an absent timestamp.
const EPOCH: DateTime<Utc> = DateTime::UNIX_EPOCH;

impl From<WorkItemDto> for WorkItem {
    fn from(dto: WorkItemDto) -> Self {
        Self {
            id: dto.id.unwrap_or_default(),
            object_type: dto.object_type.unwrap_or_default(),
            object_id: dto.object_id.unwrap_or_default(),
            object_label: dto.object_label.unwrap_or_default(),
            customer_name: dto.customer_name.unwrap_or_default(),
            contract_no: dto.contract_no.unwrap_or_default(),
            claim_no: dto.claim_no.unwrap_or_default(),
            title: dto.title.unwrap_or_default(),
            description: dto.description.unwrap_or_default(),
            status: dto.status.unwrap_or_default(),
            priority: dto.priority.unwrap_or_default(),
            received_at: dto.received_at.unwrap_or(EPOCH),
            due_at: dto.due_at.unwrap_or(EPOCH),
            assigned_to: dto.assigned_to.unwrap_or_default(),
            team: dto.team.unwrap_or_default(),
        }
    }
}

impl From<WorkItemsPageDto> for Page<WorkItem> {
    fn from(dto: WorkItemsPageDto) -> Self {
        Self {
            items: dto
                .items
                .unwrap_or_default()
                .into_iter()
                .map(WorkItem::from)
                .collect(),
            total: dto.total.unwrap_or_default(),
        }
    }
}

impl From<DocumentDto> for Document {
    fn from(dto: DocumentDto) -> Self {
        Self {
            id: dto.id.unwrap_or_default(),
            file_name: dto.file_name.unwrap_or_default(),
            mime_type: dto.mime_type.unwrap_or_default(),
            size_in_bytes: dto.size_in_bytes.unwrap_or_default(),
            index_keywords: dto.index_keywords.unwrap_or_default(),
            uploaded_at: dto.uploaded_at.unwrap_or(EPOCH),
            uploaded_by: dto.uploaded_by.unwrap_or_default(),
        }
    }
}

impl From<ProtocolEntryDto> for ProtocolEntry {
    fn from(dto: ProtocolEntryDto) -> Self {
        Self {
            id: dto.id.unwrap_or_default(),
            timestamp: dto.timestamp.unwrap_or(EPOCH),
            source: dto.source.unwrap_or_default(),
            message: dto.message.unwrap_or_default(),
        }
    }
}

impl From<ContextViewDto> for ContextView {
    fn from(dto: ContextViewDto) -> Self {
        Self {
            object_type: dto.object_type.unwrap_or_default(),
            object_id: dto.object_id.unwrap_or_default(),
            title: dto.title.unwrap_or_default(),
            subtitle: dto.subtitle.unwrap_or_default(),
            tasks: dto
                .tasks
                .unwrap_or_default()
                .into_iter()
                .map(WorkItem::from)
                .collect(),
            documents: dto
                .documents
                .unwrap_or_default()
                .into_iter()
                .map(Document::from)
                .collect(),
            protocol_entries: dto
                .protocol_entries
                .unwrap_or_default()
                .into_iter()
                .map(ProtocolEntry::from)
                .collect(),
        }
    }
}
