//! Request/response body shapes: camelCase field names, omitted options.

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use workbasket::api::dto::{ContextViewDto, WorkItemDto};
use workbasket::models::{
    UploadDocumentCommand, WorkItem, WorkItemAction, WorkItemActionCommand, WorkItemStatus,
};

#[test]
fn bare_action_command_serializes_only_the_action() {
    let command = WorkItemActionCommand::new(WorkItemAction::Complete);
    let body = serde_json::to_value(&command).expect("serialize");
    assert_eq!(body, json!({ "action": "COMPLETE" }));
}

#[test]
fn forward_command_carries_the_assignee() {
    let command = WorkItemActionCommand {
        comment: Some("bitte übernehmen".into()),
        ..WorkItemActionCommand::forward("Bob")
    };
    let body = serde_json::to_value(&command).expect("serialize");
    assert_eq!(
        body,
        json!({
            "action": "FORWARD",
            "assignee": "Bob",
            "comment": "bitte übernehmen",
        })
    );
}

#[test]
fn reschedule_command_uses_camel_case_follow_up() {
    let command = WorkItemActionCommand::reschedule(
        Utc.with_ymd_and_hms(2024, 6, 20, 9, 0, 0).unwrap(),
    );
    let body = serde_json::to_value(&command).expect("serialize");
    let object = body.as_object().expect("object");
    assert_eq!(object["action"], "RESCHEDULE");
    assert!(object.contains_key("followUpAt"), "camelCase field name");
    assert!(!object.contains_key("assignee"), "absent options are omitted");
    assert!(!object.contains_key("comment"));
}

#[test]
fn upload_command_uses_camel_case_field_names() {
    let command = UploadDocumentCommand {
        file_name: "Schadensmeldung.pdf".into(),
        mime_type: "application/pdf".into(),
        size_in_bytes: 48_221,
        index_keywords: vec!["Unfall".into(), "Erstmeldung".into()],
        uploaded_by: "Clara".into(),
    };
    let body = serde_json::to_value(&command).expect("serialize");
    assert_eq!(
        body,
        json!({
            "fileName": "Schadensmeldung.pdf",
            "mimeType": "application/pdf",
            "sizeInBytes": 48_221,
            "indexKeywords": ["Unfall", "Erstmeldung"],
            "uploadedBy": "Clara",
        })
    );
}

#[test]
fn work_item_dto_parses_a_full_server_payload() {
    let payload = json!({
        "id": "WI-3001",
        "objectType": "CUSTOMER",
        "objectId": "K-1001",
        "objectLabel": "Kunde K-1001",
        "customerName": "Müller GmbH",
        "contractNo": "V-1001",
        "claimNo": "S-2001",
        "title": "Adressänderung prüfen",
        "description": "Neue Korrespondenzadresse validieren.",
        "status": "OPEN",
        "priority": 1,
        "receivedAt": "2024-06-03T08:30:00Z",
        "dueAt": "2024-06-07T16:00:00Z",
        "assignedTo": "Alice",
        "team": "Leistung-Team Nord"
    });

    let dto: WorkItemDto = serde_json::from_value(payload).expect("parse");
    assert_eq!(dto.id.as_deref(), Some("WI-3001"));
    assert_eq!(dto.status, Some(WorkItemStatus::Open));
    assert_eq!(dto.priority, Some(1));
    assert_eq!(
        dto.received_at,
        Some(Utc.with_ymd_and_hms(2024, 6, 3, 8, 30, 0).unwrap())
    );
    assert_eq!(dto.team.as_deref(), Some("Leistung-Team Nord"));
}

#[test]
fn work_item_dto_tolerates_unknown_fields() {
    let payload = json!({
        "id": "WI-1",
        "someFutureField": { "nested": true }
    });
    let dto: WorkItemDto = serde_json::from_value(payload).expect("parse");
    assert_eq!(dto.id.as_deref(), Some("WI-1"));
}

#[test]
fn normalized_work_item_serializes_with_camel_case_keys() {
    let item = WorkItem::from(WorkItemDto {
        id: Some("WI-1".into()),
        ..WorkItemDto::default()
    });
    let body = serde_json::to_value(&item).expect("serialize");
    let object = body.as_object().expect("object");

    for key in [
        "id",
        "objectType",
        "objectId",
        "objectLabel",
        "customerName",
        "contractNo",
        "claimNo",
        "title",
        "description",
        "status",
        "priority",
        "receivedAt",
        "dueAt",
        "assignedTo",
        "team",
    ] {
        assert!(object.contains_key(key), "missing wire key {key}");
    }
    assert_eq!(object.len(), 15, "no extra keys on the wire");
}

#[test]
fn context_dto_accepts_null_collections() {
    let payload = json!({
        "objectType": "CLAIM",
        "objectId": "S-2001",
        "tasks": Value::Null,
        "documents": Value::Null,
        "protocolEntries": Value::Null
    });
    let dto: ContextViewDto = serde_json::from_value(payload).expect("parse");
    assert_eq!(dto.tasks, None);
    assert_eq!(dto.documents, None);
    assert_eq!(dto.protocol_entries, None);
}
