//! Fixed wire strings for every enum: they round-trip unchanged.

use workbasket::models::{BasketScope, DomainObjectType, WorkItemAction, WorkItemStatus};

#[test]
fn work_item_status_wire_strings() {
    let values = [
        (WorkItemStatus::Open, "\"OPEN\""),
        (WorkItemStatus::InProgress, "\"IN_PROGRESS\""),
        (WorkItemStatus::Blocked, "\"BLOCKED\""),
        (WorkItemStatus::Done, "\"DONE\""),
    ];

    for (variant, expected) in values {
        let json = serde_json::to_string(&variant).expect("serialize");
        assert_eq!(json, expected, "WorkItemStatus::{variant:?}");
        let back: WorkItemStatus = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, variant);
        assert_eq!(format!("\"{variant}\""), expected);
    }
}

#[test]
fn domain_object_type_wire_strings() {
    let values = [
        (DomainObjectType::Customer, "\"CUSTOMER\""),
        (DomainObjectType::Contract, "\"CONTRACT\""),
        (DomainObjectType::Claim, "\"CLAIM\""),
    ];

    for (variant, expected) in values {
        let json = serde_json::to_string(&variant).expect("serialize");
        assert_eq!(json, expected, "DomainObjectType::{variant:?}");
        let back: DomainObjectType = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, variant);
    }
}

#[test]
fn basket_scope_wire_strings() {
    let values = [
        (BasketScope::My, "\"MY\""),
        (BasketScope::Team, "\"TEAM\""),
        (BasketScope::Colleague, "\"COLLEAGUE\""),
    ];

    for (variant, expected) in values {
        let json = serde_json::to_string(&variant).expect("serialize");
        assert_eq!(json, expected, "BasketScope::{variant:?}");
        let back: BasketScope = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, variant);
    }
}

#[test]
fn work_item_action_wire_strings() {
    let values = [
        (WorkItemAction::Start, "\"START\""),
        (WorkItemAction::Forward, "\"FORWARD\""),
        (WorkItemAction::Reschedule, "\"RESCHEDULE\""),
        (WorkItemAction::Complete, "\"COMPLETE\""),
    ];

    for (variant, expected) in values {
        let json = serde_json::to_string(&variant).expect("serialize");
        assert_eq!(json, expected, "WorkItemAction::{variant:?}");
        let back: WorkItemAction = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, variant);
    }
}

#[test]
fn unknown_enum_values_are_rejected_not_defaulted() {
    // Normalization fills absent fields; a present but unknown value is a
    // decode failure, never a silent default.
    assert!(serde_json::from_str::<WorkItemStatus>("\"CANCELLED\"").is_err());
    assert!(serde_json::from_str::<DomainObjectType>("\"PARTNER\"").is_err());
}
