//! Action command validation.

use chrono::{TimeZone, Utc};
use workbasket::models::{CommandError, WorkItemAction, WorkItemActionCommand};
use workbasket::AppError;

#[test]
fn forward_requires_an_assignee() {
    let bare = WorkItemActionCommand::new(WorkItemAction::Forward);
    assert_eq!(bare.validate(), Err(CommandError::MissingAssignee));

    let blank = WorkItemActionCommand {
        assignee: Some("  ".into()),
        ..WorkItemActionCommand::new(WorkItemAction::Forward)
    };
    assert_eq!(blank.validate(), Err(CommandError::MissingAssignee));

    let named = WorkItemActionCommand::forward("Bob");
    assert_eq!(named.validate(), Ok(()));
}

#[test]
fn reschedule_requires_a_follow_up() {
    let bare = WorkItemActionCommand::new(WorkItemAction::Reschedule);
    assert_eq!(bare.validate(), Err(CommandError::MissingFollowUp));

    let dated = WorkItemActionCommand::reschedule(
        Utc.with_ymd_and_hms(2024, 6, 20, 9, 0, 0).unwrap(),
    );
    assert_eq!(dated.validate(), Ok(()));
}

#[test]
fn start_and_complete_ignore_optional_fields() {
    for action in [WorkItemAction::Start, WorkItemAction::Complete] {
        let bare = WorkItemActionCommand::new(action);
        assert_eq!(bare.validate(), Ok(()));

        // Extra fields are tolerated, not required.
        let decorated = WorkItemActionCommand {
            assignee: Some("Bob".into()),
            comment: Some("done".into()),
            ..WorkItemActionCommand::new(action)
        };
        assert_eq!(decorated.validate(), Ok(()));
    }
}

#[test]
fn command_errors_convert_to_validation_errors() {
    let err: AppError = CommandError::MissingAssignee.into();
    assert!(matches!(err, AppError::Validation(msg) if msg.contains("assignee")));
}
