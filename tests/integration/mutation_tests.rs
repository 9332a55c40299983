//! Mutation fan-out: write-back, row patching, context invalidation.

use std::sync::atomic::Ordering;

use workbasket::models::{
    BasketScope, DomainObjectType, WorkItemAction, WorkItemActionCommand, WorkItemStatus,
};
use workbasket::worklist::{compose_basket, BasketFilter};
use workbasket::AppError;

use super::test_helpers::spawn_stub;

#[tokio::test]
async fn complete_updates_detail_and_list_without_refetching() {
    let server = spawn_stub().await;
    let service = server.service();
    let params = compose_basket(BasketScope::My, &BasketFilter::default(), 0, 10)
        .expect("compose");

    // Prime list and detail caches.
    let before = service.search_work_items(&params).await.expect("list");
    let open = before
        .items
        .iter()
        .find(|item| item.id == "WI-3001")
        .expect("seeded item");
    assert_eq!(open.status, WorkItemStatus::Open);
    service.get_work_item("WI-3001").await.expect("detail");

    let updated = service
        .apply_work_item_action(
            "WI-3001",
            &WorkItemActionCommand::new(WorkItemAction::Complete),
        )
        .await
        .expect("complete");
    assert_eq!(updated.status, WorkItemStatus::Done);

    // Detail comes from the confirmed write-back, not a re-fetch.
    let detail = service.get_work_item("WI-3001").await.expect("detail");
    assert_eq!(detail.status, WorkItemStatus::Done);
    assert_eq!(server.state.detail_calls.load(Ordering::SeqCst), 1);

    // The cached list row was patched in place; no second list request.
    let after = service.search_work_items(&params).await.expect("list");
    assert_eq!(server.state.search_calls.load(Ordering::SeqCst), 1);
    let patched = after
        .items
        .iter()
        .find(|item| item.id == "WI-3001")
        .expect("row kept");
    assert_eq!(patched.status, WorkItemStatus::Done);

    // Every other row is untouched.
    for (lhs, rhs) in before.items.iter().zip(after.items.iter()) {
        if lhs.id != "WI-3001" {
            assert_eq!(lhs, rhs);
        }
    }
    assert_eq!(before.total, after.total);
}

#[tokio::test]
async fn action_marks_the_context_view_stale() {
    let server = spawn_stub().await;
    let service = server.service();

    let before = service
        .get_context_view(DomainObjectType::Customer, "K-1001")
        .await
        .expect("context");
    assert_eq!(server.state.context_calls.load(Ordering::SeqCst), 1);

    service
        .apply_work_item_action("WI-3001", &WorkItemActionCommand::new(WorkItemAction::Start))
        .await
        .expect("start");

    // The aggregate must be re-derived: the server appended a protocol
    // entry the client cannot reconstruct.
    let after = service
        .get_context_view(DomainObjectType::Customer, "K-1001")
        .await
        .expect("context refetch");
    assert_eq!(server.state.context_calls.load(Ordering::SeqCst), 2);
    assert_eq!(
        after.protocol_entries.len(),
        before.protocol_entries.len() + 1
    );
    assert_eq!(after.tasks[0].status, WorkItemStatus::InProgress);
}

#[tokio::test]
async fn forward_reassigns_and_patches_rows() {
    let server = spawn_stub().await;
    let service = server.service();
    let params = compose_basket(BasketScope::Team, &BasketFilter::default(), 0, 10)
        .expect("compose");
    service.search_work_items(&params).await.expect("list");

    let updated = service
        .apply_work_item_action("WI-3003", &WorkItemActionCommand::forward("Daniel"))
        .await
        .expect("forward");
    assert_eq!(updated.assigned_to, "Daniel");

    let page = service.search_work_items(&params).await.expect("list");
    assert_eq!(server.state.search_calls.load(Ordering::SeqCst), 1);
    let row = page
        .items
        .iter()
        .find(|item| item.id == "WI-3003")
        .expect("row");
    assert_eq!(row.assigned_to, "Daniel");
}

#[tokio::test]
async fn incomplete_forward_never_reaches_the_network() {
    let server = spawn_stub().await;
    let service = server.service();

    let result = service
        .apply_work_item_action(
            "WI-3001",
            &WorkItemActionCommand::new(WorkItemAction::Forward),
        )
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(server.state.action_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn failed_action_leaves_every_cache_untouched() {
    let server = spawn_stub().await;
    let service = server.service();
    let params = compose_basket(BasketScope::My, &BasketFilter::default(), 0, 10)
        .expect("compose");

    service.search_work_items(&params).await.expect("list");
    service.get_work_item("WI-3001").await.expect("detail");

    let result = service
        .apply_work_item_action(
            "WI-9999",
            &WorkItemActionCommand::new(WorkItemAction::Complete),
        )
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    // Both reads are still served from the cache, unchanged.
    let detail = service.get_work_item("WI-3001").await.expect("detail");
    assert_eq!(detail.status, WorkItemStatus::Open);
    service.search_work_items(&params).await.expect("list");
    assert_eq!(server.state.detail_calls.load(Ordering::SeqCst), 1);
    assert_eq!(server.state.search_calls.load(Ordering::SeqCst), 1);
}
