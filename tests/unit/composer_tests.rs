//! Composer guards and parameter construction.

use workbasket::models::{BasketScope, WorkItemStatus};
use workbasket::worklist::{
    compose_basket, compose_global_search, BasketFilter, ComposeError, GlobalSearchFilter,
    ListTrack, MIN_QUERY_LEN,
};
use workbasket::AppError;

#[test]
fn colleague_scope_without_name_is_rejected() {
    let result = compose_basket(BasketScope::Colleague, &BasketFilter::default(), 0, 10);
    assert_eq!(result.unwrap_err(), ComposeError::ColleagueRequired);

    let blank = BasketFilter {
        colleague: Some("   ".into()),
        ..BasketFilter::default()
    };
    let result = compose_basket(BasketScope::Colleague, &blank, 0, 10);
    assert_eq!(result.unwrap_err(), ComposeError::ColleagueRequired);
}

#[test]
fn colleague_scope_with_name_composes() {
    let filter = BasketFilter {
        colleague: Some(" Clara ".into()),
        ..BasketFilter::default()
    };
    let params = compose_basket(BasketScope::Colleague, &filter, 0, 10).expect("compose");
    assert_eq!(params.colleague.as_deref(), Some("Clara"));
    assert_eq!(params.basket, BasketScope::Colleague);
    assert_eq!(params.track, ListTrack::Basket);
}

#[test]
fn colleague_name_is_dropped_outside_colleague_scope() {
    let filter = BasketFilter {
        colleague: Some("Clara".into()),
        ..BasketFilter::default()
    };
    let params = compose_basket(BasketScope::My, &filter, 0, 10).expect("compose");
    assert_eq!(params.colleague, None);
}

#[test]
fn blank_text_filters_are_dropped() {
    let filter = BasketFilter {
        q: Some("  ".into()),
        object_id: Some("".into()),
        ..BasketFilter::default()
    };
    let params = compose_basket(BasketScope::Team, &filter, 0, 10).expect("compose");
    assert_eq!(params.q, None);
    assert_eq!(params.object_id, None);
}

#[test]
fn global_search_rejects_short_queries() {
    for q in ["", "a", " a "] {
        let filter = GlobalSearchFilter {
            q: q.into(),
            status: None,
        };
        let result = compose_global_search(&filter, 0, 10);
        assert!(
            matches!(result, Err(ComposeError::QueryTooShort { len }) if len < MIN_QUERY_LEN),
            "query '{q}' must be rejected"
        );
    }
}

#[test]
fn global_search_accepts_minimum_length_query() {
    let filter = GlobalSearchFilter {
        q: " ab ".into(),
        status: Some(WorkItemStatus::Open),
    };
    let params = compose_global_search(&filter, 2, 25).expect("compose");
    assert_eq!(params.q.as_deref(), Some("ab"));
    assert_eq!(params.status, Some(WorkItemStatus::Open));
    assert_eq!(params.page, 2);
    assert_eq!(params.size, 25);
    assert_eq!(params.track, ListTrack::GlobalSearch);
}

#[test]
fn global_search_always_runs_team_wide() {
    // There is no scope input at all; the composed visibility is TEAM.
    let filter = GlobalSearchFilter {
        q: "Unfall".into(),
        status: None,
    };
    let params = compose_global_search(&filter, 0, 10).expect("compose");
    assert_eq!(params.basket, BasketScope::Team);
    assert_eq!(params.colleague, None);
}

#[test]
fn compose_errors_convert_to_validation_errors() {
    let err: AppError = ComposeError::ColleagueRequired.into();
    assert_eq!(err, AppError::Validation("select a colleague".into()));
}
