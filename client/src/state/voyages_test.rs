use super::*;
use crate::net::api::{CREATE_FAILED_MESSAGE, DELETE_FAILED_MESSAGE};
use crate::net::types::Vessel;
use crate::state::toasts::ToastVariant;

fn voyage(id: &str) -> Voyage {
    Voyage {
        id: id.to_owned(),
        scheduled_departure: "2024-01-01T08:00:00Z".to_owned(),
        scheduled_arrival: "2024-01-01T10:00:00Z".to_owned(),
        port_of_loading: "Rotterdam".to_owned(),
        port_of_discharge: "Hamburg".to_owned(),
        vessel: Vessel { id: "ves-1".to_owned(), name: "MV Test".to_owned() },
        unit_types: Vec::new(),
    }
}

fn ready_state() -> VoyagesState {
    let mut state = VoyagesState::default();
    state.voyages.begin_fetch();
    state.voyages.resolve(vec![voyage("v1"), voyage("v2")]);
    state.unit_types.begin_fetch();
    state.unit_types.resolve(Vec::new());
    state
}

// =============================================================
// Query lifecycle
// =============================================================

#[test]
fn fresh_query_needs_fetch_and_is_loading() {
    let query = Query::<Vec<Voyage>>::default();
    assert!(query.needs_fetch());
    assert!(query.is_loading());
    assert_eq!(query.version, 0);
}

#[test]
fn in_flight_query_does_not_need_another_fetch() {
    let mut query = Query::<Vec<Voyage>>::default();
    query.begin_fetch();
    assert!(!query.needs_fetch());
    query.invalidate();
    assert!(!query.needs_fetch());
    query.resolve(Vec::new());
    assert!(query.needs_fetch());
}

#[test]
fn resolve_bumps_version_and_clears_error() {
    let mut query = Query::<Vec<Voyage>>::default();
    query.begin_fetch();
    query.fail("offline");
    query.begin_fetch();
    query.resolve(vec![voyage("v1")]);
    assert_eq!(query.version, 1);
    assert_eq!(query.error, None);
    assert!(!query.fetching);
}

// =============================================================
// Page status
// =============================================================

#[test]
fn page_is_loading_until_both_queries_resolve() {
    let mut state = VoyagesState::default();
    assert_eq!(state.page_status(), PageStatus::Loading);
    state.voyages.resolve(Vec::new());
    assert_eq!(state.page_status(), PageStatus::Loading);
    state.unit_types.resolve(Vec::new());
    assert_eq!(state.page_status(), PageStatus::Ready);
}

#[test]
fn page_fails_when_either_query_fails() {
    let mut state = VoyagesState::default();
    state.voyages.resolve(Vec::new());
    state.unit_types.fail("unit types unavailable");
    assert_eq!(state.page_status(), PageStatus::Failed("unit types unavailable".to_owned()));
}

#[test]
fn refetch_in_flight_keeps_page_ready() {
    let mut state = ready_state();
    state.voyages.invalidate();
    state.voyages.begin_fetch();
    assert_eq!(state.page_status(), PageStatus::Ready);
    assert_eq!(state.voyages().len(), 2);
}

// =============================================================
// Create mutation
// =============================================================

#[test]
fn successful_create_invalidates_and_refetch_changes_version() {
    let mut state = ready_state();
    let before = state.voyages.version;
    assert!(state.begin_create());
    assert!(state.create_pending);

    let notice = state.settle_create(&Ok(()));
    assert!(!state.create_pending);
    assert_eq!(notice, Notice::success(CREATED_MESSAGE));
    assert!(state.voyages.needs_fetch());

    state.voyages.begin_fetch();
    state.voyages.resolve(vec![voyage("v1"), voyage("v2"), voyage("v3")]);
    assert!(state.voyages.version > before);
    assert_eq!(state.voyages().len(), 3);
}

#[test]
fn failed_create_leaves_list_untouched() {
    let mut state = ready_state();
    state.begin_create();
    let err = ApiError::Status { status: 400, message: "Vessel not found".to_owned() };
    let notice = state.settle_create(&Err(err));
    assert_eq!(notice.title, "Error");
    assert_eq!(notice.description, "Vessel not found");
    assert_eq!(notice.variant, ToastVariant::Destructive);
    assert!(!state.voyages.needs_fetch());
    assert_eq!(state.voyages().len(), 2);
}

#[test]
fn failed_create_without_message_uses_fallback() {
    let mut state = ready_state();
    let err = ApiError::Status { status: 500, message: CREATE_FAILED_MESSAGE.to_owned() };
    let notice = state.settle_create(&Err(err));
    assert_eq!(notice.description, CREATE_FAILED_MESSAGE);
}

// =============================================================
// Delete mutation
// =============================================================

#[test]
fn pending_delete_disables_only_its_row() {
    let mut state = ready_state();
    assert!(state.begin_delete("v1"));
    assert!(state.is_delete_pending("v1"));
    assert!(!state.is_delete_pending("v2"));
}

#[test]
fn duplicate_delete_is_rejected_while_in_flight() {
    let mut state = ready_state();
    assert!(state.begin_delete("v1"));
    assert!(!state.begin_delete("v1"));
    assert!(state.begin_delete("v2"));
}

#[test]
fn successful_delete_clears_pending_and_invalidates() {
    let mut state = ready_state();
    state.begin_delete("v1");
    let notice = state.settle_delete("v1", &Ok(()));
    assert!(!state.is_delete_pending("v1"));
    assert!(state.voyages.needs_fetch());
    assert_eq!(notice, Notice::success(DELETED_MESSAGE));
}

#[test]
fn failed_delete_still_invalidates_and_reports_error() {
    let mut state = ready_state();
    state.begin_delete("v1");
    let err = ApiError::Status { status: 404, message: DELETE_FAILED_MESSAGE.to_owned() };
    let notice = state.settle_delete("v1", &Err(err));
    assert!(!state.is_delete_pending("v1"));
    assert!(state.voyages.needs_fetch());
    assert_eq!(notice, Notice::error(DELETE_FAILED_MESSAGE));
    assert_eq!(state.voyages().len(), 2);
}

#[test]
fn second_create_is_rejected_while_first_is_in_flight() {
    let mut state = ready_state();
    assert!(state.begin_create());
    assert!(!state.begin_create());
    state.settle_create(&Err(ApiError::Network("offline".to_owned())));
    assert!(!state.create_pending);
    assert!(state.begin_create());
}
