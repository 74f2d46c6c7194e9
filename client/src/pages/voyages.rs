//! Voyage list page with create and delete actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It loads voyages and unit types concurrently,
//! blocks on both before rendering the table, and runs the create/delete
//! mutations. A settled mutation invalidates the voyage query; an effect
//! watching for stale queries issues the refetch.

#[cfg(test)]
#[path = "voyages_test.rs"]
mod voyages_test;

use leptos::prelude::*;

use crate::components::create_voyage_sheet::CreateVoyageSheet;
use crate::components::unit_types_popover::UnitTypesPopover;
use crate::net::types::{Voyage, VoyageDraft};
use crate::state::toasts::Toasts;
use crate::state::voyages::{PageStatus, VoyagesState};
use crate::util::datetime::format_timestamp_cell;
use crate::util::validation::FormVariant;

/// Column headings, left to right. The last column holds the delete trigger.
pub const COLUMNS: [&str; 7] =
    ["Departure", "Arrival", "Port of Loading", "Port of Discharge", "Vessel", "Unit Types", "\u{a0}"];

/// Form variant rendered by the page.
pub const PAGE_FORM_VARIANT: FormVariant = FormVariant::WithUnitTypes;

#[component]
pub fn VoyagesPage() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let state = RwSignal::new(VoyagesState::default());

    Effect::new(move || {
        if state.with(|s| s.voyages.needs_fetch()) {
            load_voyages(state);
        }
    });
    Effect::new(move || {
        if state.with(|s| s.unit_types.needs_fetch()) {
            load_unit_types(state);
        }
    });

    let on_create = Callback::new(move |draft: VoyageDraft| create_voyage(state, toasts, draft));
    let on_delete = Callback::new(move |voyage_id: String| delete_voyage(state, toasts, voyage_id));

    let status = Memo::new(move |_| state.with(VoyagesState::page_status));
    let unit_types = Signal::derive(move || state.with(|s| s.unit_types().to_vec()));
    let create_pending = Signal::derive(move || state.with(|s| s.create_pending));

    view! {
        <div class="voyages-page">
            {move || match status.get() {
                PageStatus::Loading => {
                    view! { <p class="voyages-page__status">"Loading data..."</p> }.into_any()
                }
                PageStatus::Failed(_) => {
                    view! { <p class="voyages-page__status voyages-page__status--error">"Failed to load data."</p> }
                        .into_any()
                }
                PageStatus::Ready => {
                    view! {
                        <header class="voyages-page__header toolbar">
                            <span class="toolbar__title">"Voyages"</span>
                            <span class="toolbar__spacer"></span>
                            <CreateVoyageSheet
                                unit_types=unit_types
                                on_submit=on_create
                                pending=create_pending
                                toasts=toasts
                                variant=PAGE_FORM_VARIANT
                            />
                        </header>
                        <table class="voyage-table">
                            <thead>
                                <tr>
                                    {COLUMNS.iter().map(|c| view! { <th>{*c}</th> }).collect::<Vec<_>>()}
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || state.with(|s| s.voyages().to_vec())
                                    key=|voyage| voyage.id.clone()
                                    children=move |voyage: Voyage| {
                                        view! { <VoyageRow voyage=voyage state=state on_delete=on_delete/> }
                                    }
                                />
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

/// One table row; the delete trigger is disabled while this voyage's delete
/// is in flight.
#[component]
fn VoyageRow(voyage: Voyage, state: RwSignal<VoyagesState>, on_delete: Callback<String>) -> impl IntoView {
    let delete_id = voyage.id.clone();
    let pending_id = voyage.id.clone();
    let delete_pending = move || state.with(|s| s.is_delete_pending(&pending_id));

    view! {
        <tr class="voyage-table__row">
            <td>{format_timestamp_cell(&voyage.scheduled_departure)}</td>
            <td>{format_timestamp_cell(&voyage.scheduled_arrival)}</td>
            <td>{voyage.port_of_loading}</td>
            <td>{voyage.port_of_discharge}</td>
            <td>{voyage.vessel.name}</td>
            <td>
                <UnitTypesPopover unit_types=voyage.unit_types/>
            </td>
            <td>
                <button
                    class="btn btn--outline voyage-table__delete"
                    disabled=delete_pending
                    on:click=move |_| on_delete.run(delete_id.clone())
                    title="Delete voyage"
                    aria-label="Delete voyage"
                >
                    "X"
                </button>
            </td>
        </tr>
    }
}

fn load_voyages(state: RwSignal<VoyagesState>) {
    #[cfg(feature = "hydrate")]
    {
        state.update(|s| s.voyages.begin_fetch());
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_voyages().await {
                Ok(voyages) => state.update(|s| s.voyages.resolve(voyages)),
                Err(e) => {
                    log::error!("Error fetching data: {e}");
                    state.update(|s| s.voyages.fail(e.to_string()));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = state;
    }
}

fn load_unit_types(state: RwSignal<VoyagesState>) {
    #[cfg(feature = "hydrate")]
    {
        state.update(|s| s.unit_types.begin_fetch());
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_unit_types().await {
                Ok(unit_types) => state.update(|s| s.unit_types.resolve(unit_types)),
                Err(e) => {
                    log::error!("Error fetching data: {e}");
                    state.update(|s| s.unit_types.fail(e.to_string()));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = state;
    }
}

fn create_voyage(state: RwSignal<VoyagesState>, toasts: Toasts, draft: VoyageDraft) {
    if !state.try_update(VoyagesState::begin_create).unwrap_or(false) {
        return;
    }

    #[cfg(feature = "hydrate")]
    {
        use crate::state::toasts::Notify as _;

        leptos::task::spawn_local(async move {
            let result = crate::net::api::create_voyage(&draft).await;
            if let Err(e) = &result {
                log::warn!("voyage create failed: {e:?}");
            }
            if let Some(notice) = state.try_update(|s| s.settle_create(&result)) {
                toasts.notify(notice);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (toasts, draft);
    }
}

fn delete_voyage(state: RwSignal<VoyagesState>, toasts: Toasts, voyage_id: String) {
    if !state.try_update(|s| s.begin_delete(&voyage_id)).unwrap_or(false) {
        return;
    }

    #[cfg(feature = "hydrate")]
    {
        use crate::state::toasts::Notify as _;

        leptos::task::spawn_local(async move {
            let result = crate::net::api::delete_voyage(&voyage_id).await;
            if let Err(e) = &result {
                log::warn!("voyage delete failed: {voyage_id}: {e:?}");
            }
            if let Some(notice) = state.try_update(|s| s.settle_delete(&voyage_id, &result)) {
                toasts.notify(notice);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = toasts;
    }
}
