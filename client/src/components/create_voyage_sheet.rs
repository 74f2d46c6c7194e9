//! Side sheet holding the voyage creation form.
//!
//! DESIGN
//! ======
//! The sheet owns the draft while it is open. Submission validates locally,
//! raises one toast per distinct error message on failure, and on success
//! hands the validated payload to `on_submit` without touching the network.
//! Closing the sheet, or a successful submit, discards the draft.

#[cfg(test)]
#[path = "create_voyage_sheet_test.rs"]
mod create_voyage_sheet_test;

use leptos::prelude::*;

use crate::net::types::{UnitType, VoyageDraft};
use crate::state::toasts::{Notice, Notify, Toasts};
use crate::util::validation::{FormVariant, MISSING_INPUT, ValidationErrors, VoyageField, empty_draft, validate};

/// Label/value pair shown by the unit-type multi-select.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Every unit type as a selectable option.
pub fn unit_type_options(unit_types: &[UnitType]) -> Vec<SelectOption> {
    unit_types
        .iter()
        .map(|t| SelectOption { value: t.id.clone(), label: t.name.clone() })
        .collect()
}

/// Options for the selected ids, in unit-type list order. Ids with no
/// matching unit type are dropped.
pub fn selected_options(unit_types: &[UnitType], selected: &[String]) -> Vec<SelectOption> {
    unit_types
        .iter()
        .filter(|t| selected.contains(&t.id))
        .map(|t| SelectOption { value: t.id.clone(), label: t.name.clone() })
        .collect()
}

pub fn is_unit_type_selected(draft: &VoyageDraft, id: &str) -> bool {
    draft.unit_types.as_ref().is_some_and(|ids| ids.iter().any(|s| s == id))
}

/// Add `id` to the selection, or remove it if already present.
pub fn toggle_unit_type(draft: &mut VoyageDraft, id: &str) {
    let ids = draft.unit_types.get_or_insert_with(Vec::new);
    if let Some(pos) = ids.iter().position(|s| s == id) {
        ids.remove(pos);
    } else {
        ids.push(id.to_owned());
    }
}

/// Raise one validation toast per distinct message.
pub fn report_validation_errors(errors: &ValidationErrors, notify: &impl Notify) {
    for message in errors.to_error_tree().flatten_messages() {
        let description = if message.is_empty() { MISSING_INPUT.to_owned() } else { message };
        notify.notify(Notice::validation(description));
    }
}

/// Validate `draft`; report failures through `notify` and return the payload
/// only when every rule passes.
pub fn submit_draft(draft: &VoyageDraft, variant: FormVariant, notify: &impl Notify) -> Option<VoyageDraft> {
    match validate(draft, variant) {
        Ok(payload) => Some(payload),
        Err(errors) => {
            report_validation_errors(&errors, notify);
            None
        }
    }
}

/// "Create" trigger plus the sheet it opens.
#[component]
pub fn CreateVoyageSheet(
    #[prop(into)] unit_types: Signal<Vec<UnitType>>,
    on_submit: Callback<VoyageDraft>,
    /// A create is in flight; Submit is disabled and ignored.
    #[prop(into)]
    pending: Signal<bool>,
    toasts: Toasts,
    #[prop(optional)] variant: FormVariant,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let draft = RwSignal::new(empty_draft(variant));

    let close = move || {
        open.set(false);
        draft.set(empty_draft(variant));
    };

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        if let Some(payload) = submit_draft(&draft.get_untracked(), variant, &toasts) {
            on_submit.run(payload);
            close();
        }
    };

    view! {
        <button class="btn btn--creation voyage-sheet__trigger" on:click=move |_| open.set(true)>
            "Create"
        </button>
        <Show when=move || open.get()>
            <div class="sheet-backdrop" on:click=move |_| close()>
                <aside class="sheet sheet--right" on:click=move |ev| ev.stop_propagation()>
                    <header class="sheet__header">
                        <h2 class="sheet__title">"Create a Voyage"</h2>
                        <button class="sheet__close" on:click=move |_| close() title="Close" aria-label="Close">
                            "✕"
                        </button>
                    </header>
                    <form class="voyage-form" on:submit=on_form_submit>
                        <DraftInput
                            label="Scheduled Departure"
                            input_type="datetime-local"
                            field=VoyageField::ScheduledDeparture
                            draft=draft
                        />
                        <DraftInput
                            label="Scheduled Arrival"
                            input_type="datetime-local"
                            field=VoyageField::ScheduledArrival
                            draft=draft
                        />
                        <DraftInput label="Port of Loading" field=VoyageField::PortOfLoading draft=draft/>
                        <DraftInput label="Port of Discharge" field=VoyageField::PortOfDischarge draft=draft/>
                        <DraftInput label="Vessel" field=VoyageField::Vessel draft=draft/>
                        <Show when=move || variant.has_unit_types()>
                            <UnitTypeSelect unit_types=unit_types draft=draft/>
                        </Show>
                        <button class="btn btn--outline voyage-form__submit" type="submit" disabled=move || pending.get()>
                            "Submit"
                        </button>
                    </form>
                </aside>
            </div>
        </Show>
    }
}

/// Text input bound to one scalar draft field.
#[component]
fn DraftInput(
    label: &'static str,
    field: VoyageField,
    draft: RwSignal<VoyageDraft>,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <label class="voyage-form__field">
            <span class="voyage-form__label">{label}</span>
            <input
                class="voyage-form__input"
                type=input_type
                name=field.path()
                prop:value=move || draft.with(|d| field.scalar_value(d).unwrap_or_default().to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| field.set_scalar(d, value));
                }
            />
        </label>
    }
}

/// Multi-select over unit types, bound to the draft's id list.
#[component]
fn UnitTypeSelect(unit_types: Signal<Vec<UnitType>>, draft: RwSignal<VoyageDraft>) -> impl IntoView {
    let selected = move || {
        let ids = draft.with(|d| d.unit_types.clone().unwrap_or_default());
        unit_types.with(|types| selected_options(types, &ids))
    };

    view! {
        <div class="voyage-form__field">
            <span class="voyage-form__label">"Unit Types"</span>
            <div class="multi-select">
                <div class="multi-select__values">
                    {move || {
                        let chips = selected();
                        if chips.is_empty() {
                            return view! { <span class="multi-select__placeholder">"Select Unit Types"</span> }
                                .into_any();
                        }
                        chips
                            .into_iter()
                            .map(|opt| {
                                let id = opt.value;
                                view! {
                                    <span class="multi-select__chip">
                                        {opt.label}
                                        <button
                                            type="button"
                                            class="multi-select__remove"
                                            aria-label="Remove"
                                            on:click=move |_| draft.update(|d| toggle_unit_type(d, &id))
                                        >
                                            "✕"
                                        </button>
                                    </span>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </div>
                <ul class="multi-select__options">
                    {move || {
                        unit_types
                            .with(|types| unit_type_options(types))
                            .into_iter()
                            .map(|opt| {
                                let toggle_id = opt.value.clone();
                                let checked_id = opt.value;
                                view! {
                                    <li class="multi-select__option">
                                        <label>
                                            <input
                                                type="checkbox"
                                                prop:checked=move || draft.with(|d| is_unit_type_selected(d, &checked_id))
                                                on:change=move |_| draft.update(|d| toggle_unit_type(d, &toggle_id))
                                            />
                                            {opt.label}
                                        </label>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </div>
        </div>
    }
}
