//! Count trigger that reveals the unit types carried on a voyage.

#[cfg(test)]
#[path = "unit_types_popover_test.rs"]
mod unit_types_popover_test;

use leptos::prelude::*;

use crate::net::types::UnitType;

/// "1 Unit", "0 Units", "2 Units".
pub fn unit_count_label(count: usize) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} Unit{suffix}")
}

/// Whole lengths print without a decimal part.
pub fn format_default_length(length: f64) -> String {
    if length.fract() == 0.0 && length.is_finite() { format!("{length:.0}") } else { length.to_string() }
}

#[component]
pub fn UnitTypesPopover(unit_types: Vec<UnitType>) -> impl IntoView {
    let open = RwSignal::new(false);
    let label = unit_count_label(unit_types.len());

    view! {
        <div class="popover">
            <button class="btn btn--link popover__trigger" on:click=move |_| open.update(|o| *o = !*o)>
                {label}
            </button>
            <Show when=move || open.get()>
                <div class="popover__content">
                    <h3 class="popover__title">"Unit Types"</h3>
                    <ul class="popover__list">
                        {unit_types
                            .iter()
                            .map(|unit_type| {
                                let length = format_default_length(unit_type.default_length);
                                view! {
                                    <li class="popover__item">
                                        <div class="popover__item-name">{unit_type.name.clone()}</div>
                                        <div class="popover__item-meta">{format!("Default Length: {length}")}</div>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
            </Show>
        </div>
    }
}
