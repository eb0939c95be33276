//! The four display checkboxes. Toggling one redraws, it never refetches.

use crate::state::AppState;
use dioxus::prelude::*;
use wxh_core::dataset::DisplayFilter;
use wxh_core::session::Action;

#[component]
pub fn FilterToggles() -> Element {
    let state = use_context::<AppState>();
    let filters = state.session.read().filters;

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 16px; flex-wrap: wrap; align-items: center;",
            Toggle { filter: DisplayFilter::StackYears, checked: filters.stack_years, label: "Stack years" }
            Toggle { filter: DisplayFilter::FirstLastOnly, checked: filters.first_last_only, label: "First and last year only" }
            Toggle { filter: DisplayFilter::ShowMin, checked: filters.show_min, label: "Minimum (TN)" }
            Toggle { filter: DisplayFilter::ShowMax, checked: filters.show_max, label: "Maximum (TX)" }
        }
    }
}

#[component]
fn Toggle(filter: DisplayFilter, checked: bool, label: &'static str) -> Element {
    let actions = use_coroutine_handle::<Action>();
    rsx! {
        label {
            style: "display: flex; gap: 4px; align-items: center;",
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: move |evt: Event<FormData>| actions.send(Action::SetFilter(filter, evt.checked())),
            }
            "{label}"
        }
    }
}
