//! Date range picker with start and end date inputs.

use crate::state::AppState;
use dioxus::prelude::*;
use wxh_core::session::Action;

/// Start and end date inputs. Each change reloads the series; clearing a
/// field leaves the chart as it is until both are filled again.
#[component]
pub fn DateRangePicker() -> Element {
    let state = use_context::<AppState>();
    let actions = use_coroutine_handle::<Action>();
    let range = state.session.read().date_range.clone();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "From: "
                input {
                    r#type: "date",
                    value: "{range.start}",
                    onchange: move |evt: Event<FormData>| actions.send(Action::SetStartDate(evt.value())),
                }
            }
            label {
                style: "font-weight: bold;",
                "To: "
                input {
                    r#type: "date",
                    value: "{range.end}",
                    onchange: move |evt: Event<FormData>| actions.send(Action::SetEndDate(evt.value())),
                }
            }
        }
    }
}
