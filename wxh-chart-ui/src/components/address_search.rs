//! Address search box and the list of matches.

use crate::state::AppState;
use dioxus::prelude::*;
use wxh_core::session::Action;

/// Text input plus search button (Enter also submits). Up to three matches
/// are listed as buttons; picking one moves the marker and reloads.
#[component]
pub fn AddressSearch() -> Element {
    let state = use_context::<AppState>();
    let actions = use_coroutine_handle::<Action>();
    let mut query = use_signal(String::new);
    let results = state.session.read().results.clone();

    let submit = move || actions.send(Action::SubmitSearch(query()));

    rsx! {
        div {
            style: "margin: 8px 0;",
            div {
                style: "display: flex; gap: 8px; align-items: center;",
                label {
                    r#for: "address-input",
                    style: "font-weight: bold;",
                    "Address: "
                }
                input {
                    id: "address-input",
                    r#type: "text",
                    placeholder: "Town, street or landmark",
                    value: "{query}",
                    style: "flex: 1; max-width: 360px; padding: 4px 8px;",
                    oninput: move |evt: Event<FormData>| query.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            submit();
                        }
                    },
                }
                button {
                    onclick: move |_| submit(),
                    "Search"
                }
            }
            if !results.is_empty() {
                div {
                    style: "display: flex; flex-direction: column; gap: 4px; margin-top: 6px; max-width: 520px;",
                    for (index, result) in results.into_iter().enumerate() {
                        button {
                            key: "{index}",
                            style: "text-align: left; padding: 4px 8px;",
                            onclick: move |_| actions.send(Action::SelectResult(index)),
                            "{result.display_name}"
                        }
                    }
                }
            }
        }
    }
}
