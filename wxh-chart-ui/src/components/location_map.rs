//! Click-to-select map with a single marker.

use crate::js_bridge;
use crate::state::{AppState, MAP_CONTAINER_ID};
use dioxus::prelude::*;
use wxh_core::session::Action;

#[component]
pub fn LocationMap() -> Element {
    let state = use_context::<AppState>();
    let actions = use_coroutine_handle::<Action>();

    // The container exists once mounted; Leaflet binds to it a single time.
    use_effect(move || {
        let config = state.config.read().clone();
        js_bridge::init_map(MAP_CONTAINER_ID, &config, move |coordinate| {
            actions.send(Action::MapClicked(coordinate))
        });
    });

    rsx! {
        div {
            id: MAP_CONTAINER_ID,
            style: "height: 320px; width: 100%; margin: 8px 0; border: 1px solid #E0E0E0; border-radius: 4px;",
        }
    }
}
