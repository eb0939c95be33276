//! Application state managed via Dioxus context.
//!
//! `AppState` wraps the [`Session`] reducer in a signal, so every mutation
//! redraws the components reading it. Components never mutate the session
//! directly: they send an [`Action`] to the coroutine started by
//! [`use_action_loop`], which applies it and runs the resulting effects.

use crate::{fetch, js_bridge};
use dioxus::prelude::*;
use futures::StreamExt;
use log::debug;
use std::rc::Rc;
use wxh_core::config::ServiceConfig;
use wxh_core::session::{Action, Effect, Session};
use wxh_core::DateRange;

/// Chart canvas DOM id.
pub const CHART_CANVAS_ID: &str = "temperature-chart";
/// Map container DOM id.
pub const MAP_CONTAINER_ID: &str = "location-map";

/// Shared application state.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Coordinate, date range, filters, results, series, loading and error
    pub session: Signal<Session>,
    /// Service endpoints baked in at build time
    pub config: Signal<ServiceConfig>,
}

impl AppState {
    /// Create a new AppState at the configured initial location and the default range.
    pub fn new() -> Self {
        let config = ServiceConfig::from_build_env();
        let session = Session::new(config.initial_coordinate, DateRange::default());
        Self {
            session: Signal::new(session),
            config: Signal::new(config),
        }
    }

    /// Apply `action` to the session and carry out the effects it asks for.
    pub fn dispatch(mut self, action: Action) {
        let effects = self.session.write().apply(action);
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(self, effect: Effect) {
        match effect {
            Effect::Search(query) => {
                let config = self.config.read().clone();
                spawn(async move {
                    let result = fetch::search(&config, &query).await;
                    self.dispatch(Action::SearchCompleted(result));
                });
            }
            Effect::PlaceMarker(coordinate) => js_bridge::place_marker(coordinate),
            Effect::Fetch(request) => {
                let config = self.config.read().clone();
                spawn(async move {
                    let result = fetch::fetch_series(&config, &request).await;
                    self.dispatch(Action::FetchCompleted(result));
                });
            }
            Effect::Render => {
                let frame = self.session.read().chart_frame();
                if let Some(frame) = frame {
                    js_bridge::render_chart(
                        CHART_CANVAS_ID,
                        &frame,
                        Rc::new(|index| debug!("Chart point {} clicked", index)),
                    );
                }
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Start the coroutine that feeds actions into `state`. Components reach it
/// with `use_coroutine_handle::<Action>()`.
pub fn use_action_loop(state: AppState) -> Coroutine<Action> {
    use_coroutine(move |mut actions: UnboundedReceiver<Action>| async move {
        while let Some(action) = actions.next().await {
            state.dispatch(action);
        }
    })
}
