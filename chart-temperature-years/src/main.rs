//! Temperature History Chart
//!
//! Pick a location by address search or by clicking the map, pick a date
//! range, and the app draws the daily minimum (TN) and maximum (TX)
//! temperature for that place. With "Stack years" enabled every calendar
//! year gets its own line on a shared January to December axis, older
//! years fading out and the most recent drawn solid.
//!
//! Data flow:
//! 1. On mount the Chart.js/Leaflet glue is evaluated and the libraries
//!    start loading from the CDN.
//! 2. `Action::Start` fetches the series for the initial location and the
//!    default two-year range.
//! 3. Every input sends an `Action` to the action loop; the session decides
//!    whether to refetch, place the marker or just redraw.
//! 4. The chart is created once on its canvas and updated in place after that.

use dioxus::prelude::*;
use wxh_chart_ui::components::{
    AddressSearch, ChartCanvas, ChartHeader, DateRangePicker, ErrorDisplay, FilterToggles,
    LoadingSpinner, LocationMap,
};
use wxh_chart_ui::js_bridge;
use wxh_chart_ui::state::{use_action_loop, AppState, CHART_CANVAS_ID};
use wxh_core::session::Action;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("temperature-years-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let actions = use_action_loop(state);

    use_hook(move || {
        log::info!("Temperature history viewer starting");
        js_bridge::load_bridge_scripts();
        actions.send(Action::Start);
    });

    let (error, loading) = {
        let session = state.session.read();
        (session.error, session.loading)
    };

    rsx! {
        document::Stylesheet { href: js_bridge::LEAFLET_CSS_URL }
        div {
            style: "font-family: sans-serif; max-width: 960px; margin: 0 auto; padding: 16px;",
            ChartHeader {
                title: "Daily temperature history",
                unit_description: "Degrees Celsius (°C)",
            }
            AddressSearch {}
            LocationMap {}
            DateRangePicker {}
            FilterToggles {}
            if let Some(message) = error {
                ErrorDisplay { message: message.to_string() }
            }
            if loading {
                LoadingSpinner {}
            }
            ChartCanvas {
                id: CHART_CANVAS_ID.to_string(),
                loading: loading,
            }
        }
    }
}
