//! Typed wrappers around the Chart.js and Leaflet glue.
//!
//! The glue lives in `assets/js/*.js`, is embedded at compile time and
//! evaluated once at global scope, which makes its function declarations
//! reachable as `window.*`. Chart.js, its date adapter and Leaflet are loaded
//! from a CDN by the glue itself, in order.
//!
//! The chart registry and the map handle are single instances per page and
//! live in thread-locals: the browser runs everything on one thread.

use std::cell::{Cell, RefCell};

use log::{debug, error};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wxh_core::chart::{ChartOptions, ChartRegistry, ChartSurface, PointClick, RenderOutcome};
use wxh_core::config::ServiceConfig;
use wxh_core::dataset::ChartFrame;
use wxh_core::Coordinate;

// Embed the glue JS files at compile time
static READY_JS: &str = include_str!("../assets/js/ready.js");
static TEMPERATURE_CHART_JS: &str = include_str!("../assets/js/temperature-chart.js");
static LOCATION_MAP_JS: &str = include_str!("../assets/js/location-map.js");

pub const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";
pub const DATE_ADAPTER_URL: &str =
    "https://cdn.jsdelivr.net/npm/chartjs-adapter-date-fns@3.0.0/dist/chartjs-adapter-date-fns.bundle.min.js";
pub const LEAFLET_JS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
pub const LEAFLET_CSS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = window, js_name = wxhCreateChart)]
    fn create_chart(
        canvas_id: &str,
        labels_json: &str,
        datasets_json: &str,
        options_json: &str,
        on_click: &Closure<dyn FnMut(u32)>,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = window, js_name = wxhUpdateChart)]
    fn update_chart(
        handle: &JsValue,
        labels_json: &str,
        datasets_json: &str,
        day_display_format: &str,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = window, js_name = wxhInitMap)]
    fn init_leaflet_map(
        container_id: &str,
        tile_url: &str,
        attribution: &str,
        lat: f64,
        lon: f64,
        zoom: u8,
        on_click: &Closure<dyn FnMut(f64, f64)>,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = window, js_name = wxhPlaceMarker)]
    fn place_leaflet_marker(handle: &JsValue, lat: f64, lon: f64) -> Result<(), JsValue>;
}

thread_local! {
    static SCRIPTS_LOADED: Cell<bool> = const { Cell::new(false) };
    static CHARTS: RefCell<ChartRegistry<JsChartSurface>> =
        RefCell::new(ChartRegistry::new(JsChartSurface));
    static MAP: RefCell<MapSlot> = RefCell::new(MapSlot::default());
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('wxh JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Evaluate the glue scripts and start loading the chart and map libraries.
/// Safe to call more than once; only the first call does anything.
pub fn load_bridge_scripts() {
    if SCRIPTS_LOADED.with(|loaded| loaded.replace(true)) {
        return;
    }
    let all_js = [READY_JS, TEMPERATURE_CHART_JS, LOCATION_MAP_JS].join("\n");
    if let Err(e) = js_sys::eval(&all_js) {
        error!("Failed to evaluate bridge scripts: {:?}", e);
        return;
    }
    let urls = to_json(&[CHART_JS_URL, DATE_ADAPTER_URL, LEAFLET_JS_URL]);
    call_js(&format!("window.wxhLoadScripts({});", urls));
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        error!("Failed to serialize chart data: {}", e);
        "null".to_string()
    })
}

/// A Chart.js instance plus the click closure it calls back into.
pub struct JsChart {
    handle: JsValue,
    _on_click: Closure<dyn FnMut(u32)>,
}

/// Chart.js behind the [`ChartSurface`] contract.
pub struct JsChartSurface;

impl ChartSurface for JsChartSurface {
    type Handle = JsChart;

    fn create(
        &mut self,
        canvas_id: &str,
        frame: &ChartFrame,
        on_click: PointClick,
    ) -> Option<JsChart> {
        let closure = Closure::wrap(
            Box::new(move |index: u32| on_click(index as usize)) as Box<dyn FnMut(u32)>
        );
        let options = ChartOptions::for_format(frame.day_format);
        match create_chart(
            canvas_id,
            &to_json(&frame.labels),
            &to_json(&frame.datasets),
            &to_json(&options),
            &closure,
        ) {
            Ok(handle) if !handle.is_null() && !handle.is_undefined() => Some(JsChart {
                handle,
                _on_click: closure,
            }),
            Ok(_) => {
                error!("Chart construction on #{} returned no chart", canvas_id);
                None
            }
            Err(e) => {
                error!("Chart construction on #{} failed: {:?}", canvas_id, e);
                None
            }
        }
    }

    fn update(&mut self, chart: &mut JsChart, frame: &ChartFrame) {
        if let Err(e) = update_chart(
            &chart.handle,
            &to_json(&frame.labels),
            &to_json(&frame.datasets),
            frame.day_format.pattern(),
        ) {
            error!("Chart update failed: {:?}", e);
        }
    }
}

/// Draw `frame` on `canvas_id`, reusing the chart already bound to it.
pub fn render_chart(canvas_id: &str, frame: &ChartFrame, on_click: PointClick) -> RenderOutcome {
    let outcome = CHARTS.with(|charts| charts.borrow_mut().render(canvas_id, frame, on_click));
    debug!(
        "Chart #{} {:?} with {} dataset(s)",
        canvas_id,
        outcome,
        frame.datasets.len()
    );
    outcome
}

struct MapHandle {
    handle: JsValue,
    _on_click: Closure<dyn FnMut(f64, f64)>,
}

#[derive(Default)]
struct MapSlot {
    map: Option<MapHandle>,
    /// Marker requested before the map existed.
    pending: Option<Coordinate>,
}

fn place(map: &MapHandle, coordinate: Coordinate) {
    if let Err(e) = place_leaflet_marker(&map.handle, coordinate.latitude, coordinate.longitude) {
        error!("Placing marker at {} failed: {:?}", coordinate, e);
    }
}

/// Create the map in `container_id`. Later calls are ignored.
pub fn init_map(
    container_id: &str,
    config: &ServiceConfig,
    mut on_click: impl FnMut(Coordinate) + 'static,
) {
    MAP.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.map.is_some() {
            return;
        }
        let closure = Closure::wrap(Box::new(move |lat: f64, lon: f64| {
            on_click(Coordinate::new(lat, lon))
        }) as Box<dyn FnMut(f64, f64)>);
        let start = config.initial_coordinate;
        let handle = match init_leaflet_map(
            container_id,
            &config.tile_url,
            &config.tile_attribution,
            start.latitude,
            start.longitude,
            config.initial_zoom,
            &closure,
        ) {
            Ok(handle) => handle,
            Err(e) => {
                error!("Map construction on #{} failed: {:?}", container_id, e);
                return;
            }
        };
        let map = MapHandle {
            handle,
            _on_click: closure,
        };
        if let Some(coordinate) = slot.pending.take() {
            place(&map, coordinate);
        }
        slot.map = Some(map);
    });
}

/// Replace the single map marker with one at `coordinate`.
pub fn place_marker(coordinate: Coordinate) {
    MAP.with(|slot| {
        let slot = &mut *slot.borrow_mut();
        match &slot.map {
            Some(map) => place(map, coordinate),
            None => slot.pending = Some(coordinate),
        }
    });
}
