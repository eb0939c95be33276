//! Shared Dioxus components and JS bridge for the temperature history viewer.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Chart.js and Leaflet glue in `assets/js/*.js`
//! - `fetch`: browser `fetch()` for the geocoding and timeseries services
//! - `state`: `AppState` holding the session signal, plus the effect runner
//! - `components`: reusable RSX components (search, map, date range, filters, chart)

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod state;
