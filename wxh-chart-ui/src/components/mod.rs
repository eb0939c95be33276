//! Reusable Dioxus RSX components for the temperature history viewer.

mod address_search;
mod chart_canvas;
mod chart_header;
mod date_range_picker;
mod error_display;
mod filter_toggles;
mod loading_spinner;
mod location_map;

pub use address_search::AddressSearch;
pub use chart_canvas::ChartCanvas;
pub use chart_header::ChartHeader;
pub use date_range_picker::DateRangePicker;
pub use error_display::ErrorDisplay;
pub use filter_toggles::FilterToggles;
pub use loading_spinner::LoadingSpinner;
pub use location_map::LocationMap;
