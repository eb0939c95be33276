//! Loading indicator.

use dioxus::prelude::*;

/// Shown while a timeseries fetch is outstanding.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: inline-block; padding: 4px 8px; color: #666; font-size: 13px;",
            "Loading data..."
        }
    }
}
