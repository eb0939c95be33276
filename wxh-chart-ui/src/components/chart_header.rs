//! Chart header: title, current location and period, y-axis unit.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// Y-axis unit explanation (e.g., "Degrees Celsius (°C)")
    #[props(default = String::new())]
    pub unit_description: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    let state = use_context::<AppState>();
    let session = state.session.read();
    let location = session.coordinate.to_string();
    let range = &session.date_range;
    let period = if range.is_incomplete() {
        "pick a start and end date".to_string()
    } else {
        format!("{} to {}", range.start, range.end)
    };

    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            p {
                style: "margin: 0; font-size: 13px; color: #444;",
                "{location} · {period}"
            }
            if !props.unit_description.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "Y-axis: {props.unit_description}"
                }
            }
        }
    }
}
