//! Canvas the temperature chart is drawn on.

use dioxus::prelude::*;

/// Props for ChartCanvas
#[derive(Props, Clone, PartialEq)]
pub struct ChartCanvasProps {
    /// The DOM id of the canvas (Chart.js binds to it once)
    pub id: String,
    /// Whether a fetch is outstanding
    #[props(default = false)]
    pub loading: bool,
    #[props(default = 400)]
    pub min_height: u32,
}

/// Always mounted, so a failed reload leaves the last chart on screen and
/// the chart instance stays bound to the same canvas.
#[component]
pub fn ChartCanvas(props: ChartCanvasProps) -> Element {
    let style = format!(
        "height: {}px; position: relative; width: 100%;",
        props.min_height
    );
    let opacity = if props.loading { "0.5" } else { "1" };

    rsx! {
        div {
            style: "{style}",
            canvas {
                id: "{props.id}",
                style: "opacity: {opacity};",
            }
        }
    }
}
