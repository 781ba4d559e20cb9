//! Canvas container for the Chart.js trend chart.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the canvas (Chart.js draws into this)
    pub id: String,
    /// Height in pixels
    #[props(default = 320)]
    pub height: u32,
}

/// A fixed-height box holding the chart canvas.
///
/// The canvas is always mounted so the chart instance can be created on the
/// first successful fetch and updated in place afterwards.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "height: {}px; position: relative; width: 100%;",
        props.height
    );

    rsx! {
        div {
            style: "{style}",
            canvas {
                id: "{props.id}",
            }
        }
    }
}
