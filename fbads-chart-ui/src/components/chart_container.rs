//! Host region widget instances mount their charts into.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id of the region; widget renders append their chart elements here
    pub id: String,
    /// Whether a remote call is in flight
    #[props(default = false)]
    pub loading: bool,
    #[props(default = 320)]
    pub min_height: u32,
}

/// Widget mount region with a loading overlay.
///
/// The inner element is owned by the widget renders, not by Dioxus; it is
/// never given RSX children so Dioxus does not diff over injected charts.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );
    let opacity = if props.loading { "0.4" } else { "1" };

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666; z-index: 1;",
                    "Loading insights..."
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%; opacity: {opacity};",
            }
        }
    }
}
