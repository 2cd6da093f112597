//! Chart header component with title and reporting period.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// Insight being shown, e.g. "campaign/6051"
    #[props(default = String::new())]
    pub insight: String,
    #[props(default = "Last 7 days".to_string())]
    pub period: String,
}

/// Header for the widget showing title, insight id and period.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            p {
                style: "margin: 0; font-size: 12px; color: #666;",
                if props.insight.is_empty() {
                    "No insight selected"
                } else {
                    "{props.insight} · {props.period}"
                }
            }
        }
    }
}
