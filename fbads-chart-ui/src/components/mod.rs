//! Reusable Dioxus RSX components for the insights dashboard.

mod chart_container;
mod chart_header;
mod error_display;
mod insight_picker;
mod loading_spinner;
mod mode_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use insight_picker::InsightPicker;
pub use loading_spinner::LoadingSpinner;
pub use mode_selector::ModeSelector;
