//! Advertising-insights dashboard widget.
//!
//! This crate provides:
//! - `config`: `WidgetConfig` as supplied by the dashboard host, and the query params derived from it
//! - `binding`: the render function that turns one config into one remote call and one chart update
//! - `registry`: widget-id to render-function lookup used by the host at mount time
//! - `calls`: managed calls that abort a widget's previous request when it re-renders
//! - `chart`: the traits chart backends and mount targets implement
//! - `rpc`: wire format for the plugin command endpoint
//! - `insight`: decoding of insight results into drawable pie slices and line series
//!
//! Everything here is single-threaded (`Rc`, no `Send` bounds) so it runs unchanged
//! in a WASM host and in native tests.

pub mod binding;
pub mod calls;
pub mod chart;
pub mod config;
pub mod error;
pub mod insight;
pub mod registry;
pub mod rpc;

#[cfg(test)]
mod testing;

pub use binding::{render, PendingRender, RenderOutcome, WidgetContext};
pub use calls::{CallManager, CommandClient, WidgetCalls};
pub use chart::{Chart, ChartFactory, ChartKind, ChartOptions, Container, MountPoint};
pub use config::{ChartMode, InsightQueryParams, ServiceRef, WidgetConfig};
pub use error::RemoteCallFailure;
pub use registry::{RenderFn, WidgetRegistry};

/// Plugin identifier the host knows this widget by.
pub const PLUGIN_ID: &str = "serverboards.facebookads";

/// Widget type identifier registered with the host.
pub const WIDGET_ID: &str = "serverboards.facebookads/widget";

/// Command endpoint every insight call is dispatched to (`<plugin_id>/command`).
pub const COMMAND_ENDPOINT: &str = "serverboards.facebookads/command";

/// Remote method that computes insight data.
pub const GET_INSIGHTS: &str = "get_insights";

/// Boxed single-threaded future, as returned by render functions and command clients.
pub type LocalBoxFuture<'a, T> = futures::future::LocalBoxFuture<'a, T>;
