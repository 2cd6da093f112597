//! Browser backends and shared Dioxus components for the insights widget.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `charts`: D3 pie and line charts implementing the widget's `Chart` seam
//! - `dom`: the DOM element widget instances mount into
//! - `host`: `fetch`-based transport for plugin commands
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, containers, etc.)

pub mod charts;
pub mod components;
pub mod dom;
pub mod host;
pub mod js_bridge;
pub mod state;
