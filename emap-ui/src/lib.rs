//! Shared Dioxus components and SVG breakdown charts for electricity map apps.
//!
//! This crate provides:
//! - `js_bridge`: analytics, header height and viewport lookups via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `hooks`: memoized chart data and data sources derived from AppState
//! - `components`: Buttons, FAQ modal, accordion and app controls
//! - `charts`: The bar breakdown charts rendered as inline SVG

pub mod charts;
pub mod components;
pub mod hooks;
pub mod js_bridge;
pub mod state;
