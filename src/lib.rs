//! pulsetop is a live host-telemetry dashboard for the terminal.
//!
//! The crate splits into three layers:
//! - [`system`] talks to the host: a [`system::source::MetricsSource`]
//!   produces sanitized snapshots, and [`system::collector::Collector`]
//!   is the sysinfo-backed implementation.
//! - [`engine`] is the pure core: bounded history, cross-device
//!   aggregation, the process pipeline, and the poll cycle that turns
//!   fetch results into an immutable [`engine::view::ViewModel`].
//! - [`ui`] renders the latest view model with ratatui widgets.

pub mod action;
pub mod app;
pub mod config;
pub mod engine;
pub mod event;
pub mod format;
pub mod system;
pub mod ui;
