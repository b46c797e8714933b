//! The telemetry aggregation and presentation-state core.
//!
//! Pure with respect to I/O: everything here works off the
//! [`crate::system::source::MetricsSource`] capability and plain data, so the
//! whole engine is testable without a terminal or a real backend.

pub mod aggregate;
pub mod history;
pub mod poll;
pub mod procs;
pub mod view;
