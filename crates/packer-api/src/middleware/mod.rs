//! # Middleware Stack
//!
//! Request tracing is `tower-http`'s `TraceLayer`, attached in [`crate::app`].
//! [`metrics`] records Prometheus request metrics.

pub mod metrics;
