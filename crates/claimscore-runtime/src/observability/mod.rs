//! Observability module
//!
//! In-process counters and histograms for the scoring path. Structured logs
//! go through `tracing`; these metrics back the summary the CLI prints and
//! can be read by any embedding service.

pub mod metrics;

pub use metrics::{names, Counter, Histogram, Metrics, MetricsCollector, MetricsSnapshot};
