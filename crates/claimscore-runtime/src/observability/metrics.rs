//! Metrics collection and reporting

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

/// Metric names recorded by the scorer
pub mod names {
    /// Claims that produced a score
    pub const CLAIMS_SCORED: &str = "claims_scored";
    /// Scored claims whose prediction was 1
    pub const CLAIMS_FLAGGED: &str = "claims_flagged";
    /// Batches passed through the feature pipeline
    pub const BATCHES: &str = "batches";
    /// Feature engineering, per batch
    pub const FEATURES: &str = "features";
    /// Feature engineering plus classification, per batch
    pub const SCORING: &str = "scoring";
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// Counter metric
#[derive(Debug, Clone)]
pub struct Counter {
    name: String,
    value: Arc<RwLock<u64>>,
}

impl Counter {
    /// Create a new counter
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Arc::new(RwLock::new(0)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Increment the counter
    pub fn inc(&self) {
        self.add(1);
    }

    /// Add a value to the counter
    pub fn add(&self, value: u64) {
        *write(&self.value) += value;
    }

    /// Get the current value
    pub fn get(&self) -> u64 {
        *read(&self.value)
    }

    /// Reset the counter
    pub fn reset(&self) {
        *write(&self.value) = 0;
    }
}

/// Histogram metric for tracking distributions
#[derive(Debug, Clone)]
pub struct Histogram {
    name: String,
    values: Arc<RwLock<Vec<f64>>>,
}

impl Histogram {
    /// Create a new histogram
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Observe a value
    pub fn observe(&self, value: f64) {
        write(&self.values).push(value);
    }

    /// Observe a duration, in seconds
    pub fn observe_duration(&self, duration: Duration) {
        self.observe(duration.as_secs_f64());
    }

    /// Get count of observations
    pub fn count(&self) -> usize {
        read(&self.values).len()
    }

    /// Get sum of all values
    pub fn sum(&self) -> f64 {
        read(&self.values).iter().sum()
    }

    /// Get average value
    pub fn avg(&self) -> f64 {
        let values = read(&self.values);
        if values.is_empty() {
            0.0
        } else {
            values.iter().sum::<f64>() / values.len() as f64
        }
    }

    /// Get percentile (0-100)
    pub fn percentile(&self, p: f64) -> f64 {
        let mut values = read(&self.values).clone();
        if values.is_empty() {
            return 0.0;
        }

        values.sort_by(f64::total_cmp);
        let index = ((p / 100.0) * (values.len() - 1) as f64).round() as usize;
        values[index.min(values.len() - 1)]
    }

    /// Reset the histogram
    pub fn reset(&self) {
        write(&self.values).clear();
    }
}

/// Metrics trait
pub trait Metrics: Send + Sync {
    /// Get a counter
    fn counter(&self, name: &str) -> Arc<Counter>;

    /// Get a histogram
    fn histogram(&self, name: &str) -> Arc<Histogram>;

    /// Record execution time
    fn record_execution_time(&self, operation: &str, duration: Duration);

    /// Record error
    fn record_error(&self, error_type: &str);
}

/// Point-in-time view of every metric
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub counters: BTreeMap<String, u64>,
    pub histograms: BTreeMap<String, HistogramSummary>,
}

/// Summary statistics of one histogram
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramSummary {
    pub count: usize,
    pub sum: f64,
    pub avg: f64,
    pub p50: f64,
    pub p95: f64,
}

/// Metrics collector
#[derive(Debug)]
pub struct MetricsCollector {
    counters: Arc<RwLock<HashMap<String, Arc<Counter>>>>,
    histograms: Arc<RwLock<HashMap<String, Arc<Histogram>>>>,
}

impl MetricsCollector {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            counters: Arc::new(RwLock::new(HashMap::new())),
            histograms: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get all counter names
    pub fn counter_names(&self) -> Vec<String> {
        read(&self.counters).keys().cloned().collect()
    }

    /// Get all histogram names
    pub fn histogram_names(&self) -> Vec<String> {
        read(&self.histograms).keys().cloned().collect()
    }

    /// Current value of every counter and a summary of every histogram
    pub fn snapshot(&self) -> MetricsSnapshot {
        let counters = read(&self.counters)
            .iter()
            .map(|(name, counter)| (name.clone(), counter.get()))
            .collect();
        let histograms = read(&self.histograms)
            .iter()
            .map(|(name, h)| {
                (
                    name.clone(),
                    HistogramSummary {
                        count: h.count(),
                        sum: h.sum(),
                        avg: h.avg(),
                        p50: h.percentile(50.0),
                        p95: h.percentile(95.0),
                    },
                )
            })
            .collect();

        MetricsSnapshot {
            counters,
            histograms,
        }
    }

    /// Reset all metrics
    pub fn reset_all(&self) {
        for counter in read(&self.counters).values() {
            counter.reset();
        }
        for histogram in read(&self.histograms).values() {
            histogram.reset();
        }
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics for MetricsCollector {
    fn counter(&self, name: &str) -> Arc<Counter> {
        write(&self.counters)
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Counter::new(name)))
            .clone()
    }

    fn histogram(&self, name: &str) -> Arc<Histogram> {
        write(&self.histograms)
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Histogram::new(name)))
            .clone()
    }

    fn record_execution_time(&self, operation: &str, duration: Duration) {
        self.histogram(&format!("{}_duration", operation))
            .observe_duration(duration);
    }

    fn record_error(&self, error_type: &str) {
        self.counter(&format!("errors_{}", error_type)).inc();
    }
}
