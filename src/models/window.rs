use super::{error::MetricError, history::HistoryResponse, metric::Metric};
use chrono::{DateTime, Duration, Utc};

/// Display label format for the categorical time axis (`DD/MM HH:MM`)
pub const LABEL_FORMAT: &str = "%d/%m %H:%M";

/// A projected `(timestamp, value)` pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl Sample {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// A sample inside the window together with its axis label
#[derive(Debug, Clone, PartialEq)]
pub struct WindowPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
    pub label: String,
}

impl From<Sample> for WindowPoint {
    fn from(sample: Sample) -> Self {
        Self {
            timestamp: sample.timestamp,
            value: sample.value,
            label: format_label(sample.timestamp),
        }
    }
}

/// Formats a timestamp for the chart axis
pub fn format_label(timestamp: DateTime<Utc>) -> String {
    timestamp.format(LABEL_FORMAT).to_string()
}

/// Keeps samples at or after `now - window`, sorted ascending by timestamp.
///
/// Applying it again to its own output with the same `now` is a no-op.
pub fn filter_window(samples: &[Sample], now: DateTime<Utc>, window: Duration) -> Vec<Sample> {
    let cutoff = now - window;

    let mut kept: Vec<Sample> = samples
        .iter()
        .filter(|s| s.timestamp >= cutoff)
        .copied()
        .collect();
    kept.sort_by_key(|s| s.timestamp);
    kept
}

/// The last-24-hours slice of one metric's history, ready for charting.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredWindow {
    metric: Metric,
    points: Vec<WindowPoint>,
}

impl FilteredWindow {
    /// Runs the full shaping pipeline for `metric` over a fetched response.
    ///
    /// `now` is the reference instant the window ends at; both metrics of a
    /// render share the same value. Records whose value is null or not a
    /// number are skipped, so a window holding only such records reports
    /// `EmptyWindow` instead of drawing gaps.
    pub fn from_response(
        metric: Metric,
        response: Option<&HistoryResponse>,
        now: DateTime<Utc>,
    ) -> Result<Self, MetricError> {
        Self::from_response_with_window(
            metric,
            response,
            now,
            crate::config::Config::WINDOW_HOURS,
        )
    }

    pub fn from_response_with_window(
        metric: Metric,
        response: Option<&HistoryResponse>,
        now: DateTime<Utc>,
        window_hours: i64,
    ) -> Result<Self, MetricError> {
        let response = response.ok_or(MetricError::FetchFailed(metric))?;

        if response.is_empty() {
            return Err(MetricError::EmptyHistory(metric));
        }

        if !response.has_field(metric.field()) {
            return Err(MetricError::MissingField(metric));
        }

        // Records lacking a numeric value for this metric are dropped
        let samples: Vec<Sample> = response
            .history
            .iter()
            .filter_map(|r| r.value(metric.field()).map(|v| Sample::new(r.datetime, v)))
            .collect();

        let kept = filter_window(&samples, now, Duration::hours(window_hours));
        if kept.is_empty() {
            return Err(MetricError::EmptyWindow {
                metric,
                hours: window_hours,
            });
        }

        Ok(Self {
            metric,
            points: kept.into_iter().map(WindowPoint::from).collect(),
        })
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn points(&self) -> &[WindowPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The retained samples without labels
    pub fn samples(&self) -> Vec<Sample> {
        self.points
            .iter()
            .map(|p| Sample::new(p.timestamp, p.value))
            .collect()
    }

    /// Axis labels and values as parallel vectors
    pub fn series_data(&self) -> (Vec<String>, Vec<f64>) {
        self.points
            .iter()
            .map(|p| (p.label.clone(), p.value))
            .unzip()
    }
}
