use super::metric::Metric;

/// Transport and configuration failures of the history API client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Per-metric failures shown inline in place of a chart.
///
/// The `Display` output is the exact message rendered on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MetricError {
    #[error("Error fetching {} data.", .0.display_name())]
    FetchFailed(Metric),

    #[error("No {} history data available.", .0.display_name())]
    EmptyHistory(Metric),

    #[error("API data does not contain '{}'.", .0.field())]
    MissingField(Metric),

    #[error("No {} data available for the last {hours} hours.", .metric.display_name())]
    EmptyWindow { metric: Metric, hours: i64 },
}

impl MetricError {
    /// The metric whose pipeline produced this error
    pub const fn metric(&self) -> Metric {
        match self {
            Self::FetchFailed(metric)
            | Self::EmptyHistory(metric)
            | Self::MissingField(metric)
            | Self::EmptyWindow { metric, .. } => *metric,
        }
    }
}
