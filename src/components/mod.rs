pub mod chart;
pub mod metric_panel;
pub mod status;
pub mod time_series;

pub use chart::{Chart, build_chart};
pub use metric_panel::MetricPanel;
pub use time_series::TimeSeries;
