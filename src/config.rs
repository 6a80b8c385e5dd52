/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Grid zone rendered by the dashboard (Portugal)
    pub const ZONE: &'static str = "PT";

    /// Length of the rolling history window in hours
    pub const WINDOW_HOURS: i64 = 24;

    /// Target chart size in logical pixels; width follows the container when it has one
    pub const CHART_WIDTH: u32 = 700;
    pub const CHART_HEIGHT: u32 = 400;

    /// Delay before re-rendering charts after the window stops resizing
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;

    /// Enable automatic data refresh polling
    pub const ENABLE_AUTO_REFRESH: bool = true;

    /// Polling interval in milliseconds (10 minutes = 600,000ms)
    pub const POLLING_INTERVAL_MS: u32 = 600_000;

    /// Electricity Maps token baked in at build time, if any
    pub const AUTH_TOKEN: Option<&'static str> = option_env!("ELECTRICITYMAPS_AUTH_TOKEN");
}
