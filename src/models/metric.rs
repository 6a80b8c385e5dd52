use serde::{Deserialize, Serialize};

/// Grid metric plotted by the time-series panels.
///
/// Each variant carries everything the shared pipeline needs: the field to
/// read from history records, the short column label, colours and wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Grid-average emission rate (gCO₂/kWh)
    CarbonIntensity,
    /// Share of generated power from renewable sources (0-100)
    RenewablePercentage,
}

impl Metric {
    /// All metrics in the order they are rendered
    pub fn all() -> &'static [Metric] {
        &[Metric::CarbonIntensity, Metric::RenewablePercentage]
    }

    /// Field name in the API history records
    pub const fn field(&self) -> &'static str {
        match self {
            Metric::CarbonIntensity => "carbonIntensity",
            Metric::RenewablePercentage => "renewablePercentage",
        }
    }

    /// Lowercase name used in user-facing messages
    pub const fn display_name(&self) -> &'static str {
        match self {
            Metric::CarbonIntensity => "carbon intensity",
            Metric::RenewablePercentage => "renewable percentage",
        }
    }

    /// Line and marker colour
    pub const fn color(&self) -> &'static str {
        match self {
            Metric::CarbonIntensity => "green",
            Metric::RenewablePercentage => "blue",
        }
    }

    pub const fn chart_title(&self) -> &'static str {
        match self {
            Metric::CarbonIntensity => "Carbon Intensity Over the Last 24 Hours",
            Metric::RenewablePercentage => "Renewable Percentage Over the Last 24 Hours",
        }
    }

    /// Y-axis title, also used for the line layer tooltip
    pub const fn axis_title(&self) -> &'static str {
        match self {
            Metric::CarbonIntensity => "Carbon Intensity (gCO₂/kWh)",
            Metric::RenewablePercentage => "Renewable Percentage (%)",
        }
    }

    /// Compact tooltip title for the point layer
    pub const fn point_title(&self) -> &'static str {
        match self {
            Metric::CarbonIntensity => "CI (gCO₂/kWh)",
            Metric::RenewablePercentage => "RP (%)",
        }
    }

    /// DOM id of the element the chart is rendered into
    pub const fn chart_id(&self) -> &'static str {
        match self {
            Metric::CarbonIntensity => "carbon-intensity-chart",
            Metric::RenewablePercentage => "renewable-percentage-chart",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
