use chrono::{DateTime, Utc};
use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{
    error::{AppError, MetricError},
    history::HistoryResponse,
    metric::Metric,
    window::FilteredWindow,
};
use crate::services::history_api::{
    Zone, fetch_carbon_intensity_history, fetch_power_breakdown_history,
};

/// Render state of a single metric panel
#[derive(Clone, PartialEq, Debug)]
pub enum PanelState {
    Loading,
    Loaded(Rc<FilteredWindow>),
    Error(MetricError),
}

impl PanelState {
    /// Runs the shaping pipeline and wraps its outcome
    pub fn from_response(
        metric: Metric,
        response: Option<&HistoryResponse>,
        now: DateTime<Utc>,
    ) -> Self {
        match FilteredWindow::from_response(metric, response, now) {
            Ok(window) => Self::Loaded(Rc::new(window)),
            Err(e) => Self::Error(e),
        }
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the window if it is loaded
    pub const fn data(&self) -> Option<&Rc<FilteredWindow>> {
        match self {
            Self::Loaded(window) => Some(window),
            _ => None,
        }
    }

    pub const fn error(&self) -> Option<&MetricError> {
        match self {
            Self::Error(e) => Some(e),
            _ => None,
        }
    }
}

/// Both panels of one render pass
#[derive(Clone, PartialEq, Debug)]
pub struct TimeSeriesState {
    pub carbon_intensity: PanelState,
    pub renewable_percentage: PanelState,
}

impl TimeSeriesState {
    pub const fn loading() -> Self {
        Self {
            carbon_intensity: PanelState::Loading,
            renewable_percentage: PanelState::Loading,
        }
    }

    /// Shapes both fetched responses against the same `now`.
    ///
    /// A failure in one metric never affects the other.
    pub fn from_responses(
        carbon_intensity: Option<&HistoryResponse>,
        power_breakdown: Option<&HistoryResponse>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            carbon_intensity: PanelState::from_response(
                Metric::CarbonIntensity,
                carbon_intensity,
                now,
            ),
            renewable_percentage: PanelState::from_response(
                Metric::RenewablePercentage,
                power_breakdown,
                now,
            ),
        }
    }

    pub const fn panel(&self, metric: Metric) -> &PanelState {
        match metric {
            Metric::CarbonIntensity => &self.carbon_intensity,
            Metric::RenewablePercentage => &self.renewable_percentage,
        }
    }
}

/// Collapses a failed fetch into an absent response, logging the cause
fn absent_on_error(
    metric: Metric,
    result: Result<Option<HistoryResponse>, AppError>,
) -> Option<HistoryResponse> {
    match result {
        Ok(response) => response,
        Err(e) => {
            gloo::console::warn!(format!("Failed to fetch {metric} history: {e}"));
            None
        }
    }
}

#[hook]
pub fn use_time_series(zone: Zone) -> UseStateHandle<TimeSeriesState> {
    let state = use_state(TimeSeriesState::loading);
    let trigger = use_state(|| 0u32); // Polling trigger

    {
        let state = state.clone();
        let trigger_value = *trigger;

        use_effect_with((trigger_value, zone), move |(_, zone)| {
            let state = state.clone();
            let trigger = trigger;
            let zone = zone.clone();
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            spawn_local(async move {
                // Window edge is fixed before either fetch starts
                let now = Utc::now();

                // Sequential: carbon intensity first, then power breakdown
                let carbon = absent_on_error(
                    Metric::CarbonIntensity,
                    fetch_carbon_intensity_history(&zone).await,
                );
                let power = absent_on_error(
                    Metric::RenewablePercentage,
                    fetch_power_breakdown_history(&zone).await,
                );

                if aborted_check.get() {
                    return;
                }

                let next = TimeSeriesState::from_responses(carbon.as_ref(), power.as_ref(), now);
                for metric in Metric::all() {
                    if let Some(e) = next.panel(*metric).error() {
                        gloo::console::warn!(format!("{metric} panel: {e}"));
                    }
                }
                state.set(next);

                // Schedule next poll if enabled
                if crate::config::Config::ENABLE_AUTO_REFRESH && !aborted_check.get() {
                    TimeoutFuture::new(crate::config::Config::POLLING_INTERVAL_MS).await;
                    if !aborted_check.get() {
                        trigger.set(*trigger + 1); // Trigger next fetch
                    }
                }
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
