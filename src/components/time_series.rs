use yew::prelude::*;

use crate::components::metric_panel::MetricPanel;
use crate::hooks::use_time_series::use_time_series;
use crate::models::metric::Metric;
use crate::services::history_api::Zone;

#[derive(Properties, PartialEq)]
pub struct TimeSeriesProps {
    #[prop_or_default]
    pub zone: Zone,
}

/// "Time Series Data" section: one panel per metric, each failing on its own.
#[function_component(TimeSeries)]
pub fn time_series(props: &TimeSeriesProps) -> Html {
    let state = use_time_series(props.zone.clone());

    html! {
        <div class="time-series">
            <hr />
            <h2>{"Time Series Data"}</h2>
            {
                Metric::all().iter().map(|metric| {
                    html! {
                        <MetricPanel
                            key={metric.field()}
                            metric={*metric}
                            state={state.panel(*metric).clone()}
                        />
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
