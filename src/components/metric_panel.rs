use yew::prelude::*;

use crate::components::{chart::Chart, status::Status};
use crate::hooks::use_time_series::PanelState;
use crate::models::metric::Metric;

#[derive(Properties, PartialEq)]
pub struct MetricPanelProps {
    pub metric: Metric,
    pub state: PanelState,
}

/// One metric's chart, or its inline status when there is nothing to plot
#[function_component(MetricPanel)]
pub fn metric_panel(props: &MetricPanelProps) -> Html {
    html! {
        <section class="metric-panel">
            if let Some(window) = props.state.data() {
                <Chart window={window.clone()} />
            } else {
                <Status metric={props.metric} state={props.state.clone()} />
            }
        </section>
    }
}
