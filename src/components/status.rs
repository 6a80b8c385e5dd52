use crate::hooks::use_time_series::PanelState;
use crate::models::metric::Metric;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub metric: Metric,
    pub state: PanelState,
}

/// Loading and error placeholder shown where a chart would go
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    match &props.state {
        PanelState::Loading => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{format!("Loading {} data...", props.metric)}</p>
            </div>
        },
        PanelState::Loaded(_) => html! {},
        PanelState::Error(e) => html! {
            <div class="status error" role="alert">
                <p>{e.to_string()}</p>
            </div>
        },
    }
}
