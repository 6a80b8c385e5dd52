use yew::prelude::*;

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod utils;

use components::TimeSeries;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Portugal Electricity Grid"}</h1>
            </header>

            <main class="app-main">
                <TimeSeries />
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

/// Mounts the time-series page into the document body.
///
/// Each call fetches fresh history for both metrics.
pub fn render_time_series() {
    yew::Renderer::<App>::new().render();
}
