use charming::{
    Chart as CharmingChart,
    component::{Axis, DataZoom, DataZoomType, Grid, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, LineStyle, LineStyleType,
        SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::{Line, Scatter},
};
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::window::FilteredWindow;
use crate::utils::debounce::create_debounced_resize_listener;

const X_AXIS_TITLE: &str = "Time (Last 24 Hours)";

#[derive(Properties, PartialEq)]
pub struct ChartProps {
    pub window: Rc<FilteredWindow>,
}

#[function_component(Chart)]
pub fn chart(props: &ChartProps) -> Html {
    let container_ref = use_node_ref();
    let chart_id = props.window.metric().chart_id();

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (props.window.clone(), container_ref),
            |(window, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    render_chart(&container, window);

                    let window = window.clone();
                    create_debounced_resize_listener(
                        move || render_chart(&container, &window),
                        Config::RESIZE_DEBOUNCE_MS,
                    )
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={chart_id} />
        </div>
    }
}

/// Width follows the container; height is fixed
fn chart_size(container: &HtmlElement) -> (u32, u32) {
    let width = container.client_width().cast_unsigned();
    let width = if width == 0 { Config::CHART_WIDTH } else { width };
    (width, Config::CHART_HEIGHT)
}

fn render_chart(container: &HtmlElement, window: &FilteredWindow) {
    let (width, height) = chart_size(container);
    let chart = build_chart(window);

    if let Err(e) = WasmRenderer::new(width, height).render(window.metric().chart_id(), &chart) {
        web_sys::console::error_1(&JsValue::from_str(&format!("Render error: {e:?}")));
    }
}

/// Builds the layered line + point chart for one metric window.
///
/// Both layers share the categorical x-axis of `DD/MM HH:MM` labels, and the
/// axis-triggered tooltip lists the label with each layer's value.
pub fn build_chart(window: &FilteredWindow) -> CharmingChart {
    let metric = window.metric();
    let (labels, values) = window.series_data();
    let color = metric.color();

    CharmingChart::new()
        .title(
            Title::new()
                .text(metric.chart_title())
                .left("center")
                .text_style(TextStyle::new().font_size(16).color("#1f2937")),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Line)),
        )
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("22%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name(X_AXIS_TITLE)
                .data(labels)
                .axis_label(AxisLabel::new().rotate(45).color("#6b7280")),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(metric.axis_title())
                .axis_label(AxisLabel::new().color("#6b7280"))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color("#e5e7eb")
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        // Pan/zoom over an x interval
        .data_zoom(DataZoom::new().type_(DataZoomType::Inside))
        .data_zoom(DataZoom::new().type_(DataZoomType::Slider))
        .series(
            Line::new()
                .name(metric.axis_title())
                .show_symbol(false)
                .line_style(LineStyle::new().color(color))
                .item_style(ItemStyle::new().color(color))
                .data(values.clone()),
        )
        .series(
            Scatter::new()
                .name(metric.point_title())
                .item_style(ItemStyle::new().color(color))
                .data(values),
        )
}
