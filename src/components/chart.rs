use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AreaStyle, AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, LineStyle,
        LineStyleType, SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::{Bar, Line, Scatter},
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::utils::debounce::on_resize_settled;
use crate::view_models::{BarChart, ChartSpec, LineChart, ScatterChart};

const TITLE_COLOR: &str = "#1f2937";
const AXIS_COLOR: &str = "#6b7280";
const GRID_COLOR: &str = "#e5e7eb";

// Series colors, applied in dataset order
const PALETTE: [&str; 8] = [
    "#4bc0c0", // teal
    "#ff6384", // pink
    "#36a2eb", // blue
    "#ffce56", // yellow
    "#9966ff", // purple
    "#ff9f40", // orange
    "#003087", // navy
    "#ffd700", // gold
];

#[derive(Properties, PartialEq)]
pub struct ChartProps {
    /// DOM id of the render target; must be unique on the page.
    pub id: AttrValue,
    pub spec: Rc<ChartSpec>,
}

#[function_component(Chart)]
pub fn chart(props: &ChartProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (props.spec.clone(), props.id.clone(), container_ref),
            |(spec, id, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    let chart = build_chart(spec);
                    render_chart(&container, id, &chart);

                    let id = id.clone();
                    on_resize_settled(
                        move || render_chart(&container, &id, &chart),
                        Config::RESIZE_DEBOUNCE_MS,
                    )
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={props.id.clone()} role="img" aria-label={props.spec.title().to_string()} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, id: &str, chart: &CharmingChart) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    if let Err(e) = WasmRenderer::new(width, height).render(id, chart) {
        gloo::console::error!(&format!("Render error for #{id}: {e:?}"));
    }
}

/// Translates a chart view model into a charming chart.
pub fn build_chart(spec: &ChartSpec) -> CharmingChart {
    match spec {
        ChartSpec::Bar(bar) => build_bar(bar),
        ChartSpec::Line(line) => build_line(line),
        ChartSpec::Scatter(scatter) => build_scatter(scatter),
    }
}

fn build_bar(bar: &BarChart) -> CharmingChart {
    let chart = base_chart(&bar.title, Trigger::Axis)
        .x_axis(category_axis(&bar.axes.x, &bar.categories))
        .y_axis(value_axis(&bar.axes.y));

    bar.datasets.iter().fold(chart, |chart, dataset| {
        chart.series(
            Bar::new()
                .name(dataset.label.clone())
                .data(dataset.values.clone()),
        )
    })
}

fn build_line(line: &LineChart) -> CharmingChart {
    let mut series = Line::new()
        .name(line.dataset.label.clone())
        .data(line.dataset.values.clone())
        .smooth(true);
    if line.area {
        series = series.area_style(AreaStyle::new());
    }

    base_chart(&line.title, Trigger::Axis)
        .x_axis(category_axis(&line.axes.x, &line.categories))
        .y_axis(value_axis(&line.axes.y))
        .series(series)
}

fn build_scatter(scatter: &ScatterChart) -> CharmingChart {
    let chart = base_chart(&scatter.title, Trigger::Item)
        .x_axis(value_axis(&scatter.axes.x).scale(true))
        .y_axis(value_axis(&scatter.axes.y).scale(true));

    scatter.groups.iter().fold(chart, |chart, group| {
        let points: Vec<Vec<f64>> = group.points.iter().map(|(x, y)| vec![*x, *y]).collect();
        chart.series(
            Scatter::new()
                .name(group.label.clone())
                .symbol_size(8)
                .data(points),
        )
    })
}

fn base_chart(title: &str, trigger: Trigger) -> CharmingChart {
    let tooltip = match trigger {
        Trigger::Axis => Tooltip::new()
            .trigger(Trigger::Axis)
            .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        other => Tooltip::new().trigger(other),
    };

    CharmingChart::new()
        .color(PALETTE.iter().map(|c| Color::from(*c)).collect())
        .title(
            Title::new()
                .text(title)
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(TITLE_COLOR)),
        )
        .legend(Legend::new().bottom("0"))
        .tooltip(tooltip)
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("15%")
                .contain_label(true),
        )
}

fn category_axis(name: &str, categories: &[String]) -> Axis {
    Axis::new()
        .type_(AxisType::Category)
        .name(name)
        .data(categories.to_vec())
        .axis_label(AxisLabel::new().color(AXIS_COLOR))
}

fn value_axis(name: &str) -> Axis {
    Axis::new()
        .type_(AxisType::Value)
        .name(name)
        .axis_label(AxisLabel::new().color(AXIS_COLOR))
        .split_line(
            SplitLine::new().line_style(
                LineStyle::new()
                    .color(GRID_COLOR)
                    .type_(LineStyleType::Dashed),
            ),
        )
}
