use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend},
    datatype::DataPointItem,
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, Label, LineStyle,
        LineStyleType, SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::{Bar, Pie},
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::hooks::use_theme::Theme;
use crate::models::{comparison::CostBar, explorer::ProviderSlice};
use crate::utils::debounce::debounced_resize;

const PROVIDER_CHART_ID: &str = "provider-chart";
const COST_CHART_ID: &str = "cost-chart";

const USER_BAR_COLOR: &str = "#2563eb";
const COMMUNITY_BAR_COLOR: &str = "#94a3b8";

struct Palette {
    text: &'static str,
    axis: &'static str,
    grid: &'static str,
}

const fn palette(dark_mode: bool) -> Palette {
    if dark_mode {
        Palette {
            text: "#e4e4e7",
            axis: "#a1a1aa",
            grid: "#404040",
        }
    } else {
        Palette {
            text: "#1f2937",
            axis: "#6b7280",
            grid: "#e5e7eb",
        }
    }
}

fn is_dark(theme: Option<Theme>) -> bool {
    theme.is_some_and(Theme::is_dark)
}

/// Renders `build` into the element `chart_id` now and after every resize.
#[hook]
fn use_chart<D, B>(chart_id: &'static str, data: Rc<D>, build: B) -> NodeRef
where
    D: PartialEq + 'static,
    B: Fn(&D, bool) -> CharmingChart + 'static,
{
    let container_ref = use_node_ref();
    let dark_mode = is_dark(use_context::<Theme>());

    {
        let container_ref = container_ref.clone();

        use_effect_with((data, dark_mode), move |(data, dark_mode)| {
            let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                let chart = Rc::new(build(data.as_ref(), *dark_mode));
                render_chart(&container, chart_id, &chart);

                debounced_resize(
                    move || render_chart(&container, chart_id, &chart),
                    Config::CHART_RESIZE_DEBOUNCE_MS,
                )
            });

            move || drop(listener)
        });
    }

    container_ref
}

fn render_chart(container: &HtmlElement, chart_id: &str, chart: &CharmingChart) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    if let Err(e) = WasmRenderer::new(width, height).render(chart_id, chart) {
        web_sys::console::error_1(&format!("Render error in {chart_id}: {e:?}").into());
    }
}

#[derive(Properties, PartialEq)]
pub struct ProviderChartProps {
    pub slices: Rc<Vec<ProviderSlice>>,
}

/// Pie chart of bills per provider.
#[function_component(ProviderChart)]
pub fn provider_chart(props: &ProviderChartProps) -> Html {
    let container_ref = use_chart(PROVIDER_CHART_ID, props.slices.clone(), build_provider_chart);

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={PROVIDER_CHART_ID} />
        </div>
    }
}

#[allow(clippy::ptr_arg)]
fn build_provider_chart(slices: &Vec<ProviderSlice>, dark_mode: bool) -> CharmingChart {
    let colors = palette(dark_mode);

    let data: Vec<DataPointItem> = slices
        .iter()
        .map(|slice| {
            DataPointItem::new(slice.value)
                .name(slice.label())
                .item_style(ItemStyle::new().color(slice.color))
        })
        .collect();

    CharmingChart::new()
        .tooltip(Tooltip::new().trigger(Trigger::Item).formatter("{b}: {c}"))
        .legend(
            Legend::new()
                .bottom("0")
                .text_style(TextStyle::new().color(colors.text)),
        )
        .series(
            Pie::new()
                .name("Providers")
                .radius("65%")
                .center(vec!["50%", "45%"])
                .label(Label::new().show(true).formatter("{b}").color(colors.text))
                .data(data),
        )
}

#[derive(Properties, PartialEq)]
pub struct CostChartProps {
    pub bars: Rc<Vec<CostBar>>,
}

/// Bar chart of the user's cost per unit against the community figures.
#[function_component(CostChart)]
pub fn cost_chart(props: &CostChartProps) -> Html {
    let container_ref = use_chart(COST_CHART_ID, props.bars.clone(), build_cost_chart);

    html! {
        <div class="chart-container small" ref={container_ref}>
            <div id={COST_CHART_ID} />
        </div>
    }
}

#[allow(clippy::ptr_arg)]
fn build_cost_chart(bars: &Vec<CostBar>, dark_mode: bool) -> CharmingChart {
    let colors = palette(dark_mode);

    let labels: Vec<String> = bars.iter().map(|b| b.label.to_string()).collect();
    let data: Vec<DataPointItem> = bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let color = if i == 0 {
                USER_BAR_COLOR
            } else {
                COMMUNITY_BAR_COLOR
            };
            DataPointItem::new(bar.value).item_style(ItemStyle::new().color(color))
        })
        .collect();

    CharmingChart::new()
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(labels)
                .axis_label(AxisLabel::new().color(colors.axis)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("₹/unit")
                .axis_label(AxisLabel::new().color(colors.axis))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(colors.grid)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(Bar::new().data(data).bar_width("50%"))
}
