use dioxus::prelude::*;
use prices::{format_cad, ChartSeries, Lang};

use crate::chart::{area_path, line_path, truncate, y_ticks, Frame};

const TICK_TARGET: usize = 4;
const BAR_FILL: f64 = 0.7;
const BAR_LABEL_CHARS: usize = 18;

/// One plotted category: where it sits and what the tooltip says.
#[derive(Debug, Clone, PartialEq)]
struct Mark {
    label: String,
    value_text: String,
    x: f64,
    y: f64,
}

fn layout_marks(series: &ChartSeries, frame: &Frame, axis_max: f64, lang: Lang) -> Vec<Mark> {
    let count = series.len();
    series
        .points()
        .enumerate()
        .map(|(i, (label, value))| Mark {
            label: label.to_string(),
            value_text: format_cad(value, lang),
            x: frame.x_center(i, count),
            y: frame.y_of(value, axis_max),
        })
        .collect()
}

fn axis_max(ticks: &[f64]) -> f64 {
    ticks.last().copied().unwrap_or(1.0)
}

/// Month-indexed line chart with a filled area under the line.
#[component]
pub fn LineChart(series: ChartSeries, lang: Lang) -> Element {
    let mut hovered = use_signal(|| None::<usize>);

    let frame = Frame::default();
    let ticks = y_ticks(series.max_value(), TICK_TARGET);
    let marks = layout_marks(&series, &frame, axis_max(&ticks), lang);
    let points: Vec<(f64, f64)> = marks.iter().map(|m| (m.x, m.y)).collect();
    let line = line_path(&points);
    let area = area_path(&points, frame.baseline());
    let label_y = frame.baseline() + 24.0;
    let active = hovered().and_then(|i| marks.get(i).cloned());

    rsx! {
        div { class: "chart_container",
            svg {
                class: "chart chart_line",
                "viewBox": frame.view_box(),
                "role": "img",
                "aria-label": "{series.caption}",
                YAxis { frame, ticks, lang }
                path { class: "chart_area", "d": area }
                path { class: "chart_line_path", "d": line }
                for (i, mark) in marks.iter().enumerate() {
                    g { key: "{i}",
                        text {
                            class: "chart_x_label",
                            "x": mark.x,
                            "y": label_y,
                            "text-anchor": "middle",
                            "{mark.label}"
                        }
                        circle {
                            class: "chart_point",
                            "cx": mark.x,
                            "cy": mark.y,
                            "r": "5",
                            onmouseenter: move |_| hovered.set(Some(i)),
                            onmouseleave: move |_| hovered.set(None),
                        }
                    }
                }
            }
            ChartTooltip { frame, mark: active }
        }
    }
}

/// Item-indexed bar chart.
#[component]
pub fn BarChart(series: ChartSeries, lang: Lang) -> Element {
    let mut hovered = use_signal(|| None::<usize>);

    let frame = Frame::default().with_bottom(112.0);
    let ticks = y_ticks(series.max_value(), TICK_TARGET);
    let marks = layout_marks(&series, &frame, axis_max(&ticks), lang);
    let bar_width = frame.slot_width(marks.len()) * BAR_FILL;
    let baseline = frame.baseline();
    let label_y = baseline + 12.0;
    let active = hovered().and_then(|i| marks.get(i).cloned());

    rsx! {
        div { class: "chart_container",
            svg {
                class: "chart chart_bar",
                "viewBox": frame.view_box(),
                "role": "img",
                "aria-label": "{series.caption}",
                YAxis { frame, ticks, lang }
                for (i, mark) in marks.iter().enumerate() {
                    g { key: "{i}",
                        rect {
                            class: if hovered() == Some(i) { "chart_bar_rect active" } else { "chart_bar_rect" },
                            "x": mark.x - bar_width / 2.0,
                            "y": mark.y,
                            "width": bar_width,
                            "height": baseline - mark.y,
                            onmouseenter: move |_| hovered.set(Some(i)),
                            onmouseleave: move |_| hovered.set(None),
                        }
                        text {
                            class: "chart_x_label",
                            "x": mark.x,
                            "y": label_y,
                            "text-anchor": "end",
                            "transform": format!("rotate(-40 {:.1} {label_y:.1})", mark.x),
                            {truncate(&mark.label, BAR_LABEL_CHARS)}
                        }
                    }
                }
            }
            ChartTooltip { frame, mark: active }
        }
    }
}

/// Horizontal grid lines with currency tick labels.
#[component]
fn YAxis(frame: Frame, ticks: Vec<f64>, lang: Lang) -> Element {
    let top = axis_max(&ticks);
    let left = frame.left;
    let right = frame.plot_right();
    let label_x = frame.left - 8.0;

    rsx! {
        g { class: "chart_y_axis",
            for (i, tick) in ticks.iter().copied().enumerate() {
                g { key: "{i}",
                    line {
                        class: if i == 0 { "chart_axis_line" } else { "chart_grid_line" },
                        "x1": left,
                        "x2": right,
                        "y1": frame.y_of(tick, top),
                        "y2": frame.y_of(tick, top),
                    }
                    text {
                        class: "chart_y_label",
                        "x": label_x,
                        "y": frame.y_of(tick, top) + 4.0,
                        "text-anchor": "end",
                        {format_cad(tick, lang)}
                    }
                }
            }
        }
    }
}

#[component]
fn ChartTooltip(frame: Frame, mark: Option<Mark>) -> Element {
    let Some(mark) = mark else {
        return rsx! {};
    };
    let left = mark.x / frame.width * 100.0;
    let top = mark.y / frame.height * 100.0;

    rsx! {
        div {
            class: "chart_tooltip",
            role: "tooltip",
            style: "left: {left:.2}%; top: {top:.2}%;",
            div { class: "chart_tooltip_title", "{mark.label}" }
            div { class: "chart_tooltip_body", "{mark.value_text}" }
        }
    }
}
