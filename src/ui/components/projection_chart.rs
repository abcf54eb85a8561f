use dioxus::prelude::*;

use crate::domain::{ProjectionPoint, Theme};
use crate::ui::{format::compact_currency, theme};

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 250.0;
const PAD_LEFT: f64 = 64.0;
const PAD_RIGHT: f64 = 24.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 32.0;
const Y_TICKS: usize = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    pub y: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    pub points: Vec<PlotPoint>,
    pub line_path: String,
    pub area_path: String,
    pub baseline_y: f64,
    pub ticks: Vec<AxisTick>,
}

/// Lays the projection out inside a `width` x `height` box. The value axis
/// always includes zero so negative projections sit below the baseline.
pub fn chart_geometry(points: &[ProjectionPoint], width: f64, height: f64) -> ChartGeometry {
    let plot_width = (width - PAD_LEFT - PAD_RIGHT).max(1.0);
    let plot_height = (height - PAD_TOP - PAD_BOTTOM).max(1.0);

    let (mut min, mut max) = points
        .iter()
        .fold((0.0_f64, 0.0_f64), |(lo, hi), p| (lo.min(p.value), hi.max(p.value)));
    if (max - min).abs() < f64::EPSILON {
        max = min + 1.0;
    }
    let headroom = (max - min) * 0.05;
    max += headroom;
    if min < 0.0 {
        min -= headroom;
    }

    let scale_y = |value: f64| PAD_TOP + (max - value) / (max - min) * plot_height;
    let step_x = if points.len() > 1 {
        plot_width / (points.len() - 1) as f64
    } else {
        0.0
    };

    let plotted: Vec<PlotPoint> = points
        .iter()
        .enumerate()
        .map(|(idx, point)| PlotPoint {
            x: PAD_LEFT + step_x * idx as f64,
            y: scale_y(point.value),
            label: point.label(),
        })
        .collect();

    let line_path = plotted
        .iter()
        .enumerate()
        .map(|(idx, p)| {
            let cmd = if idx == 0 { 'M' } else { 'L' };
            format!("{cmd}{:.1},{:.1}", p.x, p.y)
        })
        .collect::<Vec<_>>()
        .join(" ");

    let baseline_y = scale_y(0.0);
    let area_path = match (plotted.first(), plotted.last()) {
        (Some(first), Some(last)) => format!(
            "{line_path} L{:.1},{baseline_y:.1} L{:.1},{baseline_y:.1} Z",
            last.x, first.x
        ),
        _ => String::new(),
    };

    let ticks = (0..=Y_TICKS)
        .map(|i| {
            let value = min + (max - min) * i as f64 / Y_TICKS as f64;
            AxisTick {
                y: scale_y(value),
                label: compact_currency(value),
            }
        })
        .collect();

    ChartGeometry {
        points: plotted,
        line_path,
        area_path,
        baseline_y,
        ticks,
    }
}

#[component]
pub fn ProjectionChart(points: Vec<ProjectionPoint>, theme: Theme) -> Element {
    let geometry = chart_geometry(&points, WIDTH, HEIGHT);
    let palette = theme::chart_palette(theme);
    let view_box = format!("0 0 {WIDTH} {HEIGHT}");
    let left = format!("{PAD_LEFT:.1}");
    let right = format!("{:.1}", WIDTH - PAD_RIGHT);
    let tick_x = format!("{:.1}", PAD_LEFT - 8.0);
    let label_y = format!("{:.1}", HEIGHT - 8.0);

    let ticks = geometry
        .ticks
        .iter()
        .map(|tick| (format!("{:.1}", tick.y), tick.label.clone()))
        .collect::<Vec<_>>();
    let markers = geometry
        .points
        .iter()
        .map(|point| {
            (
                format!("{:.1}", point.x),
                format!("{:.1}", point.y),
                point.label.clone(),
            )
        })
        .collect::<Vec<_>>();

    rsx! {
        div {
            class: "{theme::panel(theme)} chart-panel",
            h3 { class: "kpi-title", "5-Year Projection" }
            svg {
                class: "chart-svg",
                width: "100%",
                "viewBox": "{view_box}",
                for (y, label) in ticks {
                    line {
                        "x1": "{left}",
                        "x2": "{right}",
                        "y1": "{y}",
                        "y2": "{y}",
                        stroke: "{palette.grid}",
                    }
                    text {
                        "x": "{tick_x}",
                        "y": "{y}",
                        fill: "{palette.axis}",
                        "text-anchor": "end",
                        "font-size": "11",
                        "{label}"
                    }
                }
                path {
                    d: "{geometry.area_path}",
                    fill: "{palette.fill}",
                    "fill-opacity": "0.25",
                }
                path {
                    class: "chart-line",
                    d: "{geometry.line_path}",
                    fill: "none",
                    stroke: "{palette.stroke}",
                    "stroke-width": "3",
                }
                for (x, y, label) in markers {
                    circle {
                        "cx": "{x}",
                        "cy": "{y}",
                        "r": "4",
                        fill: "{palette.stroke}",
                    }
                    text {
                        "x": "{x}",
                        "y": "{label_y}",
                        fill: "{palette.axis}",
                        "text-anchor": "middle",
                        "font-size": "12",
                        "{label}"
                    }
                }
            }
        }
    }
}
