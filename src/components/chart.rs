//! Chart Components
//!
//! Bar and line charts over a fixed monthly series, drawn on HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// One labelled point of a chart series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesPoint {
    pub label: &'static str,
    pub value: f64,
}

const BAR_COLOR: &str = "#3B82F6"; // blue-500
const LINE_COLOR: &str = "#10B981"; // emerald-500
const GRID_COLOR: &str = "#374151"; // gray-700
const AXIS_COLOR: &str = "#9CA3AF"; // gray-400
const BACKGROUND: &str = "#111827"; // gray-900

const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;

/// Y-axis bounds for a series: zero-based, padded a tenth above the peak.
fn value_bounds(series: &[SeriesPoint]) -> (f64, f64) {
    let max = series.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() || max <= 0.0 {
        return (0.0, 1.0);
    }
    (0.0, max * 1.1)
}

/// Bar chart over `series`.
#[component]
pub fn BarChart(series: Vec<SeriesPoint>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_bar_chart(&canvas, &series);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="400"
            class="w-full h-64 md:h-80 rounded-lg"
        />
    }
}

/// Line chart over `series`.
#[component]
pub fn LineChart(series: Vec<SeriesPoint>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_line_chart(&canvas, &series);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="400"
            class="w-full h-64 md:h-80 rounded-lg"
        />
    }
}

struct ChartArea {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    chart_width: f64,
    chart_height: f64,
    min: f64,
    max: f64,
}

/// Clear the canvas and draw the grid, y-axis labels and x-axis labels
/// shared by both chart styles.
fn prepare_chart(canvas: &HtmlCanvasElement, series: &[SeriesPoint]) -> Option<ChartArea> {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok()?,
        _ => return None,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    let (min, max) = value_bounds(series);

    // Clear canvas
    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    // Horizontal grid lines with y-axis labels
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = MARGIN_TOP + (f64::from(i) / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = max - (f64::from(i) / 5.0) * (max - min);
        ctx.set_fill_style(&AXIS_COLOR.into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    // X-axis labels, one per point
    ctx.set_fill_style(&AXIS_COLOR.into());
    ctx.set_font("12px sans-serif");
    for (i, point) in series.iter().enumerate() {
        let x = MARGIN_LEFT + slot_center(i, series.len()) * chart_width;
        let _ = ctx.fill_text(point.label, x - 10.0, height - 10.0);
    }

    Some(ChartArea {
        ctx,
        width,
        height,
        chart_width,
        chart_height,
        min,
        max,
    })
}

/// Horizontal center of slot `i` out of `len`, as a 0..1 fraction.
fn slot_center(i: usize, len: usize) -> f64 {
    (i as f64 + 0.5) / len.max(1) as f64
}

fn draw_bar_chart(canvas: &HtmlCanvasElement, series: &[SeriesPoint]) {
    let area = match prepare_chart(canvas, series) {
        Some(area) => area,
        None => return,
    };
    if series.is_empty() {
        draw_empty_notice(&area);
        return;
    }

    let slot = area.chart_width / series.len() as f64;
    let bar_width = slot * 0.6;

    area.ctx.set_fill_style(&BAR_COLOR.into());
    for (i, point) in series.iter().enumerate() {
        let scaled = (point.value - area.min) / (area.max - area.min);
        let bar_height = scaled * area.chart_height;
        let x = MARGIN_LEFT + slot_center(i, series.len()) * area.chart_width - bar_width / 2.0;
        let y = MARGIN_TOP + area.chart_height - bar_height;
        area.ctx.fill_rect(x, y, bar_width, bar_height);
    }
}

fn draw_line_chart(canvas: &HtmlCanvasElement, series: &[SeriesPoint]) {
    let area = match prepare_chart(canvas, series) {
        Some(area) => area,
        None => return,
    };
    if series.is_empty() {
        draw_empty_notice(&area);
        return;
    }

    area.ctx.set_stroke_style(&LINE_COLOR.into());
    area.ctx.set_line_width(2.0);
    area.ctx.begin_path();

    for (i, point) in series.iter().enumerate() {
        let x = MARGIN_LEFT + slot_center(i, series.len()) * area.chart_width;
        let scaled = (point.value - area.min) / (area.max - area.min);
        let y = MARGIN_TOP + area.chart_height - scaled * area.chart_height;

        if i == 0 {
            area.ctx.move_to(x, y);
        } else {
            area.ctx.line_to(x, y);
        }
    }
    area.ctx.stroke();

    // Point markers
    area.ctx.set_fill_style(&LINE_COLOR.into());
    for (i, point) in series.iter().enumerate() {
        let x = MARGIN_LEFT + slot_center(i, series.len()) * area.chart_width;
        let scaled = (point.value - area.min) / (area.max - area.min);
        let y = MARGIN_TOP + area.chart_height - scaled * area.chart_height;

        area.ctx.begin_path();
        let _ = area.ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
        area.ctx.fill();
    }
}

fn draw_empty_notice(area: &ChartArea) {
    area.ctx.set_fill_style(&"#6b7280".into());
    area.ctx.set_font("16px sans-serif");
    let _ = area
        .ctx
        .fill_text("No data", area.width / 2.0 - 30.0, area.height / 2.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_bounds_pads_above_peak() {
        let series = [
            SeriesPoint { label: "Jan", value: 4000.0 },
            SeriesPoint { label: "Feb", value: 6000.0 },
        ];
        let (min, max) = value_bounds(&series);
        assert_eq!(min, 0.0);
        assert!((max - 6600.0).abs() < 1e-9);
    }

    #[test]
    fn test_value_bounds_handles_empty_series() {
        let (min, max) = value_bounds(&[]);
        assert_eq!(min, 0.0);
        assert!(max > min);
    }

    #[test]
    fn test_slot_centers_are_ordered_and_inside() {
        let len = 6;
        let centers: Vec<f64> = (0..len).map(|i| slot_center(i, len)).collect();
        for pair in centers.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(centers[0] > 0.0 && centers[len - 1] < 1.0);
    }
}
