//! Report Charts Component
//!
//! Attendance charts drawn on HTML5 Canvas: a two-slice pie (attended vs
//! missed) and a per-lecturer grouped bar comparison.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::api::types::Report;
use crate::report::{attendance_split, lecturer_bars, max_bar_value, AttendanceSplit, LecturerBars};

const ATTENDED_COLOR: &str = "#4CAF50"; // Green
const MISSED_COLOR: &str = "#F44336"; // Red

/// Visual report: pie + grouped bars redrawn whenever the report changes
#[component]
pub fn ReportCharts(report: RwSignal<Option<Report>>) -> impl IntoView {
    let pie_ref = create_node_ref::<html::Canvas>();
    let bars_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let Some(report) = report.get() else {
            return;
        };

        let split = attendance_split(&report);
        let bars = lecturer_bars(&report.breakdown);

        if let Some(canvas) = pie_ref.get() {
            draw_pie(&canvas, &split);
        }
        if let Some(canvas) = bars_ref.get() {
            draw_bars(&canvas, &bars);
        }
    });

    view! {
        <div class="grid md:grid-cols-2 gap-6">
            <div class="bg-gray-800 rounded-xl p-4">
                <h3 class="font-semibold mb-2">"Overall Attendance"</h3>
                <canvas
                    node_ref=pie_ref
                    width="400"
                    height="300"
                    class="w-full rounded-lg"
                />
                <ChartLegend />
            </div>

            <div class="bg-gray-800 rounded-xl p-4">
                <h3 class="font-semibold mb-2">"Attendance by Lecturer"</h3>
                <canvas
                    node_ref=bars_ref
                    width="400"
                    height="300"
                    class="w-full rounded-lg"
                />
                <ChartLegend />
            </div>
        </div>
    }
}

/// Shared legend for both charts
#[component]
fn ChartLegend() -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            <div class="flex items-center space-x-2">
                <div
                    class="w-3 h-3 rounded-full"
                    style=format!("background-color: {}", ATTENDED_COLOR)
                />
                <span class="text-sm text-gray-300">"Attended"</span>
            </div>
            <div class="flex items-center space-x-2">
                <div
                    class="w-3 h-3 rounded-full"
                    style=format!("background-color: {}", MISSED_COLOR)
                />
                <span class="text-sm text-gray-300">"Missed"</span>
            </div>
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok(),
        _ => None,
    }
}

fn clear(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);
}

fn draw_empty_message(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&"#6b7280".into());
    ctx.set_font("16px sans-serif");
    let _ = ctx.fill_text("No attendance data in this period", width / 2.0 - 110.0, height / 2.0);
}

/// Draw the attended/missed pie
fn draw_pie(canvas: &HtmlCanvasElement, split: &AttendanceSplit) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    clear(&ctx, width, height);

    let total = split.total();
    if total == 0 {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (width.min(height) / 2.0) - 20.0;
    let tau = std::f64::consts::PI * 2.0;

    let attended_angle = split.attended as f64 / total as f64 * tau;

    // Attended slice, starting at 12 o'clock
    let start = -std::f64::consts::FRAC_PI_2;
    ctx.set_fill_style(&ATTENDED_COLOR.into());
    ctx.begin_path();
    ctx.move_to(cx, cy);
    let _ = ctx.arc(cx, cy, radius, start, start + attended_angle);
    ctx.close_path();
    ctx.fill();

    // Missed slice covers the rest
    ctx.set_fill_style(&MISSED_COLOR.into());
    ctx.begin_path();
    ctx.move_to(cx, cy);
    let _ = ctx.arc(cx, cy, radius, start + attended_angle, start + tau);
    ctx.close_path();
    ctx.fill();

    // Counts in the corner
    ctx.set_fill_style(&"#9ca3af".into()); // gray-400
    ctx.set_font("12px sans-serif");
    let _ = ctx.fill_text(&format!("Attended: {}", split.attended), 10.0, height - 26.0);
    let _ = ctx.fill_text(&format!("Missed: {}", split.missed), 10.0, height - 10.0);
}

/// Draw attended/missed bar pairs, one group per lecturer
fn draw_bars(canvas: &HtmlCanvasElement, bars: &[LecturerBars]) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    clear(&ctx, width, height);

    if bars.is_empty() {
        draw_empty_message(&ctx, width, height);
        return;
    }

    // Margins
    let margin_left = 40.0;
    let margin_right = 10.0;
    let margin_top = 20.0;
    let margin_bottom = 50.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    let max_value = max_bar_value(bars) as f64;

    // Horizontal grid lines with y-axis labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max_value - (i as f64 / 5.0) * max_value;
        ctx.set_fill_style(&"#9ca3af".into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    let group_width = chart_width / bars.len() as f64;
    let bar_width = (group_width * 0.3).min(40.0);

    for (idx, group) in bars.iter().enumerate() {
        let group_left = margin_left + idx as f64 * group_width;
        let center = group_left + group_width / 2.0;

        let attended_height = group.attended as f64 / max_value * chart_height;
        let missed_height = group.missed as f64 / max_value * chart_height;

        ctx.set_fill_style(&ATTENDED_COLOR.into());
        ctx.fill_rect(
            center - bar_width - 2.0,
            margin_top + chart_height - attended_height,
            bar_width,
            attended_height,
        );

        ctx.set_fill_style(&MISSED_COLOR.into());
        ctx.fill_rect(
            center + 2.0,
            margin_top + chart_height - missed_height,
            bar_width,
            missed_height,
        );

        // Lecturer label, truncated to keep groups readable
        let label: String = group.lecturer_name.chars().take(12).collect();
        ctx.set_fill_style(&"#9ca3af".into());
        ctx.set_font("11px sans-serif");
        let _ = ctx.fill_text(&label, group_left + 4.0, height - 30.0);
    }
}
