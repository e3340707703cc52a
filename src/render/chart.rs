//! Line Chart
//!
//! GDP-over-time chart rendered as inline SVG, so pages stay a single
//! self-contained HTML document.

use std::fmt::Write;

use super::escape_html;
use crate::format::format_money;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 320.0;

// Margins leave room for the axis labels
const MARGIN_LEFT: f64 = 84.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 52.0;

const Y_TICKS: usize = 5;
const MAX_X_LABELS: usize = 10;

const LINE_COLOR: &str = "#2563eb";
const GRID_COLOR: &str = "rgba(0,0,0,0.08)";
const LABEL_COLOR: &str = "rgba(15,15,15,0.75)";

/// Render `(year, gdp_usd)` points, already sorted by year, as an SVG line chart
///
/// Returns `None` when there are no points.
pub fn line_chart(points: &[(i32, f64)]) -> Option<String> {
    let first = points.first()?;
    let last = points.last()?;

    let chart_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

    // Pad the y range so the line never touches the frame
    let mut y_min = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let mut y_max = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
    let y_range = y_max - y_min;
    let y_padding = if y_range > 0.0 { y_range * 0.1 } else { y_max.abs() * 0.1 };
    y_min -= y_padding;
    y_max += y_padding;
    if y_min == y_max {
        y_min -= 1.0;
        y_max += 1.0;
    }

    let (x_min, x_max) = (first.0 as f64, last.0 as f64);
    let x_of = |year: i32| {
        if x_max > x_min {
            MARGIN_LEFT + (year as f64 - x_min) / (x_max - x_min) * chart_width
        } else {
            MARGIN_LEFT + chart_width / 2.0
        }
    };
    let y_of = |value: f64| MARGIN_TOP + (y_max - value) / (y_max - y_min) * chart_height;

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg class="line-chart" viewBox="0 0 {WIDTH} {HEIGHT}" width="100%" role="img" aria-label="GDP (USD) by year" xmlns="http://www.w3.org/2000/svg">"#
    );

    // Horizontal grid lines with money labels
    for i in 0..=Y_TICKS {
        let value = y_min + (y_max - y_min) * i as f64 / Y_TICKS as f64;
        let y = y_of(value);
        let _ = write!(
            svg,
            r#"<line x1="{MARGIN_LEFT}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="{GRID_COLOR}"/>"#,
            WIDTH - MARGIN_RIGHT
        );
        let _ = write!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="end" font-size="11" fill="{LABEL_COLOR}">{}</text>"#,
            MARGIN_LEFT - 8.0,
            y + 4.0,
            escape_html(&format_money(Some(value)))
        );
    }

    // Year labels, thinned when crowded
    let step = points.len().div_ceil(MAX_X_LABELS).max(1);
    for (year, _) in points.iter().step_by(step) {
        let _ = write!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="11" fill="{LABEL_COLOR}">{year}</text>"#,
            x_of(*year),
            HEIGHT - MARGIN_BOTTOM + 18.0
        );
    }

    // Axis titles
    let _ = write!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="12" fill="{LABEL_COLOR}">Year</text>"#,
        MARGIN_LEFT + chart_width / 2.0,
        HEIGHT - 8.0
    );
    let _ = write!(
        svg,
        r#"<text x="14" y="{:.1}" text-anchor="middle" font-size="12" fill="{LABEL_COLOR}" transform="rotate(-90 14 {:.1})">GDP (USD)</text>"#,
        MARGIN_TOP + chart_height / 2.0,
        MARGIN_TOP + chart_height / 2.0
    );

    // Series
    let coords: Vec<String> = points
        .iter()
        .map(|(year, value)| format!("{:.1},{:.1}", x_of(*year), y_of(*value)))
        .collect();
    let _ = write!(
        svg,
        r#"<polyline fill="none" stroke="{LINE_COLOR}" stroke-width="2.5" points="{}"/>"#,
        coords.join(" ")
    );

    for (year, value) in points {
        let _ = write!(
            svg,
            r#"<circle cx="{:.1}" cy="{:.1}" r="4" fill="{LINE_COLOR}"><title>{year}: {}</title></circle>"#,
            x_of(*year),
            y_of(*value),
            escape_html(&format_money(Some(*value)))
        );
    }

    svg.push_str("</svg>");
    Some(svg)
}
