//! SVG bar chart of a report's average series.

use gradebook_core::report::ChartSeries;

use crate::escape;

const BAR_HEIGHT: usize = 30;
const MAX_WIDTH: usize = 400;
const PADDING: usize = 10;
const LABEL_WIDTH: usize = 200;
const TITLE_HEIGHT: usize = 30;

/// Bars are scaled against 100, or against the largest value if that is higher.
fn scale_max(series: &ChartSeries) -> f64 {
    series
        .points
        .iter()
        .map(|p| p.value)
        .fold(100.0, f64::max)
}

fn bar_color(value: f64) -> &'static str {
    if value >= 80.0 {
        "#22c55e"
    } else if value >= 60.0 {
        "#eab308"
    } else {
        "#ef4444"
    }
}

/// Render a horizontal bar chart, one bar per point, in series order.
pub fn generate_bar_chart(series: &ChartSeries, title: &str) -> String {
    let rows = series.points.len().max(1);
    let total_height = TITLE_HEIGHT + rows * (BAR_HEIGHT + PADDING) + PADDING;
    let total_width = LABEL_WIDTH + MAX_WIDTH + 60;
    let max = scale_max(series);

    let mut svg = format!(
        "<svg width=\"{total_width}\" height=\"{total_height}\" xmlns=\"http://www.w3.org/2000/svg\" role=\"img\" aria-label=\"{}\">\n",
        escape(title)
    );
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"20\" font-size=\"16\" font-weight=\"bold\" fill=\"currentColor\" text-anchor=\"middle\">{}</text>\n",
        total_width / 2,
        escape(title)
    ));

    if series.points.is_empty() {
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"middle\">No students</text>\n",
            total_width / 2,
            TITLE_HEIGHT + PADDING + BAR_HEIGHT / 2
        ));
    }

    for (i, point) in series.points.iter().enumerate() {
        let y = TITLE_HEIGHT + i * (BAR_HEIGHT + PADDING) + PADDING;
        let width = (point.value / max * MAX_WIDTH as f64).round() as usize;

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            LABEL_WIDTH - 10,
            y + BAR_HEIGHT / 2,
            escape(&point.label)
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"><title>{}: {:.2}</title></rect>\n",
            LABEL_WIDTH,
            y,
            width,
            BAR_HEIGHT,
            bar_color(point.value),
            escape(&series.name),
            point.value
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{:.2}</text>\n",
            LABEL_WIDTH + width + 8,
            y + BAR_HEIGHT / 2,
            point.value
        ));
    }

    svg.push_str("</svg>\n");
    svg
}
