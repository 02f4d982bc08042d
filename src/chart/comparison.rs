//! Comparison chart rendering (headline metrics per snapshot)

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisType, Color, ColorStop, ItemStyle, Label, LabelPosition, LineStyle,
        SplitLine, TextStyle,
    },
    renderer::ImageFormat,
    series::Bar,
};

use super::colors::{COLOR_BACKGROUND, COLOR_GRID, COLOR_SETS, COLOR_TEXT};
use super::{CHART_HEIGHT, CHART_WIDTH, ReportChartData, round2};

/// Render a comparison chart to a PNG file (supports 2-4 snapshots)
pub fn render_comparison_chart(
    files: &[ReportChartData],
    metric_titles: &[String],
    output_path: &str,
) -> Result<(), String> {
    if files.len() < 2 || files.len() > COLOR_SETS.len() {
        return Err(format!("Chart requires 2-{} files", COLOR_SETS.len()));
    }

    // Two-line axis labels: "Navigation\nContrast"
    let axis_labels: Vec<String> = metric_titles
        .iter()
        .map(|t| match t.rsplit_once(' ') {
            Some((head, tail)) => format!("{}\n{}", head, tail),
            None => t.clone(),
        })
        .collect();

    // Build subtitle showing all files
    let subtitle = files
        .iter()
        .map(|f| format!("[{}] {}", f.label, f.name))
        .collect::<Vec<_>>()
        .join("  vs  ");

    let legend_data: Vec<(String, String)> = files
        .iter()
        .map(|f| (format!("[{}]", f.label), "rect".to_string()))
        .collect();

    // Create base chart
    let mut chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .title(
            Title::new()
                .text("Color Grading Comparison")
                .subtext(subtitle)
                .left("center")
                .top("3%")
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(36))
                .subtext_style(TextStyle::new().color(COLOR_TEXT).font_size(24)),
        )
        .legend(
            Legend::new()
                .data(legend_data)
                .bottom("3%")
                .item_gap(40)
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(24)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("3%")
                .bottom("7%")
                .top("15%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(axis_labels)
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(22)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(24))
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().width(0.5).color(COLOR_GRID)),
                ),
        );

    for (i, file) in files.iter().enumerate() {
        let colors = &COLOR_SETS[i];
        let values: Vec<f64> = file.values.iter().map(round2).collect();

        chart = chart.series(
            Bar::new()
                .name(format!("[{}]", file.label))
                .data(values)
                .item_style(
                    ItemStyle::new()
                        .color(Color::LinearGradient {
                            x: 0.0,
                            y: 0.0,
                            x2: 0.0,
                            y2: 1.0,
                            color_stops: vec![
                                ColorStop::new(0.0, colors.top),
                                ColorStop::new(1.0, colors.bottom),
                            ],
                        })
                        .opacity(0.9),
                )
                .label(
                    Label::new()
                        .show(true)
                        .position(LabelPosition::Top)
                        .color(COLOR_TEXT)
                        .font_size(18)
                        .formatter("{c}"),
                ),
        );
    }

    // Render to PNG
    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    renderer
        .save_format(ImageFormat::Png, &chart, output_path)
        .map_err(|e| format!("Failed to save chart: {}", e))?;

    Ok(())
}
