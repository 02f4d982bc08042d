//! Per-element contrast chart (grouped bars with threshold line)

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisType, Color, ItemStyle, Label, LabelPosition, LineStyle, SplitLine, Symbol,
        TextStyle,
    },
    renderer::ImageFormat,
    series::{Bar, Line},
};

use super::colors::{
    COLOR_BACKGROUND, COLOR_GRID, COLOR_OWN, COLOR_TEXT, COLOR_THRESHOLD, COLOR_WITH_BODY,
};
use super::{CHART_HEIGHT, CHART_WIDTH, ContrastChartData, round2};

/// WCAG maximum contrast ratio, used as the axis ceiling
const MAX_CONTRAST: i32 = 21;

/// Render contrast ratios per element to a PNG file
pub fn render_contrast_chart(
    data: &ContrastChartData,
    threshold: f64,
    output_path: &str,
) -> Result<(), String> {
    if data.elements.is_empty() {
        return Err("No elements to render".to_string());
    }

    let legend_data: Vec<String> = vec![
        "Own colors".to_string(),
        "Body text on background".to_string(),
        format!("Threshold ({})", threshold),
    ];

    let chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .title(
            Title::new()
                .text("Contrast Ratio by Element")
                .subtext(&data.filename)
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
                .left("5%")
                .right("3%")
                .bottom("10%")
                .top("15%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(data.elements.clone())
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(24)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("ratio")
                .max(MAX_CONTRAST)
                .name_text_style(TextStyle::new().color(COLOR_TEXT).font_size(24))
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(20))
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().width(0.5).color(COLOR_GRID)),
                ),
        )
        .series(
            Bar::new()
                .name("Own colors")
                .data(data.own.iter().map(round2).collect::<Vec<f64>>())
                .item_style(ItemStyle::new().color(COLOR_OWN))
                .label(
                    Label::new()
                        .show(true)
                        .position(LabelPosition::Top)
                        .color(COLOR_TEXT)
                        .font_size(18)
                        .formatter("{c}"),
                ),
        )
        .series(
            Bar::new()
                .name("Body text on background")
                .data(data.with_body.iter().map(round2).collect::<Vec<f64>>())
                .item_style(ItemStyle::new().color(COLOR_WITH_BODY))
                .label(
                    Label::new()
                        .show(true)
                        .position(LabelPosition::Top)
                        .color(COLOR_TEXT)
                        .font_size(18)
                        .formatter("{c}"),
                ),
        )
        .series(
            Line::new()
                .name(format!("Threshold ({})", threshold))
                .data(vec![threshold; data.elements.len()])
                .symbol(Symbol::Circle)
                .symbol_size(6)
                .line_style(LineStyle::new().width(2))
                .item_style(ItemStyle::new().color(COLOR_THRESHOLD)),
        );

    // Render to PNG
    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    renderer
        .save_format(ImageFormat::Png, &chart, output_path)
        .map_err(|e| format!("Failed to save chart: {}", e))?;

    Ok(())
}
