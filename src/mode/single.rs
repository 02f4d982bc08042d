//! Single snapshot grading mode

use colorgrade::grading::GradingOptions;
use colorgrade::style::BODY;

use crate::chart;
use crate::output::{
    label_width, print_captions, print_error, print_legend, print_metrics_header, print_metrics_row,
    print_metrics_separator, print_score, print_snapshot_info, print_usage,
};

use super::{grade_or_exit, print_json};

/// Grade one snapshot and print its report
pub fn run_single(
    path: &str,
    options: &GradingOptions,
    quiet: bool,
    json: bool,
    image_path: Option<&str>,
) {
    let graded = grade_or_exit(path, options);

    if json {
        print_json(&graded.report);
    } else {
        if !quiet {
            println!("Color Grading");
            print_snapshot_info(&graded.source, graded.elements.len(), options);
        }

        // body first, then the rest in scraper order
        let mut rows: Vec<&str> = Vec::with_capacity(graded.elements.len());
        if graded.elements.body().is_some() {
            rows.push(BODY);
        }
        rows.extend(graded.elements.others().map(|(name, _)| name));

        let width = label_width(rows.iter().copied());

        println!("[Contrast & Harmony]");
        print_metrics_header(width);
        print_metrics_separator(width);
        for element in &rows {
            let metrics = graded.grading.element_metrics(element);
            if quiet && metrics.is_empty() {
                continue;
            }
            print_metrics_row(element, width, &metrics, &options.thresholds);
        }

        println!();
        println!("[Color Usage]");
        print_usage(&graded.report.color_usage_details);

        println!();
        println!("[Score]");
        print_score("", &graded.report.score_report);

        if !quiet {
            println!();
            print_legend();
            println!();
            print_captions(&graded.report.one_liner_data);
        }
    }

    // Output chart if requested
    if let Some(path) = image_path {
        let chart_data = chart::ContrastChartData::from_snapshot(&graded);

        if let Err(e) = chart::render_contrast_chart(&chart_data, options.thresholds.contrast, path)
        {
            print_error(&e);
            std::process::exit(1);
        } else {
            eprintln!("Chart saved to: {}", path);
        }
    }
}
