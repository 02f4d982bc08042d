//! Multiple snapshot comparison mode

use colored::*;

use colorgrade::grading::GradingOptions;

use crate::chart;
use crate::output::{
    print_captions, print_diff_row_styled, print_error, print_header, print_row_styled,
    print_score, print_separator, short_metric_label,
};

use super::{SourcedReport, grade_or_exit, print_json};

/// Width of the `[A] Value ` row prefix
const PREFIX_WIDTH: usize = 10;

/// Grade several snapshots and compare them against the first
pub fn run_compare(
    paths: &[String],
    options: &GradingOptions,
    quiet: bool,
    json: bool,
    image_path: Option<&str>,
) {
    let labels: Vec<char> = ('A'..='Z').collect();

    let graded: Vec<_> = paths.iter().map(|p| grade_or_exit(p, options)).collect();

    if json {
        let reports: Vec<SourcedReport> = graded
            .iter()
            .map(|g| SourcedReport {
                source: &g.source,
                report: &g.report,
            })
            .collect();
        print_json(&reports);
    } else {
        println!("Comparison (base: [A]):");
        for (i, g) in graded.iter().enumerate() {
            let label = format!("[{}]", labels[i]);
            println!("  {} {} ({})", label.bold(), g.name, g.source);
        }
        println!();

        let columns: Vec<String> = graded[0]
            .report
            .numerical_data
            .keys()
            .map(|k| short_metric_label(k))
            .collect();
        let column_refs: Vec<&str> = columns.iter().map(String::as_str).collect();
        let values: Vec<Vec<f64>> = graded.iter().map(|g| g.report.headline_values()).collect();

        println!("[Headline Metrics]");
        print_header(&column_refs, "", PREFIX_WIDTH);
        print_separator(columns.len(), PREFIX_WIDTH);

        let ref_label = format!("[{}]", labels[0]);
        print_row_styled(&ref_label, " Value ", &values[0]);

        for (i, v) in values.iter().enumerate().skip(1) {
            print_separator(columns.len(), PREFIX_WIDTH);
            let label = format!("[{}]", labels[i]);
            print_row_styled(&label, " Value ", v);
            let diff_label = format!("{}-A", labels[i]);
            print_diff_row_styled(&diff_label, "       ", &values[0], v);
        }

        println!();
        println!("[Score]");
        for (i, g) in graded.iter().enumerate() {
            print_score(&format!("  [{}] ", labels[i]), &g.report.score_report);
        }
        for (i, g) in graded.iter().enumerate().skip(1) {
            let diff = g.report.total_score - graded[0].report.total_score;
            println!("  {}-A  Score diff: {:+.2}", labels[i], diff);
        }

        if !quiet {
            println!();
            print_captions(&graded[0].report.one_liner_data);
        }
    }

    // Output chart image if requested
    if let Some(path) = image_path {
        let file_data: Vec<chart::ReportChartData> = graded
            .iter()
            .enumerate()
            .map(|(i, g)| chart::ReportChartData {
                label: labels[i],
                name: g.name.clone(),
                values: g.report.headline_values(),
            })
            .collect();
        let titles: Vec<String> = graded[0]
            .report
            .numerical_data
            .values()
            .map(|e| e.title.clone())
            .collect();

        if let Err(e) = chart::render_comparison_chart(&file_data, &titles, path) {
            print_error(&e);
            std::process::exit(1);
        } else {
            eprintln!("Chart saved to: {}", path);
        }
    }
}
