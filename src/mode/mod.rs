//! CLI mode implementations

mod compare;
mod single;

pub use compare::run_compare;
pub use single::run_single;

use serde::Serialize;
use tracing::info;

use colorgrade::grading::{ColorGrading, FullReport, GradingOptions, color_grading_with};
use colorgrade::input::{InputError, display_name, load_snapshot};
use colorgrade::style::ElementsProperties;

use crate::output::{print_error, print_warning};

/// Grading result for a single snapshot file
pub struct GradedSnapshot {
    /// File name shown in tables
    pub name: String,
    /// Scraped URL or file name
    pub source: String,
    pub elements: ElementsProperties,
    pub grading: ColorGrading,
    pub report: FullReport,
}

/// Load and grade one snapshot file
pub fn grade_file(path: &str, options: &GradingOptions) -> Result<GradedSnapshot, InputError> {
    let snapshot = load_snapshot(path)?;
    let grading = color_grading_with(&snapshot.elements, options);
    let report = FullReport::from_grading(&grading, &options.thresholds);

    info!(
        file = path,
        metrics = grading.metrics.len(),
        score = report.total_score,
        "graded snapshot"
    );
    if report.score_report.total_elements == 0 {
        print_warning(&format!(
            "No gradable color pairs in {}",
            display_name(path)
        ));
    }

    Ok(GradedSnapshot {
        name: display_name(path).to_string(),
        source: snapshot.source,
        elements: snapshot.elements,
        grading,
        report,
    })
}

/// Grade a file or exit with an error message
fn grade_or_exit(path: &str, options: &GradingOptions) -> GradedSnapshot {
    grade_file(path, options).unwrap_or_else(|e| {
        print_error(&e.to_string());
        std::process::exit(1);
    })
}

#[derive(Serialize)]
struct SourcedReport<'a> {
    source: &'a str,
    report: &'a FullReport,
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            print_error(&format!("Failed to serialize report: {}", e));
            std::process::exit(1);
        }
    }
}
