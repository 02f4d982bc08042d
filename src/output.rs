use colored::*;

use colorgrade::grading::{ElementMetrics, GradingOptions, OneLiner, ScoreReport, Thresholds};

/// Column labels of the per-element metrics table
const METRIC_COLUMNS: [&str; 4] = ["CONTR", "HARM", "B-CON", "B-HAR"];

/// Width of one value column
const COLUMN_WIDTH: usize = 7;

fn style_label(label: &str) -> ColoredString {
    label.bold()
}

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

pub(crate) fn print_snapshot_info(source: &str, element_count: usize, options: &GradingOptions) {
    println!("Source: {}", source);
    println!("Elements: {}", element_count);
    println!(
        "Thresholds: contrast > {}, harmony > {}",
        options.thresholds.contrast, options.thresholds.harmony
    );
    println!("Hue distance: {:?}", options.hue_distance);
    println!();
}

/// Width of the label column for the given row labels
pub(crate) fn label_width<'a>(labels: impl IntoIterator<Item = &'a str>) -> usize {
    labels.into_iter().map(str::len).max().unwrap_or(0).max(8) + 1
}

pub(crate) fn print_separator(columns: usize, prefix_width: usize) {
    println!("{}", "-".repeat(prefix_width + columns * COLUMN_WIDTH));
}

pub(crate) fn print_header(columns: &[&str], prefix: &str, prefix_width: usize) {
    print!("{:<width$}", prefix, width = prefix_width);
    for column in columns {
        print!(" {:>width$}", column, width = COLUMN_WIDTH - 1);
    }
    println!();
}

pub(crate) fn print_metrics_header(prefix_width: usize) {
    print_header(&METRIC_COLUMNS, "ELEMENT", prefix_width);
}

pub(crate) fn print_metrics_separator(prefix_width: usize) {
    print_separator(METRIC_COLUMNS.len(), prefix_width);
}

fn print_judged(value: Option<f64>, threshold: f64) {
    match value {
        Some(v) if v.is_finite() => {
            let formatted = format!("{:>width$.2}", v, width = COLUMN_WIDTH - 1);
            if v > threshold {
                print!(" {}", formatted.green());
            } else {
                print!(" {}", formatted.red());
            }
        }
        _ => print!(" {:>width$}", "-", width = COLUMN_WIDTH - 1),
    }
}

/// One element's metrics, green when above threshold, red otherwise
pub(crate) fn print_metrics_row(
    label: &str,
    prefix_width: usize,
    metrics: &ElementMetrics,
    thresholds: &Thresholds,
) {
    print!("{:<width$}", label, width = prefix_width);
    print_judged(metrics.contrast, thresholds.contrast);
    print_judged(metrics.harmony, thresholds.harmony);
    print_judged(metrics.with_body_contrast, thresholds.contrast);
    print_judged(metrics.with_body_harmony, thresholds.harmony);
    println!();
}

pub(crate) fn print_row_styled(label_prefix: &str, label_suffix: &str, values: &[f64]) {
    print!("{}{}", style_label(label_prefix), label_suffix);
    for v in values {
        if v.is_finite() {
            print!(" {:>width$.2}", v, width = COLUMN_WIDTH - 1);
        } else {
            print!(" {:>width$}", "-", width = COLUMN_WIDTH - 1);
        }
    }
    println!();
}

pub(crate) fn print_diff_row_styled(label_prefix: &str, label_suffix: &str, a: &[f64], b: &[f64]) {
    print!("{}{}", style_label(label_prefix), label_suffix);
    for (va, vb) in a.iter().zip(b) {
        let diff = vb - va;
        if diff.is_finite() {
            print_colored_diff(diff);
        } else {
            print!(" {:>width$}", "-", width = COLUMN_WIDTH - 1);
        }
    }
    println!();
}

fn print_colored_diff(diff: f64) {
    let rounded = (diff * 100.0).round() / 100.0;
    if rounded == 0.0 {
        print!(" {:>width$}", "0.00", width = COLUMN_WIDTH - 1);
    } else {
        let formatted = format!("{:>+width$.2}", diff, width = COLUMN_WIDTH - 1);
        if rounded > 0.0 {
            print!(" {}", formatted.green());
        } else {
            print!(" {}", formatted.red());
        }
    }
}

/// Short column label for a headline metric key: `nav_contrast` -> `NAV-C`
pub(crate) fn short_metric_label(key: &str) -> String {
    if let Some(element) = key.strip_suffix("_contrast") {
        format!("{}-C", element.to_uppercase())
    } else if let Some(element) = key.strip_suffix("_harmony_score") {
        format!("{}-H", element.to_uppercase())
    } else {
        key.to_uppercase()
    }
}

pub(crate) fn print_usage(statements: &[String]) {
    if statements.is_empty() {
        println!("  (no hex colors found)");
    }
    for statement in statements {
        println!("  {}", statement);
    }
}

pub(crate) fn print_score(label: &str, score: &ScoreReport) {
    let pct = format!("{:.2}%", score.total_score);
    let pct = if score.total_score >= 50.0 {
        pct.green()
    } else {
        pct.red()
    };
    println!(
        "{}Passing: {}/{} ({})",
        label, score.passing_elements, score.total_elements, pct
    );
}

pub(crate) fn print_legend() {
    println!("CONTR: Contrast ratio of the element's own background and text colors");
    println!(
        "HARM: Harmony score of the same pair (10 complementary, 7 analogous, 5 triadic, 2 clashing)"
    );
    println!("B-CON / B-HAR: Same metrics for the body text color over the element's background");
}

pub(crate) fn print_captions(captions: &[OneLiner]) {
    for caption in captions {
        println!("{}: {}", caption.title, caption.details);
    }
}
