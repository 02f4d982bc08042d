//! Library-level tests for the grading engine

use colorgrade::color::{Rgb, contrast_ratio, harmony_score, parse_color};
use colorgrade::grading::{
    GradingOptions, Thresholds, color_grading, color_grading_report, color_harmony,
    generate_report,
};
use colorgrade::input::parse_snapshot;
use colorgrade::style::{ElementStyle, ElementsProperties};

const SAMPLE_COLORS: [&str; 8] = [
    "#000", "#fff", "#ff0000", "#00ff00", "#0000ff", "#767676", "#abcdef", "#123",
];

fn sample_rgbs() -> Vec<Rgb> {
    SAMPLE_COLORS
        .iter()
        .map(|c| parse_color(c).unwrap())
        .collect()
}

// =============================================================================
// Color properties
// =============================================================================

#[test]
fn test_contrast_bounds_and_symmetry() {
    let colors = sample_rgbs();
    for &a in &colors {
        assert!((contrast_ratio(a, a) - 1.0).abs() < 1e-12);
        for &b in &colors {
            let ab = contrast_ratio(a, b);
            assert!((1.0..=21.0 + 1e-9).contains(&ab));
            assert!((ab - contrast_ratio(b, a)).abs() < 1e-12);
        }
    }
}

#[test]
fn test_harmony_score_values_and_symmetry() {
    let colors = sample_rgbs();
    for &a in &colors {
        for &b in &colors {
            let score = harmony_score(a, b);
            assert!([2, 5, 7, 10].contains(&score));
            assert_eq!(score, harmony_score(b, a));
        }
    }
}

#[test]
fn test_short_hex_equals_long_hex() {
    for (short, long) in [("#fff", "#ffffff"), ("#123", "#112233"), ("#a0c", "#aa00cc")] {
        assert_eq!(parse_color(short), parse_color(long));
    }
}

#[test]
fn test_rgba_ignores_alpha() {
    assert_eq!(
        parse_color("rgba(18, 52, 86, 0)"),
        parse_color("rgba(18,52,86,255)")
    );
    assert_eq!(parse_color("rgba(18, 52, 86, 1)"), parse_color("#123456"));
}

// =============================================================================
// Page grading
// =============================================================================

fn sample_page() -> ElementsProperties {
    [
        ("body", ElementStyle::new(Some("#ffffff"), Some("#000000"))),
        ("nav", ElementStyle::new(Some("#ffffff"), Some("#ff0000"))),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_end_to_end_report() {
    let report = color_grading_report(&sample_page());

    assert_eq!(report.numerical_data["body_contrast"].value, 21.0);
    assert_eq!(report.numerical_data["body_harmony_score"].value, 7.0);
    assert_eq!(report.numerical_data["nav_contrast"].value, 4.0);
    assert_eq!(report.numerical_data["nav_harmony_score"].value, 7.0);
    assert_eq!(report.numerical_data["link_contrast"].value, 0.0);
    assert_eq!(report.numerical_data["a_harmony_score"].value, 0.0);
    assert_eq!(
        report.color_usage_details,
        vec![
            "Color #ffffff used in: body_background, nav_background".to_string(),
            "Color #000000 used in: body_text".to_string(),
            "Color #ff0000 used in: nav_text".to_string(),
        ]
    );
    assert_eq!(report.score_report.passing_elements, 5);
    assert_eq!(report.score_report.total_elements, 6);
    assert_eq!(report.total_score, 83.33);
}

#[test]
fn test_harmony_keys_subset_of_grading_keys() {
    let page = sample_page();
    let grading = color_grading(&page);
    for (key, score) in color_harmony(&page) {
        assert_eq!(grading.get(&key), Some(f64::from(score)));
    }
}

#[test]
fn test_grading_is_deterministic() {
    let page = sample_page();
    assert_eq!(color_grading(&page), color_grading(&page));
}

#[test]
fn test_generate_report_empty() {
    let report = generate_report(std::iter::empty(), &Thresholds::default());
    assert_eq!(report.passing_elements, 0);
    assert_eq!(report.total_elements, 0);
    assert_eq!(report.total_score, 0.0);
}

#[test]
fn test_generate_report_counts() {
    let metrics = [
        ("body_contrast", 21.0),
        ("nav_contrast", 3.0),
        ("body_harmony_score", 7.0),
        ("font_size", 99.0),
    ];
    let report = generate_report(metrics, &GradingOptions::default().thresholds);
    assert_eq!(report.total_elements, 3);
    assert_eq!(report.passing_elements, 2);
    assert!((report.total_score - 200.0 / 3.0).abs() < 1e-9);
}

// =============================================================================
// Snapshot input
// =============================================================================

#[test]
fn test_scrape_record_grades_like_mapping() {
    let mapping = r##"{
        "body": {"background-color": "#ffffff", "color": "#000000"},
        "nav": {"background-color": "#ffffff", "color": "#ff0000"}
    }"##;
    let record = serde_json::json!({
        "url": "https://example.com/",
        "elements_properties": mapping,
    })
    .to_string();

    let bare = parse_snapshot(mapping, "page.json").unwrap();
    let scraped = parse_snapshot(&record, "record.json").unwrap();

    assert_eq!(scraped.source, "https://example.com/");
    assert_eq!(bare.elements, scraped.elements);
    assert_eq!(
        color_grading_report(&bare.elements),
        color_grading_report(&scraped.elements)
    );
}
