mod chart;
mod mode;
mod output;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use colorgrade::color::HueDistance;
use colorgrade::grading::{GradingOptions, Thresholds};
use output::print_error;

#[derive(Parser)]
#[command(
    name = "colorgrade",
    version,
    about = "Color contrast and harmony grader for scraped web page snapshots",
    after_help = "Examples:
  colorgrade page.json                              Grade one snapshot
  colorgrade home.json about.json                   Compare snapshots (first is base)
  colorgrade page.json --json                       Print the report as JSON
  colorgrade page.json --image contrast.png         Output contrast chart
  colorgrade --contrast-threshold 4.5 page.json     Grade against WCAG AA
  curl -s $API/scrape | colorgrade -                Read a scrape record from stdin"
)]
struct Args {
    /// Snapshot JSON files (element styles or scrape records), `-` for stdin. Up to 10 files.
    #[arg(required = true)]
    files: Vec<String>,

    /// Contrast ratio a color pair must exceed to pass
    #[arg(long, default_value = "7", value_name = "RATIO")]
    contrast_threshold: f64,

    /// Harmony score a color pair must exceed to pass
    #[arg(long, default_value = "5", value_name = "SCORE")]
    harmony_threshold: f64,

    /// Measure hue distance around the color wheel (red near 0 and 1 are close)
    #[arg(long)]
    circular_hue: bool,

    /// Print the report as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Suppress explanations (show data only)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Output chart as PNG image
    #[arg(long, value_name = "PATH")]
    image: Option<String>,
}

fn init_tracing(verbose: u8, ansi: bool) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .init();
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    init_tracing(args.verbose, !args.no_color);

    // Validate file count
    if args.files.len() > 10 {
        print_error("Too many files specified (max 10)");
        std::process::exit(1);
    }

    // Validate thresholds
    for (name, value) in [
        ("--contrast-threshold", args.contrast_threshold),
        ("--harmony-threshold", args.harmony_threshold),
    ] {
        if !value.is_finite() || value < 0.0 {
            print_error(&format!("{} must be a non-negative number", name));
            std::process::exit(1);
        }
    }

    if args.files.iter().filter(|f| f.as_str() == "-").count() > 1 {
        print_error("stdin (-) can only be read once");
        std::process::exit(1);
    }

    if args.image.is_some() && args.files.len() > chart::max_chart_files() {
        print_error(&format!(
            "--image supports up to {} files",
            chart::max_chart_files()
        ));
        std::process::exit(1);
    }

    // Validate image output path
    if let Some(ref path) = args.image {
        use std::path::Path;
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            print_error(&format!("Directory does not exist: {}", parent.display()));
            std::process::exit(1);
        }
    }

    let options = GradingOptions {
        thresholds: Thresholds {
            contrast: args.contrast_threshold,
            harmony: args.harmony_threshold,
        },
        hue_distance: if args.circular_hue {
            HueDistance::Circular
        } else {
            HueDistance::Linear
        },
    };

    // Dispatch to appropriate mode
    if args.files.len() >= 2 {
        mode::run_compare(
            &args.files,
            &options,
            args.quiet,
            args.json,
            args.image.as_deref(),
        );
    } else {
        mode::run_single(
            &args.files[0],
            &options,
            args.quiet,
            args.json,
            args.image.as_deref(),
        );
    }
}
