//! Weather Report CLI Application
//!
//! This is the command-line interface for the weather prediction report
//! generator. It uses the weather-report-core library and adds:
//! - Submission loading from a TOML input file
//! - User-facing completeness messages (missing fields, filled count)
//! - Report file delivery (HTML always, PDF when an engine succeeds)
//! - Degradation to the HTML substitute when no PDF engine works

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use weather_report_core::{
    check, detect_engine, display_name, render_html, render_pdf, Completeness, FeatureSet,
    PredictionResult, HTML_FALLBACK_FILE_NAME, PDF_FILE_NAME, REQUIRED_COUNT,
};

mod config;

/// Weather Report - Validate a submission and render prediction reports
#[derive(Parser, Debug)]
#[command(name = "weather-report-cli")]
#[command(about = "Validate weather feature submissions and render HTML/PDF reports", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the submission file (input.toml)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Directory to write report files into
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Validate the submission only, render nothing
    #[arg(long)]
    check: bool,

    /// Render only the HTML report, skip the PDF engines
    #[arg(long)]
    html_only: bool,

    /// Print the validation result as JSON
    #[arg(long)]
    json: bool,

    /// Report which PDF engine would serve a request, then exit
    #[arg(long)]
    detect_engine: bool,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Weather Report CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using core library v{}", weather_report_core::VERSION);

    if args.detect_engine {
        println!("PDF engine: {}", detect_engine());
        return Ok(());
    }

    let Some(input_path) = &args.input else {
        println!("Weather Report - No input specified");
        println!("\nQuick Start:");
        println!("  weather-report-cli --input submission.toml");
        println!("  weather-report-cli --input submission.toml --check");
        println!("  weather-report-cli --detect-engine");
        println!("\nUse --help for more options");
        return Ok(());
    };

    let input = config::load_input(input_path)?;
    let features = input.feature_set()?;

    match check(&features) {
        Completeness::Empty => {
            report_empty(&args);
            Ok(())
        }
        Completeness::Partial { missing, filled } => {
            report_partial(&args, &missing, filled);
            // Blocks inference; a partial submission is a user error
            std::process::exit(1);
        }
        Completeness::Complete => {
            if args.json {
                println!("{}", serde_json::json!({ "status": "complete" }));
            }
            if args.check {
                if !args.json {
                    println!("✓ Submission complete: all {} fields filled", REQUIRED_COUNT);
                }
                return Ok(());
            }
            let Some(predictions) = &input.predictions else {
                bail!(
                    "Submission is complete but the input file has no [predictions] table. \
                     Run the external models and add their raw outputs."
                );
            };
            let prediction = PredictionResult::from_raw(&predictions.to_raw());
            render_reports(&args, &features, &prediction)
        }
    }
}

/// Advisory for a submission where nothing was entered
fn report_empty(args: &Args) {
    if args.json {
        println!("{}", serde_json::json!({ "status": "empty" }));
        return;
    }
    println!("💡 Please enter values for the weather features to get predictions.");
}

/// Warning for a submission with some but not all fields filled
fn report_partial(args: &Args, missing: &[&'static str], filled: usize) {
    if args.json {
        println!(
            "{}",
            serde_json::json!({
                "status": "partial",
                "missing": missing,
                "filled": filled,
                "required": REQUIRED_COUNT,
            })
        );
        return;
    }

    println!("⚠️  Please fill in all required fields before making predictions!");
    println!("Missing values for the following fields:");
    // Three names per line, title-cased like the form labels
    for chunk in missing.chunks(3) {
        let names: Vec<String> = chunk.iter().map(|name| display_name(name)).collect();
        println!("  • {}", names.join("   • "));
    }
    println!(
        "You have filled {} out of {} required fields.",
        filled, REQUIRED_COUNT
    );
}

/// Render and write the HTML report, then attempt the PDF
fn render_reports(
    args: &Args,
    features: &FeatureSet,
    prediction: &PredictionResult,
) -> Result<()> {
    println!("✓ Prediction Completed");
    println!("  Rainfall Amount:      {:.2} mm", prediction.rainfall_mm);
    println!("  Temperature:          {:.2}°C", prediction.temperature_c);
    println!("  Rain Occurrence:      {}", prediction.rain_class);
    println!("  Temperature Category: {}", prediction.temp_class);

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", args.output_dir))?;

    // The markup document is always produced; it doubles as the substitute
    // download when every PDF engine fails.
    let html = render_html(features, prediction);
    let html_path = args.output_dir.join(HTML_FALLBACK_FILE_NAME);
    std::fs::write(&html_path, &html)
        .with_context(|| format!("Failed to write HTML report: {:?}", html_path))?;
    println!("\n📋 HTML report written to {:?}", html_path);

    if args.html_only {
        return Ok(());
    }

    match render_pdf(features, prediction) {
        Ok(bytes) => {
            let pdf_path = args.output_dir.join(PDF_FILE_NAME);
            std::fs::write(&pdf_path, &bytes)
                .with_context(|| format!("Failed to write PDF report: {:?}", pdf_path))?;
            println!("🖨  PDF report written to {:?}", pdf_path);
        }
        Err(e) => {
            // Degrade to the HTML substitute; never fail the request
            log::error!("PDF generation failed: {}", e);
            eprintln!(
                "PDF generation failed. To produce a PDF that preserves the HTML template, \
                 install wkhtmltopdf and make sure it is on PATH."
            );
            eprintln!("Error details: {}", e);
            println!(
                "⬇️  The HTML report at {:?} can be used as a fallback download.",
                html_path
            );
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
