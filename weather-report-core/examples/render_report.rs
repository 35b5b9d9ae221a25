//! Render both report formats for a sample submission
//!
//! Usage: cargo run --example render_report

use weather_report_core::{
    check, detect_engine, render_html, render_pdf, Completeness, FeatureSet, PredictionResult,
    RawPrediction, HTML_FALLBACK_FILE_NAME, PDF_FILE_NAME,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let features = FeatureSet::from_entries([
        ("latitude", 12.9716),
        ("longitude", 77.5946),
        ("humidity", 65.0),
        ("wind_kph", 10.0),
        ("cloud", 40.0),
        ("pressure_mb", 1012.0),
        ("uv_index", 5.0),
        ("feels_like_celsius", 29.5),
        ("air_quality_Carbon_Monoxide", 0.3),
        ("air_quality_Ozone", 18.2),
        ("air_quality_Nitrogen_dioxide", 12.1),
        ("air_quality_Sulphur_dioxide", 4.5),
        ("air_quality_PM2.5", 22.0),
        ("air_quality_PM10", 35.0),
    ])?;

    match check(&features) {
        Completeness::Complete => println!("Submission complete"),
        other => {
            println!("Submission not complete: {:?}", other);
            return Ok(());
        }
    }

    // Raw outputs as an external model run would produce them
    let prediction = PredictionResult::from_raw(&RawPrediction {
        rainfall_log: 3.42_f64.ln_1p(),
        temperature_c: 29.5,
        rain_code: 1,
        temp_code: 1,
    });

    println!("PDF engine: {}", detect_engine());

    let html = render_html(&features, &prediction);
    std::fs::write(HTML_FALLBACK_FILE_NAME, &html)?;
    println!("Wrote {}", HTML_FALLBACK_FILE_NAME);

    let pdf = render_pdf(&features, &prediction)?;
    std::fs::write(PDF_FILE_NAME, &pdf)?;
    println!("Wrote {} ({} bytes)", PDF_FILE_NAME, pdf.len());

    Ok(())
}
