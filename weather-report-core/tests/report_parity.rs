//! Cross-format report parity
//!
//! The markup and paginated documents must display the same prediction
//! values with identical formatting, and the paginated fallback must still
//! produce a usable document when the primary converter fails.

use weather_report_core::report::pdf::{
    render_with_engines, NativeEngine, PdfEngine, WkhtmltopdfEngine,
};
use weather_report_core::{
    check, render_html, Completeness, FeatureSet, PredictionResult, RainOccurrence, TempClass,
};

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

fn scenario() -> (FeatureSet, PredictionResult) {
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
    ])
    .unwrap();
    let prediction = PredictionResult {
        rainfall_mm: 3.42,
        temperature_c: 29.50,
        rain_class: RainOccurrence::Rain,
        temp_class: TempClass::Moderate,
    };
    (features, prediction)
}

#[test]
fn markup_and_paginated_documents_display_identical_values() {
    let (features, prediction) = scenario();
    assert_eq!(check(&features), Completeness::Complete);

    let html = render_html(&features, &prediction);
    let engine = NativeEngine::with_image_path("no-such-image.png");
    let pdf = engine.render(&features, &prediction).unwrap();

    // Four prediction values, identical formatting in both documents
    for needle in ["3.42 mm", "Rain", "Moderate"] {
        assert!(html.contains(needle), "html missing {:?}", needle);
        assert!(contains(&pdf, needle.as_bytes()), "pdf missing {:?}", needle);
    }
    assert!(html.contains("29.50°C"));
    assert!(contains(&pdf, b"29.50\xb0C")); // Latin-1 degree sign in the PDF

    // All 14 input rows with identical 4-decimal formatting and names
    let expectations = [
        ("Latitude", "12.9716"),
        ("Longitude", "77.5946"),
        ("Humidity", "65.0000"),
        ("Wind Kph", "10.0000"),
        ("Cloud", "40.0000"),
        ("Pressure Mb", "1012.0000"),
        ("Uv Index", "5.0000"),
        ("Feels Like Celsius", "29.5000"),
        ("Air Quality Carbon Monoxide", "0.3000"),
        ("Air Quality Ozone", "18.2000"),
        ("Air Quality Nitrogen Dioxide", "12.1000"),
        ("Air Quality Sulphur Dioxide", "4.5000"),
        ("Air Quality Pm2.5", "22.0000"),
        ("Air Quality Pm10", "35.0000"),
    ];
    for (name, value) in expectations {
        assert!(html.contains(name), "html missing row name {:?}", name);
        assert!(html.contains(value), "html missing row value {:?}", value);
        assert!(contains(&pdf, name.as_bytes()), "pdf missing row name {:?}", name);
        assert!(contains(&pdf, value.as_bytes()), "pdf missing row value {:?}", value);
    }
}

#[test]
fn primary_engine_failure_falls_back_to_native() {
    let (features, prediction) = scenario();

    // Point the primary engine at a binary that cannot be spawned
    let engines: Vec<Box<dyn PdfEngine>> = vec![
        Box::new(WkhtmltopdfEngine::with_binary(Some(
            "/nonexistent/wkhtmltopdf".into(),
        ))),
        Box::new(NativeEngine::with_image_path("no-such-image.png")),
    ];

    let pdf = render_with_engines(&engines, &features, &prediction).unwrap();
    assert!(!pdf.is_empty());
    assert!(pdf.starts_with(b"%PDF-"));
    assert!(contains(&pdf, b"3.42 mm"));
    assert!(contains(&pdf, b"29.50\xb0C"));
    assert!(contains(&pdf, b"Rain"));
    assert!(contains(&pdf, b"Moderate"));
}

#[test]
fn round_trip_scenario_table_row() {
    let (features, prediction) = scenario();
    let html = render_html(&features, &prediction);

    // Latitude | 12.9716 | Degrees North, as one table row
    let row_start = html.find("<td>Latitude</td>").unwrap();
    let row = &html[row_start..row_start + 120];
    assert!(row.contains("<td>12.9716</td>"));
    assert!(row.contains("<td>Degrees North</td>"));
}
