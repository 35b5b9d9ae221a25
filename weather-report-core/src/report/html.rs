//! Markup report renderer
//!
//! Renders a validated feature set plus a prediction result into a single
//! self-contained HTML document: embedded styling, no external resource
//! fetches. Deterministic: the same inputs produce identical bytes, so
//! the document can be displayed inline or fed unchanged to a PDF engine.

use crate::features::{self, FeatureSet};
use crate::prediction::PredictionResult;

const STYLE: &str = "\
            body { font-family: 'Segoe UI', Arial, sans-serif; background: #f9f9f9; color: #222; }\n\
            .header { text-align: center; margin-bottom: 16px; }\n\
            .section { margin: 24px auto; max-width: 900px; padding: 20px; border: 1px solid #ddd; border-radius: 8px; background: #fff; }\n\
            .section h2 { color: #1976D2; border-bottom: 2px solid #1976D2; padding-bottom: 5px; margin-top: 0; }\n\
            .prediction-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 20px; margin: 20px 0; }\n\
            .prediction-item { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 20px; border-radius: 10px; text-align: center; box-shadow: 0 4px 6px rgba(0,0,0,0.08); }\n\
            .prediction-item h3 { margin: 0 0 10px 0; font-size: 1.1em; }\n\
            .prediction-item .value { font-size: 1.8em; font-weight: bold; margin: 10px 0; }\n\
            table { width: 100%; border-collapse: collapse; margin: 20px 0; }\n\
            th, td { border: 1px solid #ddd; padding: 10px; text-align: left; }\n\
            th { background-color: #4CAF50; color: white; font-weight: bold; }\n\
            tr:nth-child(even) { background-color: #f9f9f9; }\n";

/// Report title, shared by both renderers
pub const REPORT_TITLE: &str = "Weather Prediction Report";

/// Report byline, shared by both renderers
pub const REPORT_BYLINE: &str = "Generated by the Weather Prediction Tool";

/// Escape text for interpolation into HTML
fn esc(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// Minimal writer with deterministic push order.
struct Html {
    buf: String,
}

impl Html {
    fn new() -> Self {
        Self {
            buf: String::with_capacity(8 * 1024),
        }
    }

    fn push(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    fn finish(self) -> String {
        self.buf
    }
}

/// Render the complete markup document for one (features, prediction) pair
pub fn render_html(features: &FeatureSet, prediction: &PredictionResult) -> String {
    let mut w = Html::new();

    w.push("<html>\n<head>\n<meta charset='UTF-8'>\n<title>");
    w.push(REPORT_TITLE);
    w.push("</title>\n<style>\n");
    w.push(STYLE);
    w.push("</style>\n</head>\n<body>\n");

    // Header
    w.push("<div class=\"header\">\n<h1>🌤 ");
    w.push(REPORT_TITLE);
    w.push("</h1>\n<p style='margin:0;'>");
    w.push(REPORT_BYLINE);
    w.push("</p>\n</div>\n");

    // Prediction grid
    w.push("<div class=\"section\">\n<h2>📊 Prediction Results</h2>\n<div class=\"prediction-grid\">\n");
    write_prediction_cell(
        &mut w,
        "🌧 Rainfall Amount",
        &format!("{:.2} mm", prediction.rainfall_mm),
    );
    write_prediction_cell(
        &mut w,
        "🌡 Temperature",
        &format!("{:.2}°C", prediction.temperature_c),
    );
    write_prediction_cell(&mut w, "☔ Rain Occurrence", &prediction.rain_class.to_string());
    write_prediction_cell(
        &mut w,
        "🔥 Temperature Category",
        &prediction.temp_class.to_string(),
    );
    w.push("</div>\n</div>\n");

    // Input parameter table, canonical order
    w.push("<div class=\"section\">\n<h2>📝 Input Parameters</h2>\n<table>\n<thead>\n<tr>\n");
    w.push("<th>Parameter</th>\n<th>Value</th>\n<th>Description</th>\n</tr>\n</thead>\n<tbody>\n");
    for (name, value) in features.iter() {
        w.push("<tr>\n<td>");
        w.push(&esc(&features::display_name(name)));
        w.push("</td>\n<td>");
        w.push(&format!("{:.4}", value));
        w.push("</td>\n<td>");
        w.push(&esc(features::description(name)));
        w.push("</td>\n</tr>\n");
    }
    w.push("</tbody>\n</table>\n</div>\n</body>\n</html>\n");

    w.finish()
}

fn write_prediction_cell(w: &mut Html, label: &str, value: &str) {
    w.push("<div class=\"prediction-item\">\n<h3>");
    w.push(label);
    w.push("</h3>\n<div class=\"value\">");
    w.push(&esc(value));
    w.push("</div>\n</div>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureSet;
    use crate::prediction::{PredictionResult, RainOccurrence, TempClass};

    fn scenario() -> (FeatureSet, PredictionResult) {
        let features = FeatureSet::from_values([
            12.9716, 77.5946, 65.0, 10.0, 40.0, 1012.0, 5.0, 29.5, 0.3, 18.2, 12.1, 4.5, 22.0,
            35.0,
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
    fn test_round_trip_scenario_values() {
        let (features, prediction) = scenario();
        let html = render_html(&features, &prediction);

        assert!(html.contains("3.42 mm"));
        assert!(html.contains("29.50°C"));
        assert!(html.contains("Rain"));
        assert!(html.contains("Moderate"));
        // Latitude row: display name, 4-decimal value, description
        assert!(html.contains("<td>Latitude</td>"));
        assert!(html.contains("<td>12.9716</td>"));
        assert!(html.contains("<td>Degrees North</td>"));
    }

    #[test]
    fn test_document_is_complete_and_self_contained() {
        let (features, prediction) = scenario();
        let html = render_html(&features, &prediction);

        assert!(html.starts_with("<html>"));
        assert!(html.trim_end().ends_with("</html>"));
        assert!(html.contains("<style>"));
        // No external resource fetches
        assert!(!html.contains("http://"));
        assert!(!html.contains("https://"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn test_all_fourteen_rows_present() {
        let (features, prediction) = scenario();
        let html = render_html(&features, &prediction);
        assert_eq!(html.matches("<tr>").count(), 15); // header + 14 rows
        assert!(html.contains("<td>Air Quality Pm2.5</td>"));
        assert!(html.contains("<td>22.0000</td>"));
        assert!(html.contains("μg/m³"));
    }

    #[test]
    fn test_deterministic_output() {
        let (features, prediction) = scenario();
        let a = render_html(&features, &prediction);
        let b = render_html(&features, &prediction);
        assert_eq!(a, b);
    }

    #[test]
    fn test_row_order_matches_canonical_order() {
        let (features, prediction) = scenario();
        let html = render_html(&features, &prediction);
        let lat = html.find("<td>Latitude</td>").unwrap();
        let lon = html.find("<td>Longitude</td>").unwrap();
        let pm10 = html.find("<td>Air Quality Pm10</td>").unwrap();
        assert!(lat < lon && lon < pm10);
    }
}
