//! Primary PDF engine: external wkhtmltopdf converter
//!
//! Feeds the markup document to the `wkhtmltopdf` binary over stdin and
//! reads the PDF from stdout. A print stylesheet is injected into the
//! document first so the paginated output keeps the on-screen colors and
//! never splits a prediction cell across a page break.

use super::{EngineError, PdfEngine};
use crate::features::FeatureSet;
use crate::prediction::PredictionResult;
use crate::report::html::render_html;
use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Page-size and print-fidelity overrides applied before conversion
const PRINT_CSS: &str = "\
@page { size: A4; margin: 0.5in; }\n\
body { -webkit-print-color-adjust: exact !important; color-adjust: exact !important; }\n\
.prediction-item { break-inside: avoid; page-break-inside: avoid; }\n";

/// Locate an executable on PATH
pub fn find_in_path(name: &str) -> Option<PathBuf> {
    let path = env::var_os("PATH")?;
    env::split_paths(&path)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Inject the print stylesheet just before `</head>`
fn with_print_css(html: &str) -> String {
    let style = format!("<style>\n{}</style>\n", PRINT_CSS);
    match html.find("</head>") {
        Some(pos) => {
            let mut out = String::with_capacity(html.len() + style.len());
            out.push_str(&html[..pos]);
            out.push_str(&style);
            out.push_str(&html[pos..]);
            out
        }
        None => format!("{}{}", style, html),
    }
}

/// The wkhtmltopdf-backed engine
pub struct WkhtmltopdfEngine {
    binary: Option<PathBuf>,
}

impl WkhtmltopdfEngine {
    /// Probe PATH for the converter binary
    pub fn new() -> Self {
        Self {
            binary: find_in_path("wkhtmltopdf"),
        }
    }

    /// Use an explicit binary path (or none, for testing the fallback)
    pub fn with_binary(binary: Option<PathBuf>) -> Self {
        Self { binary }
    }
}

impl Default for WkhtmltopdfEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfEngine for WkhtmltopdfEngine {
    fn name(&self) -> &'static str {
        "wkhtmltopdf"
    }

    fn is_available(&self) -> bool {
        self.binary.is_some()
    }

    fn render(
        &self,
        features: &FeatureSet,
        prediction: &PredictionResult,
    ) -> Result<Vec<u8>, EngineError> {
        let binary = self.binary.as_ref().ok_or_else(|| {
            EngineError::Unavailable("wkhtmltopdf binary not found on PATH".to_string())
        })?;

        let html = with_print_css(&render_html(features, prediction));

        log::debug!("Spawning converter: {:?}", binary);
        let mut child = Command::new(binary)
            .args([
                "--quiet",
                "--encoding",
                "utf-8",
                "--page-size",
                "A4",
                "--margin-top",
                "0.5in",
                "--margin-bottom",
                "0.5in",
                "--margin-left",
                "0.5in",
                "--margin-right",
                "0.5in",
                "--print-media-type",
                "-",
                "-",
            ])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(html.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(EngineError::Converter {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        if output.stdout.is_empty() {
            return Err(EngineError::EmptyOutput);
        }

        Ok(output.stdout)
    }
}
