//! Fallback PDF engine: native lopdf construction
//!
//! Builds the paginated document directly, with no system dependencies.
//! The report body replicates the markup document field for field: same
//! header text, same four prediction values with identical formatting and
//! labels, same 14-row parameter table with identical formatting. On top of
//! that this path carries fallback-only static content: environmental
//! awareness prose, a closing message, and an optional illustrative image
//! whose load failure never aborts the rest of the document.
//!
//! Text is limited to the built-in Helvetica fonts, so strings are written
//! in Latin-1 (WinAnsi); characters outside that range degrade to '?'.

use super::{EngineError, PdfEngine};
use crate::features::{self, FeatureSet};
use crate::prediction::PredictionResult;
use crate::report::html::{REPORT_BYLINE, REPORT_TITLE};
use chrono::Utc;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use std::path::{Path, PathBuf};

// A4 geometry in points, 0.5in margins
const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN: i64 = 36;
const PAGE_TOP: i64 = PAGE_HEIGHT - MARGIN;
const TEXT_WIDTH: i64 = PAGE_WIDTH - 2 * MARGIN;

// Table column x positions
const COL_VALUE: i64 = 250;
const COL_DESC: i64 = 360;

/// Optional illustrative asset appended at the end of the document
pub const ILLUSTRATION_FILE: &str = "character.png";

const ENV_INTRO: &str = "Protecting Our Mother Earth: Our planet's atmosphere is under \
constant threat from various pollutants that not only harm human health but also disrupt \
ecological balance. The air quality parameters measured in this weather prediction report \
directly correlate with environmental degradation and public health crises. Understanding \
these pollutants and their sources empowers us to make informed decisions that can help \
preserve our planet for future generations.";

const ENV_POLLUTANTS: [&str; 5] = [
    "- Carbon Monoxide (CO): A colorless, odorless gas primarily produced by vehicle \
emissions and industrial processes. It reduces the blood's ability to carry oxygen and \
contributes to ground-level ozone formation and climate change.",
    "- Nitrogen Dioxide (NO2): A reddish-brown gas from vehicle exhausts and power plants. \
It irritates airways and contributes to acid rain formation, soil acidification and \
eutrophication of water bodies.",
    "- Sulphur Dioxide (SO2): Released mainly from fossil fuel combustion. It causes \
respiratory problems and is a major contributor to acid rain, which corrodes buildings, \
damages crops and acidifies lakes and streams.",
    "- Particulate Matter (PM2.5 & PM10): Microscopic particles that penetrate deep into \
lungs and bloodstream. They reduce visibility, damage vegetation and alter weather \
patterns; PM2.5 can travel thousands of kilometers.",
    "- Ground-level Ozone (O3): Formed when other pollutants react in sunlight. It \
irritates eyes and the respiratory system and damages plant tissues, reducing crop yields \
and forest productivity.",
];

const ENV_GLOBAL: &str = "Global Impact: The air quality data you analyze contributes to \
our understanding of climate change, public health patterns and environmental justice \
issues. By monitoring these parameters we can identify pollution hotspots, track \
improvement efforts and protect vulnerable communities and ecosystems.";

const CLOSING: [&str; 3] = [
    "Thank you for using our Weather Prediction Tool!",
    "May this report empower you to make informed decisions for a healthier tomorrow. \
Together, let's breathe cleaner air, protect our precious environment, and create a \
sustainable future for generations to come.",
    "Stay safe, stay healthy, and stay environmentally conscious!",
];

/// Encode text as Latin-1 for the built-in fonts
fn latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if (c as u32) < 256 { c as u8 } else { b'?' })
        .collect()
}

/// Greedy word wrap over an approximate per-line character count
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Approximate characters that fit one text line at the given font size
fn chars_per_line(size: i64) -> usize {
    // Average Helvetica glyph is roughly 0.55em wide
    (TEXT_WIDTH * 100 / (size * 55)) as usize
}

/// Accumulates page content streams with a downward-moving cursor
struct PageBuilder {
    done: Vec<Vec<Operation>>,
    current: Vec<Operation>,
    y: i64,
}

impl PageBuilder {
    fn new() -> Self {
        Self {
            done: Vec::new(),
            current: Vec::new(),
            y: PAGE_TOP,
        }
    }

    fn break_page(&mut self) {
        self.done.push(std::mem::take(&mut self.current));
        self.y = PAGE_TOP;
    }

    fn ensure_space(&mut self, needed: i64) {
        if self.y - needed < MARGIN {
            self.break_page();
        }
    }

    fn advance(&mut self, dy: i64) {
        self.y -= dy;
    }

    fn text_at(&mut self, x: i64, font: &str, size: i64, text: &str) {
        self.current.push(Operation::new("BT", vec![]));
        self.current
            .push(Operation::new("Tf", vec![font.into(), size.into()]));
        self.current
            .push(Operation::new("Td", vec![x.into(), self.y.into()]));
        self.current
            .push(Operation::new("Tj", vec![Object::string_literal(latin1(text))]));
        self.current.push(Operation::new("ET", vec![]));
    }

    fn line(&mut self, font: &str, size: i64, text: &str) {
        self.ensure_space(size + 4);
        self.y -= size;
        self.text_at(MARGIN, font, size, text);
        self.y -= 4;
    }

    fn row(&mut self, font: &str, size: i64, cells: &[(i64, &str)]) {
        self.ensure_space(size + 5);
        self.y -= size;
        for (x, text) in cells {
            self.text_at(*x, font, size, text);
        }
        self.y -= 5;
    }

    fn rule(&mut self) {
        self.ensure_space(6);
        self.y -= 3;
        self.current
            .push(Operation::new("m", vec![MARGIN.into(), self.y.into()]));
        self.current.push(Operation::new(
            "l",
            vec![(PAGE_WIDTH - MARGIN).into(), self.y.into()],
        ));
        self.current.push(Operation::new("S", vec![]));
        self.y -= 3;
    }

    fn paragraph(&mut self, font: &str, size: i64, text: &str) {
        for line in wrap(text, chars_per_line(size)) {
            self.line(font, size, &line);
        }
    }

    fn image(&mut self, width: i64, height: i64) {
        self.ensure_space(height + 10);
        self.y -= height;
        let x = MARGIN + (TEXT_WIDTH - width) / 2;
        self.current.push(Operation::new("q", vec![]));
        self.current.push(Operation::new(
            "cm",
            vec![
                width.into(),
                0.into(),
                0.into(),
                height.into(),
                x.into(),
                self.y.into(),
            ],
        ));
        self.current.push(Operation::new("Do", vec!["Im1".into()]));
        self.current.push(Operation::new("Q", vec![]));
        self.y -= 10;
    }

    fn finish(mut self) -> Vec<Vec<Operation>> {
        self.done.push(self.current);
        self.done
    }
}

/// A decoded illustrative image ready for embedding
struct Illustration {
    width: u32,
    height: u32,
    rgb: Vec<u8>,
}

/// Load the optional illustration; any failure is contained here
fn load_illustration(path: &Path) -> Option<Illustration> {
    match image::open(path) {
        Ok(img) => {
            let rgb = img.to_rgb8();
            let (width, height) = rgb.dimensions();
            log::debug!("Loaded illustration {:?} ({}x{})", path, width, height);
            Some(Illustration {
                width,
                height,
                rgb: rgb.into_raw(),
            })
        }
        Err(e) => {
            log::warn!("Illustration {:?} not loaded, continuing without it: {}", path, e);
            None
        }
    }
}

/// The lopdf-backed engine
pub struct NativeEngine {
    image_path: PathBuf,
}

impl NativeEngine {
    pub fn new() -> Self {
        Self {
            image_path: PathBuf::from(ILLUSTRATION_FILE),
        }
    }

    /// Use an explicit illustration path (testing and deployments with
    /// relocated assets)
    pub fn with_image_path(image_path: impl Into<PathBuf>) -> Self {
        Self {
            image_path: image_path.into(),
        }
    }
}

impl Default for NativeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfEngine for NativeEngine {
    fn name(&self) -> &'static str {
        "native"
    }

    fn render(
        &self,
        features: &FeatureSet,
        prediction: &PredictionResult,
    ) -> Result<Vec<u8>, EngineError> {
        build_document(features, prediction, &self.image_path)
    }
}

fn build_document(
    features: &FeatureSet,
    prediction: &PredictionResult,
    image_path: &Path,
) -> Result<Vec<u8>, EngineError> {
    let mut b = PageBuilder::new();

    // Header, same text as the markup document
    b.line("F2", 22, REPORT_TITLE);
    b.line("F1", 11, REPORT_BYLINE);
    b.advance(14);

    // Prediction results, identical formatting to the markup document
    b.line("F2", 15, "Prediction Results");
    b.rule();
    b.advance(4);
    b.row(
        "F2",
        11,
        &[
            (MARGIN, "Rainfall Amount"),
            (COL_VALUE, &format!("{:.2} mm", prediction.rainfall_mm)),
        ],
    );
    b.row(
        "F2",
        11,
        &[
            (MARGIN, "Temperature"),
            (COL_VALUE, &format!("{:.2}°C", prediction.temperature_c)),
        ],
    );
    b.row(
        "F2",
        11,
        &[
            (MARGIN, "Rain Occurrence"),
            (COL_VALUE, &prediction.rain_class.to_string()),
        ],
    );
    b.row(
        "F2",
        11,
        &[
            (MARGIN, "Temperature Category"),
            (COL_VALUE, &prediction.temp_class.to_string()),
        ],
    );
    b.advance(18);

    // Input parameters, canonical order
    b.line("F2", 15, "Input Parameters");
    b.rule();
    b.advance(4);
    b.row(
        "F2",
        10,
        &[
            (MARGIN, "Parameter"),
            (COL_VALUE, "Value"),
            (COL_DESC, "Description"),
        ],
    );
    b.rule();
    for (name, value) in features.iter() {
        let display = features::display_name(name);
        b.row(
            "F1",
            9,
            &[
                (MARGIN, display.as_str()),
                (COL_VALUE, &format!("{:.4}", value)),
                (COL_DESC, features::description(name)),
            ],
        );
    }
    b.advance(18);

    // Fallback-only explanatory content
    b.line("F2", 15, "Environmental Awareness & Air Quality Impact");
    b.rule();
    b.advance(4);
    b.paragraph("F1", 9, ENV_INTRO);
    b.advance(6);
    for bullet in ENV_POLLUTANTS {
        b.paragraph("F1", 9, bullet);
        b.advance(4);
    }
    b.paragraph("F1", 9, ENV_GLOBAL);
    b.advance(16);
    b.line("F3", 10, REPORT_BYLINE);
    b.advance(12);

    // Optional illustration, then the closing message
    let illustration = load_illustration(image_path);
    if let Some(ill) = &illustration {
        let max_w = TEXT_WIDTH;
        let max_h = 216; // 3in
        let scale = f64::min(
            max_w as f64 / ill.width as f64,
            max_h as f64 / ill.height as f64,
        );
        let width = ((ill.width as f64 * scale) as i64).max(1);
        let height = ((ill.height as f64 * scale) as i64).max(1);
        b.image(width, height);
    }
    for line in CLOSING {
        b.paragraph("F3", 10, line);
        b.advance(4);
    }

    assemble(b.finish(), illustration)
}

/// Assemble the page operation lists into a serialized PDF document
fn assemble(
    pages: Vec<Vec<Operation>>,
    illustration: Option<Illustration>,
) -> Result<Vec<u8>, EngineError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let f1 = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let f2 = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let f3 = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Oblique",
        "Encoding" => "WinAnsiEncoding",
    });

    let mut resources = dictionary! {
        "Font" => dictionary! { "F1" => f1, "F2" => f2, "F3" => f3 },
    };
    if let Some(ill) = illustration {
        let image_id = doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => ill.width as i64,
                "Height" => ill.height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
            },
            ill.rgb,
        ));
        resources.set("XObject", dictionary! { "Im1" => image_id });
    }
    let resources_id = doc.add_object(resources);

    let mut kids: Vec<Object> = Vec::new();
    for operations in pages {
        let content = Content { operations };
        let encoded = content
            .encode()
            .map_err(|e| EngineError::Encode(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(REPORT_TITLE),
        "Producer" => Object::string_literal("weather-report-core"),
        "CreationDate" => Object::string_literal(
            Utc::now().format("D:%Y%m%d%H%M%SZ").to_string()
        ),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut out = Vec::new();
    doc.save_to(&mut out)
        .map_err(|e| EngineError::Encode(e.to_string()))?;
    Ok(out)
}
