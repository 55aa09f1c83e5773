//! Scan pipeline composing recognition, extraction, and formatting.

use std::time::Instant;

use image::{DynamicImage, GenericImageView, imageops::FilterType};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::models::config::DetectConfig;
use crate::ocr::{RecognizedText, TextRecognizer};
use crate::rules::iban::{IbanExtractor, format_iban};
use crate::rules::FieldExtractor;

/// A detected IBAN: the raw matched line plus derived display data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedIban {
    /// The matched line exactly as it appeared in the recognized text.
    pub raw: String,

    /// Grouped display form of the matched line.
    pub formatted: String,

    /// Byte span of the line within the recognized text.
    pub span: Option<(usize, usize)>,

    /// Recognition confidence of the source text box, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

/// Result of scanning a single image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOutcome {
    /// The first detected IBAN, if any.
    pub iban: Option<DetectedIban>,

    /// Full recognized text the extraction ran over.
    pub raw_text: String,

    /// Total processing time in milliseconds, recognition included.
    pub processing_time_ms: u64,
}

/// Image-to-IBAN scanner.
///
/// Owns a recognition engine and runs the full pipeline: optional downscale,
/// recognition, confidence filtering, line extraction, display formatting.
/// Stateless between calls; each scan is a pure function of its input image.
pub struct IbanScanner<R> {
    recognizer: R,
    extractor: IbanExtractor,
    config: DetectConfig,
}

impl<R: TextRecognizer> IbanScanner<R> {
    /// Create a scanner with default configuration.
    pub fn new(recognizer: R) -> Self {
        Self::with_config(recognizer, DetectConfig::default())
    }

    /// Create a scanner with an explicit configuration.
    pub fn with_config(recognizer: R, config: DetectConfig) -> Self {
        let extractor = IbanExtractor::new().with_trimmed_lines(config.extraction.trim_lines);
        Self {
            recognizer,
            extractor,
            config,
        }
    }

    /// Scan an image for a Turkish IBAN.
    pub fn scan(&self, image: &DynamicImage) -> Result<ScanOutcome> {
        let start = Instant::now();

        let prepared = self.prepare(image);
        let mut recognized = self.recognizer.recognize(&prepared)?;

        let threshold = self.config.ocr.recognition_threshold;
        if threshold > 0.0 {
            let before = recognized.boxes.len();
            recognized.boxes.retain(|b| b.confidence >= threshold);
            if recognized.boxes.len() != before {
                debug!(
                    "dropped {} low-confidence boxes (threshold {})",
                    before - recognized.boxes.len(),
                    threshold
                );
                recognized.rebuild_text();
            }
        }

        let iban = self.detect(&recognized);
        let processing_time_ms = start.elapsed().as_millis() as u64;

        match &iban {
            Some(found) => info!("IBAN detected in {}ms: {}", processing_time_ms, found.formatted),
            None => info!("no IBAN detected in {}ms", processing_time_ms),
        }

        Ok(ScanOutcome {
            iban,
            raw_text: recognized.text,
            processing_time_ms,
        })
    }

    /// Downscale the image if its longer side exceeds the configured limit.
    fn prepare(&self, image: &DynamicImage) -> DynamicImage {
        let (width, height) = image.dimensions();
        let max = self.config.ocr.max_image_size;

        if max > 0 && width.max(height) > max {
            debug!("downscaling {}x{} to fit {}", width, height, max);
            image.resize(max, max, FilterType::Lanczos3)
        } else {
            image.clone()
        }
    }

    /// Run extraction over recognized text, attaching the source box
    /// confidence. Boxes map one-to-one onto lines of the joined text.
    fn detect(&self, recognized: &RecognizedText) -> Option<DetectedIban> {
        let m = self.extractor.extract(&recognized.text)?;

        let confidence = m.position.and_then(|(start, _)| {
            let line_index = recognized.text[..start].matches('\n').count();
            recognized.boxes.get(line_index).map(|b| b.confidence)
        });

        Some(DetectedIban {
            formatted: format_iban(&m.value),
            raw: m.value,
            span: m.position,
            confidence,
        })
    }
}

/// Pure text path: extract and format the first Turkish IBAN in `text`.
///
/// Same extraction semantics as the scanner, without an OCR engine. No
/// confidence is available for plain text.
pub fn scan_text(text: &str) -> Option<DetectedIban> {
    let m = IbanExtractor::new().extract(text)?;
    Some(DetectedIban {
        formatted: format_iban(&m.value),
        raw: m.value,
        span: m.position,
        confidence: None,
    })
}
