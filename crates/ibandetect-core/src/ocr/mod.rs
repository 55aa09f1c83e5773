//! OCR boundary: recognized-text model and the recognizer trait.
//!
//! The recognition engine is treated as a black box behind
//! [`TextRecognizer`]: input is an image, output is recognized text. The
//! bundled [`PureOcrEngine`] implementation (behind the `native` feature)
//! is one such engine; callers may plug in any other.

#[cfg(feature = "native")]
mod pure_engine;

#[cfg(feature = "native")]
pub use pure_engine::PureOcrEngine;

use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::error::OcrError;

/// A detected text box with its coordinates and content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBox {
    /// Bounding box coordinates (x1, y1, x2, y2, x3, y3, x4, y4) for quadrilateral.
    pub bbox: [f32; 8],

    /// Recognized text content.
    pub text: String,

    /// Recognition confidence score (0.0 - 1.0).
    pub confidence: f32,
}

impl TextBox {
    /// Get the axis-aligned bounding rectangle.
    pub fn rect(&self) -> (f32, f32, f32, f32) {
        let xs = [self.bbox[0], self.bbox[2], self.bbox[4], self.bbox[6]];
        let ys = [self.bbox[1], self.bbox[3], self.bbox[5], self.bbox[7]];

        let min_x = xs.iter().cloned().fold(f32::INFINITY, f32::min);
        let max_x = xs.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        let min_y = ys.iter().cloned().fold(f32::INFINITY, f32::min);
        let max_y = ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max);

        (min_x, min_y, max_x, max_y)
    }
}

/// Result of text recognition on an image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizedText {
    /// Detected and recognized text boxes, in reading order.
    pub boxes: Vec<TextBox>,

    /// Full text (boxes joined with newlines).
    pub text: String,

    /// Processing time in milliseconds.
    pub processing_time_ms: u64,

    /// Image dimensions (width, height).
    pub image_size: (u32, u32),
}

impl RecognizedText {
    /// Create an empty result.
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            boxes: Vec::new(),
            text: String::new(),
            processing_time_ms: 0,
            image_size: (width, height),
        }
    }

    /// Sort boxes by reading order (top-to-bottom, left-to-right) and
    /// rebuild the full text.
    pub fn sort_by_reading_order(&mut self) {
        self.boxes.sort_by(|a, b| {
            let (_, ay, _, _) = a.rect();
            let (_, by, _, _) = b.rect();

            // Group by approximate vertical position (within 20 pixels)
            let row_a = (ay / 20.0) as i32;
            let row_b = (by / 20.0) as i32;

            if row_a != row_b {
                row_a.cmp(&row_b)
            } else {
                // Same row, sort by x
                let (ax, _, _, _) = a.rect();
                let (bx, _, _, _) = b.rect();
                ax.partial_cmp(&bx).unwrap_or(std::cmp::Ordering::Equal)
            }
        });

        self.rebuild_text();
    }

    /// Rebuild `text` from the current boxes, one line per box.
    pub fn rebuild_text(&mut self) {
        self.text = self
            .boxes
            .iter()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
    }
}

/// Text recognition engine boundary.
///
/// Implementations run OCR on an image and return the recognized text with
/// per-box confidences. Engine failures (model load, inference) surface as
/// [`OcrError`]; "no text found" is an empty result, not an error.
pub trait TextRecognizer {
    fn recognize(&self, image: &DynamicImage) -> Result<RecognizedText, OcrError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn boxed(text: &str, x: f32, y: f32) -> TextBox {
        TextBox {
            bbox: [x, y, x + 100.0, y, x + 100.0, y + 20.0, x, y + 20.0],
            text: text.to_string(),
            confidence: 0.9,
        }
    }

    #[test]
    fn test_reading_order_sort() {
        let mut result = RecognizedText::empty(640, 480);
        result.boxes = vec![
            boxed("second", 10.0, 100.0),
            boxed("first", 10.0, 10.0),
            boxed("first-right", 200.0, 12.0),
        ];
        result.sort_by_reading_order();
        assert_eq!(result.text, "first\nfirst-right\nsecond");
    }

    #[test]
    fn test_rebuild_text_after_filtering() {
        let mut result = RecognizedText::empty(640, 480);
        result.boxes = vec![boxed("keep", 0.0, 0.0), boxed("drop", 0.0, 50.0)];
        result.rebuild_text();
        result.boxes.retain(|b| b.text != "drop");
        result.rebuild_text();
        assert_eq!(result.text, "keep");
    }
}
