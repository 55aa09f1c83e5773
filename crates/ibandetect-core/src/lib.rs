//! Core library for Turkish IBAN detection from OCR text.
//!
//! This crate provides:
//! - An OCR boundary (recognizer trait plus an optional pure-Rust engine)
//! - Rule-based Turkish IBAN extraction from recognized text
//! - Grouped display formatting for detected IBANs
//! - A scan pipeline composing recognition, extraction, and formatting

pub mod error;
pub mod models;
pub mod ocr;
pub mod rules;
pub mod scanner;

pub use error::{DetectError, OcrError, Result};
pub use models::config::{DetectConfig, ExtractionConfig, ModelConfig, OcrConfig};
pub use ocr::{RecognizedText, TextBox, TextRecognizer};
pub use rules::{ExtractionMatch, FieldExtractor};
pub use rules::iban::{IbanExtractor, extract_iban, format_iban, is_valid_iban};
pub use scanner::{DetectedIban, IbanScanner, ScanOutcome, scan_text};

#[cfg(feature = "native")]
pub use ocr::PureOcrEngine;
