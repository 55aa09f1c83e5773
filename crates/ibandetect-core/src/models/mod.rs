//! Data models shared across the detection pipeline.

pub mod config;

pub use config::{DetectConfig, ExtractionConfig, ModelConfig, OcrConfig};
