//! Configuration structures for the detection pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the ibandetect pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectConfig {
    /// OCR configuration.
    pub ocr: OcrConfig,

    /// IBAN extraction configuration.
    pub extraction: ExtractionConfig,

    /// Model configuration.
    pub models: ModelConfig,
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            ocr: OcrConfig::default(),
            extraction: ExtractionConfig::default(),
            models: ModelConfig::default(),
        }
    }
}

/// OCR engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Maximum image dimension (longer side) for processing.
    /// Larger images are downscaled before recognition. 0 disables scaling.
    pub max_image_size: u32,

    /// Recognition confidence threshold (0.0 - 1.0). Boxes below this are
    /// dropped before extraction.
    pub recognition_threshold: f32,

    /// Keep `[UNK]` tokens in recognized text instead of replacing them
    /// with spaces.
    pub keep_unk: bool,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            max_image_size: 2048,
            recognition_threshold: 0.0, // Disabled - CTC confidence scores are inherently low
            keep_unk: false,
        }
    }
}

/// IBAN extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Skip lines that contain only whitespace instead of only truly
    /// empty lines. Observable results are identical either way since
    /// whitespace-only lines never validate.
    pub trim_lines: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self { trim_lines: false }
    }
}

/// Model file paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Directory containing model files.
    pub model_dir: PathBuf,

    /// Text detection model file name.
    pub detection_model: String,

    /// Text recognition model file name.
    pub recognition_model: String,

    /// Character dictionary file name.
    pub dictionary: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("models"),
            detection_model: "det.onnx".to_string(),
            recognition_model: "latin_rec.onnx".to_string(),
            dictionary: "latin_dict.txt".to_string(),
        }
    }
}

impl DetectConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }

    /// Get full path to a model file.
    pub fn model_path(&self, model_name: &str) -> PathBuf {
        self.models.model_dir.join(model_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = DetectConfig::default();
        assert_eq!(config.ocr.max_image_size, 2048);
        assert!(!config.extraction.trim_lines);
        assert_eq!(config.models.detection_model, "det.onnx");
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = DetectConfig::default();
        config.ocr.max_image_size = 1024;
        config.extraction.trim_lines = true;
        config.save(&path).unwrap();

        let loaded = DetectConfig::from_file(&path).unwrap();
        assert_eq!(loaded.ocr.max_image_size, 1024);
        assert!(loaded.extraction.trim_lines);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: DetectConfig =
            serde_json::from_str(r#"{"ocr": {"max_image_size": 512}}"#).unwrap();
        assert_eq!(config.ocr.max_image_size, 512);
        assert_eq!(config.ocr.recognition_threshold, 0.0);
        assert_eq!(config.models.dictionary, "latin_dict.txt");
    }
}
