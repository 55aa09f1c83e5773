//! WASM bindings for Turkish IBAN detection.
//!
//! This crate provides WebAssembly bindings over the pure text path for use
//! in browsers and Node.js. OCR stays on the JavaScript side (for example a
//! browser OCR library); the recognized text comes in here as a string.

use wasm_bindgen::prelude::*;

use ibandetect_core::scanner;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Extract the first structurally valid Turkish IBAN line from recognized
/// text. Returns `null` when no line matches.
#[wasm_bindgen]
pub fn extract_iban_from_text(text: &str) -> Option<String> {
    ibandetect_core::extract_iban(text)
}

/// Structurally validate a Turkish IBAN candidate.
#[wasm_bindgen]
pub fn is_valid_iban(candidate: &str) -> bool {
    ibandetect_core::is_valid_iban(candidate)
}

/// Render an IBAN-like string in the grouped display format.
#[wasm_bindgen]
pub fn format_iban(input: &str) -> String {
    ibandetect_core::format_iban(input)
}

/// Run the full text scan and return the detection (raw line, formatted
/// display, byte span) as a JS object, or `null` when nothing matched.
#[wasm_bindgen]
pub fn scan_text(text: &str) -> Result<JsValue, JsValue> {
    match scanner::scan_text(text) {
        Some(found) => {
            serde_wasm_bindgen::to_value(&found).map_err(|e| JsValue::from_str(&e.to_string()))
        }
        None => Ok(JsValue::NULL),
    }
}
