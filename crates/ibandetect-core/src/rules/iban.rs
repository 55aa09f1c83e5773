//! Turkish IBAN extraction, structural validation, and display formatting.

use tracing::debug;

use super::patterns::{IBAN_DISPLAY_MASK, TR_IBAN_BODY, TR_IBAN_LEN};
use super::{ExtractionMatch, FieldExtractor};

/// Line-oriented IBAN field extractor.
///
/// Scans recognized text line by line and reports every line that
/// structurally matches the Turkish IBAN format. Lines are returned exactly
/// as they appeared in the input, internal spacing included.
pub struct IbanExtractor {
    trim_lines: bool,
}

impl IbanExtractor {
    /// Create a new IBAN extractor.
    pub fn new() -> Self {
        Self { trim_lines: false }
    }

    /// Skip whitespace-only lines instead of only truly empty ones.
    ///
    /// Either setting produces the same matches, since a whitespace-only
    /// line always fails the prefix check; this just avoids running the
    /// validator on such lines.
    pub fn with_trimmed_lines(mut self, trim: bool) -> Self {
        self.trim_lines = trim;
        self
    }
}

impl Default for IbanExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for IbanExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();
        let mut offset = 0usize;

        for line in text.split('\n') {
            let skip = if self.trim_lines {
                line.trim().is_empty()
            } else {
                line.is_empty()
            };

            if !skip {
                if is_valid_iban(line) {
                    debug!("valid candidate line: {line}");
                    results.push(
                        ExtractionMatch::new(line.to_string(), line)
                            .with_position(offset, offset + line.len()),
                    );
                } else {
                    debug!("rejected candidate line: {line}");
                }
            }

            offset += line.len() + 1;
        }

        results
    }
}

/// Extract the first line of `text` that is a structurally valid Turkish
/// IBAN, exactly as it appeared in the input. `None` means no line matched.
pub fn extract_iban(text: &str) -> Option<String> {
    IbanExtractor::new().extract(text).map(|m| m.value)
}

/// Structurally validate a Turkish IBAN candidate.
///
/// Steps:
/// 1. The candidate must start with the literal uppercase `TR`.
/// 2. ASCII space characters (and only those) are removed.
/// 3. Exactly 26 characters must remain.
/// 4. The compact form must fully match the structural pattern: 2 letters,
///    2 digits, 4 alphanumerics, 7 digits, up to 16 more alphanumerics.
///
/// No MOD-97 checksum is performed; this is pattern matching only. The
/// prefix check is case-sensitive even though the pattern's letter classes
/// are not, so `tr...` candidates are rejected.
pub fn is_valid_iban(candidate: &str) -> bool {
    if !candidate.starts_with("TR") {
        return false;
    }

    let compact: String = candidate.chars().filter(|&c| c != ' ').collect();
    if compact.chars().count() != TR_IBAN_LEN {
        return false;
    }

    TR_IBAN_BODY.is_match(&compact)
}

/// Render an IBAN-like string in the grouped display format.
///
/// Non-alphanumeric characters are stripped, then the cleaned input is laid
/// over the display mask (`**** **** ...`), stopping as soon as the input is
/// exhausted. A result of one character or fewer gains a `TR` prefix as a
/// fallback label. The output is uppercased. Total; never fails on any
/// input.
pub fn format_iban(input: &str) -> String {
    let cleaned: String = input.chars().filter(|c| c.is_ascii_alphanumeric()).collect();

    let mut rest = cleaned.chars().peekable();
    let mut result = String::new();
    for ch in IBAN_DISPLAY_MASK.chars() {
        if rest.peek().is_none() {
            break;
        }
        if ch == '*' {
            if let Some(c) = rest.next() {
                result.push(c);
            }
        } else {
            result.push(ch);
        }
    }

    let labeled = if result.chars().count() > 1 {
        result
    } else {
        format!("TR{result}")
    };

    labeled.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_valid_iban() {
        assert!(is_valid_iban("TR330006100519786457841326"));
        assert!(is_valid_iban("TR33 0006 1005 1978 6457 8413 26")); // With spaces
    }

    #[test]
    fn test_is_valid_iban_rejects_length() {
        assert!(!is_valid_iban("TR33000610051978645784132")); // 25 chars
        assert!(!is_valid_iban("TR3300061005197864578413266")); // 27 chars
        assert!(!is_valid_iban("TR"));
    }

    #[test]
    fn test_is_valid_iban_rejects_wrong_classes() {
        // Letter where the seven-digit run must be
        assert!(!is_valid_iban("TR330006100A19786457841326"));
        // Check digits must be numeric
        assert!(!is_valid_iban("TRXX0006100519786457841326"));
    }

    #[test]
    fn test_is_valid_iban_prefix_case_sensitive() {
        // The pattern's letter classes accept lowercase, but the literal
        // prefix check does not.
        assert!(!is_valid_iban("tr330006100519786457841326"));
    }

    #[test]
    fn test_is_valid_iban_rejects_other_countries() {
        assert!(!is_valid_iban("PL61109010140000071219812874"));
        assert!(!is_valid_iban("DE89370400440532013000"));
    }

    #[test]
    fn test_is_valid_iban_only_spaces_removed() {
        // Tabs are not stripped, so the compact form is 27 characters.
        assert!(!is_valid_iban("TR\t330006100519786457841326"));
    }

    #[test]
    fn test_extract_iban_first_match_wins() {
        let text = "foo\nTR330006100519786457841326\nTR440006100519786457841399";
        assert_eq!(
            extract_iban(text),
            Some("TR330006100519786457841326".to_string())
        );
    }

    #[test]
    fn test_extract_iban_returns_line_verbatim() {
        let text = "IBAN asagida\nTR33 0006 1005 1978 6457 8413 26\nson";
        assert_eq!(
            extract_iban(text),
            Some("TR33 0006 1005 1978 6457 8413 26".to_string())
        );
    }

    #[test]
    fn test_extract_iban_not_found() {
        assert_eq!(extract_iban(""), None);
        assert_eq!(extract_iban("no iban here"), None);
        assert_eq!(extract_iban("TR12 too short"), None);
    }

    #[test]
    fn test_extract_iban_skips_blank_lines() {
        let text = "\n   \nTR330006100519786457841326";
        assert_eq!(
            extract_iban(text),
            Some("TR330006100519786457841326".to_string())
        );

        // Same result when whitespace-only lines are trimmed away first.
        let extractor = IbanExtractor::new().with_trimmed_lines(true);
        let m = extractor.extract(text).unwrap();
        assert_eq!(m.value, "TR330006100519786457841326");
    }

    #[test]
    fn test_extract_all_positions() {
        let text = "x\nTR330006100519786457841326\ny";
        let results = IbanExtractor::new().extract_all(text);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].position, Some((2, 28)));
        assert_eq!(results[0].source, "TR330006100519786457841326");
    }

    #[test]
    fn test_format_iban() {
        assert_eq!(
            format_iban("TR330006100519786457841326"),
            "TR33 0006 1005 1978 6457 8413 26"
        );
    }

    #[test]
    fn test_format_iban_already_grouped() {
        assert_eq!(
            format_iban("TR33 0006 1005 1978 6457 8413 26"),
            "TR33 0006 1005 1978 6457 8413 26"
        );
    }

    #[test]
    fn test_format_iban_empty_fallback() {
        assert_eq!(format_iban(""), "TR");
        assert_eq!(format_iban("---"), "TR");
        assert_eq!(format_iban("x"), "TRX");
    }

    #[test]
    fn test_format_iban_short_input_not_padded() {
        assert_eq!(format_iban("TR33000"), "TR33 000");
        // No trailing separator when the input ends on a group boundary.
        assert_eq!(format_iban("TR330006"), "TR33 0006");
    }

    #[test]
    fn test_format_iban_uppercases() {
        assert_eq!(
            format_iban("tr330006100519786457841326"),
            "TR33 0006 1005 1978 6457 8413 26"
        );
    }

    #[test]
    fn test_format_iban_idempotent() {
        let once = format_iban("TR330006100519786457841326");
        assert_eq!(format_iban(&once), once);
    }
}
