//! Regex patterns for Turkish IBAN extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Turkish IBAN body after space removal: country code, two check
    // digits, four-character bank code, seven digits, then up to sixteen
    // alphanumerics. Total length (26) is enforced separately.
    pub static ref TR_IBAN_BODY: Regex = Regex::new(
        r"^[a-zA-Z]{2}[0-9]{2}[a-zA-Z0-9]{4}[0-9]{7}[a-zA-Z0-9]{0,16}$"
    ).unwrap();
}

/// Display mask for grouped IBAN rendering. Each `*` consumes one input
/// character; other characters are emitted literally.
pub const IBAN_DISPLAY_MASK: &str = "**** **** **** **** **** **** **";

/// Length of a Turkish IBAN once spaces are removed.
pub const TR_IBAN_LEN: usize = 26;
