//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum length of a stored phone value, `+` included
pub const MIN_PHONE_LENGTH: usize = 5;

// Anything that is not an ASCII digit
static NON_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").unwrap());

/// Normalize a phone number: keep only digits and prefix `+`
///
/// ```
/// use ghop_shared::phone::normalize_phone;
/// assert_eq!(normalize_phone("555-123 456"), "+555123456");
/// ```
pub fn normalize_phone(raw: &str) -> String {
    format!("+{}", NON_DIGITS.replace_all(raw, ""))
}

/// Check the minimal shape of a phone value: at least five characters and a
/// leading `+`
pub fn has_valid_shape(phone: &str) -> bool {
    phone.len() >= MIN_PHONE_LENGTH && phone.starts_with('+')
}

/// Mask a phone number for logs, keeping the last 4 digits (e.g. `+*******1222`)
///
/// Numbers with 4 digits or fewer are masked completely.
pub fn mask_phone_number(phone: &str) -> String {
    let (prefix, rest) = match phone.strip_prefix('+') {
        Some(rest) => ("+", rest),
        None => ("", phone),
    };
    let chars: Vec<char> = rest.chars().collect();
    if chars.len() <= 4 {
        return format!("{}{}", prefix, "*".repeat(chars.len()));
    }

    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}{}", prefix, "*".repeat(chars.len() - 4), visible)
}
