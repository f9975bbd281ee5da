//! Phone number input formatting.
//!
//! Runs on every keystroke: whatever the user typed is reduced to at most eleven digits
//! and regrouped as 3-4-4. Already formatted input comes back unchanged.

/// Maximum number of digits kept from the input
pub const MAX_DIGITS: usize = 11;

/// Length of a complete `DDD-DDDD-DDDD` number
pub const FORMATTED_LEN: usize = 13;

/// Reduces raw input to digits and regroups them as 3-4-4.
///
/// A hyphen is only inserted when the group after it has at least one digit.
#[must_use]
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_DIGITS)
        .collect();

    let mut formatted = String::with_capacity(FORMATTED_LEN);
    for (index, digit) in digits.chars().enumerate() {
        if index == 3 || index == 7 {
            formatted.push('-');
        }
        formatted.push(digit);
    }
    formatted
}

/// Whether a formatted phone number is complete.
#[must_use]
pub fn is_valid_phone(formatted: &str) -> bool {
    formatted.len() == FORMATTED_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_full_number() {
        assert_eq!(format_phone("01012345678"), "010-1234-5678");
    }

    #[test]
    fn test_format_partial_number_omits_trailing_hyphen() {
        assert_eq!(format_phone("0101234"), "010-1234");
        assert_eq!(format_phone("010"), "010");
        assert_eq!(format_phone("0101"), "010-1");
        assert_eq!(format_phone(""), "");
    }

    #[test]
    fn test_format_is_idempotent() {
        for raw in ["010-1234-5678", "010-12", "010"] {
            assert_eq!(format_phone(&format_phone(raw)), format_phone(raw));
            assert_eq!(format_phone(raw), raw);
        }
    }

    #[test]
    fn test_format_strips_noise_and_truncates() {
        assert_eq!(format_phone("(010) 1234 5678 99"), "010-1234-5678");
        assert_eq!(format_phone("abc"), "");
    }

    #[test]
    fn test_validity_requires_exact_length() {
        assert!(is_valid_phone("010-1234-5678"));
        assert!(!is_valid_phone("010-1234-567"));
        assert!(!is_valid_phone("010-1234"));
        assert!(!is_valid_phone(""));
    }
}
