//! Credential field validation.
//!
//! Pure functions with no knowledge of form state: the login form calls them
//! on every keystroke and again on submit.

use std::fmt;

/// Required length of a student number.
pub const STUDENT_NUMBER_LEN: usize = 8;

/// Minimum accepted PIN length, counted in characters.
pub const PIN_MIN_LEN: usize = 4;

// =========================================================
// Errors
// =========================================================

/// A single field validation failure.
///
/// Each variant maps to one fixed, user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    StudentNumberRequired,
    StudentNumberLength,
    StudentNumberLeadingZero,
    PinRequired,
    PinTooShort,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::StudentNumberRequired => "Student number is required",
            FieldError::StudentNumberLength => "Student number must be exactly 8 digits",
            FieldError::StudentNumberLeadingZero => "Student number cannot start with 0",
            FieldError::PinRequired => "PIN is required",
            FieldError::PinTooShort => "PIN must be at least 4 characters",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for FieldError {}

// =========================================================
// Validators
// =========================================================

/// Checks a student number: present, exactly eight ASCII digits, no leading zero.
pub fn validate_student_number(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::StudentNumberRequired);
    }
    if value.len() != STUDENT_NUMBER_LEN || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::StudentNumberLength);
    }
    if value.starts_with('0') {
        return Err(FieldError::StudentNumberLeadingZero);
    }
    Ok(())
}

/// Checks a PIN: present and at least [`PIN_MIN_LEN`] characters long.
pub fn validate_pin(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::PinRequired);
    }
    if value.chars().count() < PIN_MIN_LEN {
        return Err(FieldError::PinTooShort);
    }
    Ok(())
}

/// Input filter for the student number box.
///
/// Keeps ASCII digits only and truncates to [`STUDENT_NUMBER_LEN`].
/// Applying it twice yields the same result as applying it once.
pub fn sanitize_student_number(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(STUDENT_NUMBER_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================
    // student number
    // =========================================================

    #[test]
    fn test_student_number_accepts_eight_digits() {
        assert_eq!(validate_student_number("41234567"), Ok(()));
        assert_eq!(validate_student_number("10000000"), Ok(()));
        assert_eq!(validate_student_number("99999999"), Ok(()));
    }

    #[test]
    fn test_student_number_required() {
        assert_eq!(
            validate_student_number(""),
            Err(FieldError::StudentNumberRequired)
        );
    }

    #[test]
    fn test_student_number_wrong_length() {
        for value in ["4123456", "412345678", "1"] {
            assert_eq!(
                validate_student_number(value),
                Err(FieldError::StudentNumberLength),
                "{value}"
            );
        }
    }

    #[test]
    fn test_student_number_non_digit() {
        for value in ["4123456a", "4123 567", "４1234567", "-1234567"] {
            assert_eq!(
                validate_student_number(value),
                Err(FieldError::StudentNumberLength),
                "{value}"
            );
        }
    }

    #[test]
    fn test_student_number_leading_zero() {
        let err = validate_student_number("04123456").unwrap_err();
        assert_eq!(err, FieldError::StudentNumberLeadingZero);
        assert_eq!(err.to_string(), "Student number cannot start with 0");
    }

    #[test]
    fn test_student_number_exhaustive_first_digit() {
        for first in b'0'..=b'9' {
            let value = format!("{}1234567", first as char);
            let result = validate_student_number(&value);
            if first == b'0' {
                assert!(result.is_err());
            } else {
                assert!(result.is_ok(), "{value}");
            }
        }
    }

    // =========================================================
    // PIN
    // =========================================================

    #[test]
    fn test_pin_length_boundary() {
        assert_eq!(validate_pin(""), Err(FieldError::PinRequired));
        assert_eq!(validate_pin("1"), Err(FieldError::PinTooShort));
        assert_eq!(validate_pin("123"), Err(FieldError::PinTooShort));
        assert_eq!(validate_pin("1234"), Ok(()));
        assert_eq!(validate_pin("abcdefgh"), Ok(()));
    }

    #[test]
    fn test_pin_counts_characters_not_bytes() {
        // three characters, six bytes
        assert_eq!(validate_pin("éééé"), Ok(()));
        assert_eq!(validate_pin("ééé"), Err(FieldError::PinTooShort));
    }

    #[test]
    fn test_pin_message() {
        assert_eq!(
            validate_pin("12").unwrap_err().message(),
            "PIN must be at least 4 characters"
        );
    }

    // =========================================================
    // sanitization
    // =========================================================

    #[test]
    fn test_sanitize_strips_and_truncates() {
        assert_eq!(sanitize_student_number("41-23 45a67"), "41234567");
        assert_eq!(sanitize_student_number("4123456789"), "41234567");
        assert_eq!(sanitize_student_number("abc"), "");
        assert_eq!(sanitize_student_number("٣4"), "4");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        for raw in ["", "0", "x9y8z7", "12345678901234", "  4 1 2 3  ", "٣٤٥1"] {
            let once = sanitize_student_number(raw);
            assert_eq!(sanitize_student_number(&once), once, "{raw}");
        }
    }
}
