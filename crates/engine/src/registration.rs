//! The module contains the student registration validator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Registration validation errors.
///
/// A closed enumeration; the presentation layer maps each variant to a
/// user-facing message. Nothing else can go wrong here.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name and Course fields are mandatory.")]
    MissingField,
    #[error("Phone number must be exactly 10 digits.")]
    InvalidPhone,
}

/// A validated registration, ready for the confirmation message.
///
/// Fields are trimmed. Nothing is stored anywhere: a successful validation
/// only drives a confirmation and a form reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub course: String,
}

/// Validates a registration form.
///
/// Name and course are mandatory after trimming. The phone number, when
/// given, must be exactly 10 decimal digits. The address field is never
/// validated.
pub fn validate(name: &str, course: &str, phone: &str) -> Result<Registration, ValidationError> {
    let name = name.trim();
    let course = course.trim();
    let phone = phone.trim();

    if name.is_empty() || course.is_empty() {
        return Err(ValidationError::MissingField);
    }

    if !phone.is_empty() && !is_ten_digits(phone) {
        return Err(ValidationError::InvalidPhone);
    }

    Ok(Registration {
        name: name.to_string(),
        course: course.to_string(),
    })
}

fn is_ten_digits(phone: &str) -> bool {
    phone.len() == 10 && phone.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_name_or_course_fails() {
        assert_eq!(validate("", "Math", ""), Err(ValidationError::MissingField));
        assert_eq!(validate("Alex", "", ""), Err(ValidationError::MissingField));
        assert_eq!(
            validate("   ", "Math", ""),
            Err(ValidationError::MissingField)
        );
    }

    #[test]
    fn short_or_non_numeric_phone_fails() {
        assert_eq!(
            validate("Alex", "Math", "12345"),
            Err(ValidationError::InvalidPhone)
        );
        assert_eq!(
            validate("Alex", "Math", "12345678901"),
            Err(ValidationError::InvalidPhone)
        );
        assert_eq!(
            validate("Alex", "Math", "12345abcde"),
            Err(ValidationError::InvalidPhone)
        );
    }

    #[test]
    fn empty_phone_is_accepted() {
        let registration = validate("Alex", "Math", "").unwrap();
        assert_eq!(registration.name, "Alex");
        assert_eq!(registration.course, "Math");
    }

    #[test]
    fn full_phone_is_accepted() {
        assert!(validate("Alex", "Math", "1234567890").is_ok());
    }

    #[test]
    fn fields_are_trimmed() {
        let registration = validate("  Alex ", " Math  ", " 1234567890 ").unwrap();
        assert_eq!(registration.name, "Alex");
        assert_eq!(registration.course, "Math");
    }
}
