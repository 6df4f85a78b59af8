//! Language-code validation.
//! Codes are exactly three lowercase ASCII letters (ISO 639-3 style).

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ApiError;

fn code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z]{3}$").expect("valid regex"))
}

/// Whether `code` has the exact 3-lowercase-letter shape.
pub fn is_valid_code(code: &str) -> bool {
    code_pattern().is_match(code)
}

/// Normalise an optional language query parameter.
///
/// The browse UI sends the literal string `"undefined"` for an unselected
/// filter, so both that and the empty string count as "no filter". Anything
/// else must be a valid code or the request is rejected.
pub fn optional_code(raw: Option<&str>) -> Result<Option<&str>, ApiError> {
    match raw {
        None | Some("") | Some("undefined") => Ok(None),
        Some(code) if is_valid_code(code) => Ok(Some(code)),
        Some(_) => Err(ApiError::BadRequest(
            "Invalid language parameter".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_three_lowercase_letters() {
        assert!(is_valid_code("spa"));
        assert!(is_valid_code("eng"));
    }

    #[test]
    fn test_rejects_wrong_shapes() {
        assert!(!is_valid_code("sp"));
        assert!(!is_valid_code("span"));
        assert!(!is_valid_code("SPA"));
        assert!(!is_valid_code("sp1"));
        assert!(!is_valid_code("sp a"));
        assert!(!is_valid_code(""));
    }

    #[test]
    fn test_optional_code_treats_placeholder_as_absent() {
        assert_eq!(optional_code(None).unwrap(), None);
        assert_eq!(optional_code(Some("")).unwrap(), None);
        assert_eq!(optional_code(Some("undefined")).unwrap(), None);
        assert_eq!(optional_code(Some("spa")).unwrap(), Some("spa"));
    }

    #[test]
    fn test_optional_code_rejects_malformed() {
        assert!(optional_code(Some("es")).is_err());
        assert!(optional_code(Some("ESP")).is_err());
        assert!(optional_code(Some("e$p")).is_err());
    }
}
