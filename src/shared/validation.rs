use lazy_static::lazy_static;
use regex::Regex;

use crate::core::error::{AppError, Result};

lazy_static! {
    /// Carousel button targets: empty, a site-relative path, or an absolute http(s) URL
    /// - Valid: "", "/?category=Wall%20Panels", "/products/42", "https://example.com/a"
    /// - Invalid: "products", "javascript:alert(1)", "/with space"
    pub static ref LINK_REGEX: Regex = Regex::new(r"^(|/\S*|https?://\S+)$").unwrap();

    /// Phone and WhatsApp numbers: optional leading +, digits, spaces, dashes, parentheses
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^(|\+?[0-9][0-9 ()\-]{5,19})$").unwrap();
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Required field on a create payload
pub fn require_present(field: &str, value: &str) -> Result<()> {
    if is_blank(value) {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

/// Required field on a partial update: absent is fine, blank is not
pub fn reject_blank(field: &str, value: Option<&str>) -> Result<()> {
    match value {
        Some(v) if is_blank(v) => Err(AppError::Validation(format!(
            "{} cannot be empty",
            field
        ))),
        _ => Ok(()),
    }
}

/// Trim a free-text field in place
pub fn trim_owned(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.len() == value.len() {
        value
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_regex_valid() {
        assert!(LINK_REGEX.is_match(""));
        assert!(LINK_REGEX.is_match("/"));
        assert!(LINK_REGEX.is_match("/?category=Wall%20Panels"));
        assert!(LINK_REGEX.is_match("/?section=featured"));
        assert!(LINK_REGEX.is_match("https://example.com/catalog"));
    }

    #[test]
    fn test_link_regex_invalid() {
        assert!(!LINK_REGEX.is_match("products")); // relative without slash
        assert!(!LINK_REGEX.is_match("javascript:alert(1)"));
        assert!(!LINK_REGEX.is_match("/with space"));
        assert!(!LINK_REGEX.is_match("ftp://example.com"));
    }

    #[test]
    fn test_phone_regex() {
        assert!(PHONE_REGEX.is_match("+91 1234567890"));
        assert!(PHONE_REGEX.is_match("(022) 555-0101"));
        assert!(PHONE_REGEX.is_match(""));
        assert!(!PHONE_REGEX.is_match("call me"));
        assert!(!PHONE_REGEX.is_match("12"));
    }

    #[test]
    fn test_require_present() {
        assert!(require_present("name", "Royal Crown Cornice").is_ok());
        assert!(matches!(
            require_present("name", "   "),
            Err(AppError::Validation(msg)) if msg == "name is required"
        ));
    }

    #[test]
    fn test_reject_blank() {
        assert!(reject_blank("name", None).is_ok());
        assert!(reject_blank("name", Some("Cornice")).is_ok());
        assert!(reject_blank("name", Some("")).is_err());
    }

    #[test]
    fn test_trim_owned() {
        assert_eq!(trim_owned("  Wall Panels ".to_string()), "Wall Panels");
        assert_eq!(trim_owned("Wall Panels".to_string()), "Wall Panels");
    }
}
