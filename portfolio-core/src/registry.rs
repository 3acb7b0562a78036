//! Đăng ký custom element một lần duy nhất.

use std::collections::BTreeSet;

use crate::PortfolioError;

const RESERVED_NAMES: &[&str] = &[
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Defined,
    AlreadyDefined,
}

/// Sổ đăng ký các tên thẻ đã định nghĩa trong ứng dụng.
#[derive(Debug, Default)]
pub struct ElementRegistry {
    defined: BTreeSet<String>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Định nghĩa `tag`; gọi lại với cùng tên không có tác dụng.
    pub fn define(&mut self, tag: &str) -> Result<Registration, PortfolioError> {
        validate_tag_name(tag)?;

        if self.defined.insert(tag.to_string()) {
            log::debug!("registered custom element <{tag}>");
            Ok(Registration::Defined)
        } else {
            Ok(Registration::AlreadyDefined)
        }
    }

    pub fn is_defined(&self, tag: &str) -> bool {
        self.defined.contains(tag)
    }
}

/// Kiểm tra tên custom element hợp lệ.
pub fn validate_tag_name(tag: &str) -> Result<(), PortfolioError> {
    let starts_lowercase = tag
        .chars()
        .next()
        .is_some_and(|ch| ch.is_ascii_lowercase());
    let allowed_chars = tag
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || matches!(ch, '-' | '.' | '_'));

    if !starts_lowercase || !allowed_chars || !tag.contains('-') || RESERVED_NAMES.contains(&tag) {
        return Err(PortfolioError::InvalidTagName(tag.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_is_register_once() {
        let mut registry = ElementRegistry::new();

        assert_eq!(registry.define("timeline-item").expect("define"), Registration::Defined);
        assert_eq!(
            registry.define("timeline-item").expect("define again"),
            Registration::AlreadyDefined
        );
        assert!(registry.is_defined("timeline-item"));
        assert!(!registry.is_defined("project-card"));
    }

    #[test]
    fn invalid_names_are_rejected() {
        for tag in ["timeline", "Timeline-item", "1-item", "-item", "font-face", "time line-x", ""] {
            let err = validate_tag_name(tag).expect_err(tag);
            assert!(matches!(err, PortfolioError::InvalidTagName(_)));
        }
        assert!(validate_tag_name("timeline-item").is_ok());
        assert!(validate_tag_name("my-el.v2_x").is_ok());
    }

    #[test]
    fn invalid_name_is_not_recorded() {
        let mut registry = ElementRegistry::new();
        assert!(registry.define("timeline").is_err());
        assert!(!registry.is_defined("timeline"));
    }
}
