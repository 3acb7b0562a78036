//! Hợp đồng thuộc tính của phần tử `timeline-item`.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::PortfolioError;

pub const ATTR_TITLE: &str = "title";
pub const ATTR_DESCRIPTION: &str = "description";
pub const ATTR_DATE: &str = "date";
pub const ATTR_LINK: &str = "link";
pub const ATTR_IMAGES: &str = "images";

/// Nguồn thuộc tính dạng văn bản (DOM element, map, ...).
pub trait AttributeSource {
    fn attribute(&self, name: &str) -> Option<String>;
}

impl AttributeSource for HashMap<String, String> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl AttributeSource for BTreeMap<String, String> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Bộ thuộc tính thô, đúng như host truyền vào.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineItemAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Mảng JSON các đường dẫn ảnh/video.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<String>,
}

impl TimelineItemAttributes {
    /// Đọc toàn bộ thuộc tính từ một nguồn bất kỳ.
    pub fn from_source(source: &impl AttributeSource) -> Self {
        Self {
            title: source.attribute(ATTR_TITLE),
            description: source.attribute(ATTR_DESCRIPTION),
            date: source.attribute(ATTR_DATE),
            link: source.attribute(ATTR_LINK),
            images: source.attribute(ATTR_IMAGES),
        }
    }

    /// Các cặp (tên, giá trị) đang có mặt, theo thứ tự cố định.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        [
            (ATTR_TITLE, &self.title),
            (ATTR_DESCRIPTION, &self.description),
            (ATTR_DATE, &self.date),
            (ATTR_LINK, &self.link),
            (ATTR_IMAGES, &self.images),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|value| (name, value)))
        .collect()
    }
}

impl AttributeSource for TimelineItemAttributes {
    fn attribute(&self, name: &str) -> Option<String> {
        match name {
            ATTR_TITLE => self.title.clone(),
            ATTR_DESCRIPTION => self.description.clone(),
            ATTR_DATE => self.date.clone(),
            ATTR_LINK => self.link.clone(),
            ATTR_IMAGES => self.images.clone(),
            _ => None,
        }
    }
}

/// Giải mã thuộc tính `images`. Vắng mặt hoặc chuỗi rỗng được coi là `[]`.
pub fn parse_images(raw: Option<&str>) -> Result<Vec<String>, PortfolioError> {
    let raw = match raw {
        Some(value) if !value.is_empty() => value,
        _ => return Ok(Vec::new()),
    };

    serde_json::from_str::<Vec<String>>(raw)
        .map_err(|err| PortfolioError::InvalidImages(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_empty_images_decode_to_nothing() {
        assert!(parse_images(None).expect("absent").is_empty());
        assert!(parse_images(Some("")).expect("empty").is_empty());
        assert!(parse_images(Some("[]")).expect("literal").is_empty());
    }

    #[test]
    fn images_keep_input_order() {
        let images = parse_images(Some(r#"["b.png","a.png","c.mp4"]"#)).expect("images");
        assert_eq!(images, vec!["b.png", "a.png", "c.mp4"]);
    }

    #[test]
    fn non_string_arrays_are_rejected() {
        for raw in ["[unterminated", "{}", "[1,2]", "\"a.png\"", "null"] {
            let err = parse_images(Some(raw)).expect_err(raw);
            assert!(matches!(err, PortfolioError::InvalidImages(_)));
        }
    }

    #[test]
    fn attributes_read_from_map_source() {
        let mut source = HashMap::new();
        source.insert("title".to_string(), "X".to_string());
        source.insert("images".to_string(), "[]".to_string());

        let attrs = TimelineItemAttributes::from_source(&source);
        assert_eq!(attrs.title.as_deref(), Some("X"));
        assert_eq!(attrs.link, None);
        assert_eq!(attrs.pairs(), vec![("title", "X"), ("images", "[]")]);
    }
}
