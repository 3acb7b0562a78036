//! Logic lõi dựng khối `timeline-item` cho trang portfolio.

use serde::{Deserialize, Serialize};

pub mod attributes;
pub mod carousel;
pub mod markup;
pub mod registry;
pub mod render;
pub mod styles;

pub use attributes::{parse_images, AttributeSource, TimelineItemAttributes};
pub use carousel::{CarouselId, CarouselState, SlideDirection};
pub use markup::{render_fragment_html, render_host_html};
pub use registry::{validate_tag_name, ElementRegistry, Registration};
pub use render::{
    render_timeline_item, CarouselControl, DiagnosticKind, MediaKind, RenderDiagnostic,
    RenderOutcome, Slide, TimelineItemView,
};

/// Cấu hình hiển thị dùng chung cho mọi phần tử `timeline-item`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderConfig {
    /// Tên thẻ custom element được đăng ký.
    pub tag_name: String,
    /// Đích của liên kết khi thuộc tính `link` vắng mặt.
    pub placeholder_link: String,
    /// Nhãn hiển thị của liên kết dự án.
    pub link_label: String,
    /// Tiền tố cho mã carousel sinh theo từng phần tử.
    pub carousel_id_prefix: String,
    /// Phần mở rộng được coi là video (không phân biệt hoa thường).
    pub video_extensions: Vec<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tag_name: "timeline-item".to_string(),
            placeholder_link: "#".to_string(),
            link_label: "View Project →".to_string(),
            carousel_id_prefix: "carousel-".to_string(),
            video_extensions: ["mp4", "webm", "ogg", "mov"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Một dự án trong danh sách portfolio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectRecord {
    pub title: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    /// Có thể chứa markup; được chèn nguyên văn khi hiển thị.
    pub description: String,
}

impl ProjectRecord {
    /// Ánh xạ bản ghi sang bộ thuộc tính của phần tử, mã hóa `images` thành JSON.
    pub fn to_attributes(&self) -> Result<TimelineItemAttributes, PortfolioError> {
        let images = serde_json::to_string(&self.images)
            .map_err(|err| PortfolioError::Encode(err.to_string()))?;

        Ok(TimelineItemAttributes {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            date: Some(self.date.clone()),
            link: self.link.clone(),
            images: Some(images),
        })
    }
}

/// Lỗi chung của portfolio.
#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    #[error("JSON của thuộc tính images không hợp lệ: {0}")]
    InvalidImages(String),
    #[error("Tên custom element không hợp lệ: {0}")]
    InvalidTagName(String),
    #[error("Không đọc được danh sách dự án: {0}")]
    Registry(String),
    #[error("Không serialize được dữ liệu: {0}")]
    Encode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_maps_onto_attribute_contract() {
        let record = ProjectRecord {
            title: "Dokkie".to_string(),
            date: "2024".to_string(),
            link: None,
            technologies: vec!["vite".to_string()],
            images: vec!["/img/a b.png".to_string(), "/img/c.mp4".to_string()],
            description: "<b>hi</b>".to_string(),
        };

        let attrs = record.to_attributes().expect("mapping");
        assert_eq!(attrs.title.as_deref(), Some("Dokkie"));
        assert_eq!(attrs.link, None);
        assert_eq!(
            attrs.images.as_deref(),
            Some(r#"["/img/a b.png","/img/c.mp4"]"#)
        );
    }

    #[test]
    fn record_deserializes_without_optional_fields() {
        let record: ProjectRecord =
            serde_json::from_str(r#"{"title":"X","date":"2024","description":"Y"}"#)
                .expect("record");
        assert!(record.link.is_none());
        assert!(record.images.is_empty());
        assert!(record.technologies.is_empty());
    }
}
