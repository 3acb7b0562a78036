//! Thuật toán dựng khối `timeline-item` thành view model.

use serde::{Deserialize, Serialize};

use crate::attributes::{parse_images, AttributeSource, TimelineItemAttributes};
use crate::carousel::{CarouselId, CarouselState, SlideDirection};
use crate::RenderConfig;

/// Loại media của một slide.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Phân loại theo phần mở rộng, bỏ qua query và fragment.
    pub fn classify(source: &str, video_extensions: &[String]) -> Self {
        let path = source.split(['?', '#']).next().unwrap_or_default();
        let file_name = path.rsplit('/').next().unwrap_or_default();

        match file_name.rsplit_once('.') {
            Some((_, ext))
                if video_extensions
                    .iter()
                    .any(|video| video.eq_ignore_ascii_case(ext)) =>
            {
                MediaKind::Video
            }
            _ => MediaKind::Image,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slide {
    pub index: usize,
    pub source: String,
    pub kind: MediaKind,
    pub active: bool,
}

/// Nút prev/next gắn với carousel của chính phần tử.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CarouselControl {
    pub direction: SlideDirection,
    /// Selector `#<carouselId>`.
    pub target: String,
    pub disabled: bool,
}

impl CarouselControl {
    pub fn label(&self) -> &'static str {
        match self.direction {
            SlideDirection::Prev => "Previous",
            SlideDirection::Next => "Next",
        }
    }
}

/// Nội dung đã dựng của một phần tử.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineItemView {
    pub carousel_id: CarouselId,
    pub title: String,
    /// Markup do tác giả viết, không escape.
    pub description: String,
    pub date: String,
    pub link: String,
    pub link_label: String,
    pub slides: Vec<Slide>,
    pub controls: Vec<CarouselControl>,
}

impl TimelineItemView {
    /// Gắn lại toàn bộ view vào một mã carousel khác.
    pub fn with_carousel_id(mut self, carousel_id: CarouselId) -> Self {
        self.controls = build_controls(&carousel_id, self.slides.is_empty());
        self.carousel_id = carousel_id;
        self
    }

    pub fn carousel_state(&self) -> CarouselState {
        CarouselState::new(self.carousel_id.clone(), self.slides.len())
    }

    pub fn control(&self, direction: SlideDirection) -> Option<&CarouselControl> {
        self.controls
            .iter()
            .find(|control| control.direction == direction)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    InvalidImages,
}

/// Chẩn đoán phát sinh khi dựng (không làm hỏng việc hiển thị).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderDiagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderOutcome {
    pub view: TimelineItemView,
    pub diagnostics: Vec<RenderDiagnostic>,
}

/// Đọc thuộc tính từ `source` và dựng khối hiển thị. Không bao giờ thất bại.
pub fn render_timeline_item(source: &impl AttributeSource, config: &RenderConfig) -> RenderOutcome {
    let attributes = TimelineItemAttributes::from_source(source);
    let carousel_id = CarouselId::generate(&config.carousel_id_prefix);
    render_attributes(&attributes, config, carousel_id)
}

pub(crate) fn render_attributes(
    attributes: &TimelineItemAttributes,
    config: &RenderConfig,
    carousel_id: CarouselId,
) -> RenderOutcome {
    let mut diagnostics = Vec::new();

    let images = match parse_images(attributes.images.as_deref()) {
        Ok(images) => images,
        Err(err) => {
            log::error!("Invalid images JSON: {err}");
            diagnostics.push(RenderDiagnostic {
                kind: DiagnosticKind::InvalidImages,
                message: err.to_string(),
            });
            Vec::new()
        }
    };

    let link = attributes
        .link
        .as_deref()
        .filter(|link| !link.is_empty())
        .unwrap_or(&config.placeholder_link)
        .to_string();

    let slides: Vec<Slide> = images
        .into_iter()
        .enumerate()
        .map(|(index, source)| Slide {
            index,
            kind: MediaKind::classify(&source, &config.video_extensions),
            source,
            active: index == 0,
        })
        .collect();

    let controls = build_controls(&carousel_id, slides.is_empty());

    RenderOutcome {
        view: TimelineItemView {
            carousel_id,
            title: attributes.title.clone().unwrap_or_default(),
            description: attributes.description.clone().unwrap_or_default(),
            date: attributes.date.clone().unwrap_or_default(),
            link,
            link_label: config.link_label.clone(),
            slides,
            controls,
        },
        diagnostics,
    }
}

fn build_controls(carousel_id: &CarouselId, inert: bool) -> Vec<CarouselControl> {
    [SlideDirection::Prev, SlideDirection::Next]
        .into_iter()
        .map(|direction| CarouselControl {
            direction,
            target: carousel_id.selector(),
            disabled: inert,
        })
        .collect()
}
