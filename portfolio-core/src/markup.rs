//! Serialize a [`TimelineItemView`] to HTML.
//!
//! `description` is author-controlled content and is written verbatim; every
//! other value is escaped. Revisit this if descriptions ever come from users.

use crate::attributes::TimelineItemAttributes;
use crate::render::{MediaKind, Slide, TimelineItemView};
use crate::styles::{STYLE_MARKER_ATTR, TIMELINE_ITEM_STYLES};
use crate::RenderConfig;

/// Content of the element's shadow root: style block followed by the markup.
pub fn render_fragment_html(view: &TimelineItemView) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<style {STYLE_MARKER_ATTR}>{TIMELINE_ITEM_STYLES}</style>"
    ));

    out.push_str(r#"<div class="timeline-item"><div class="timeline-marker"></div>"#);
    out.push_str(r#"<div class="timeline-content"><div class="project-card">"#);

    out.push_str(&format!(
        r#"<div class="project-text"><h3 class="project-title">{}</h3><p class="project-description">{}</p><p class="project-date">{}</p><a href="{}" class="project-link">{}</a></div>"#,
        escape(&view.title),
        view.description,
        escape(&view.date),
        escape(&view.link),
        escape(&view.link_label),
    ));

    let id = escape(view.carousel_id.as_str());
    out.push_str(&format!(
        r#"<div id="{id}" class="carousel slide"><div class="carousel-inner">"#
    ));
    for slide in &view.slides {
        write_slide(&mut out, slide);
    }
    out.push_str("</div>");

    for control in &view.controls {
        let direction = control.direction.as_str();
        out.push_str(&format!(
            r#"<button class="carousel-control-{direction}" type="button" data-bs-target="{}" data-bs-slide="{direction}" aria-controls="{id}"{}><span class="carousel-control-{direction}-icon"></span><span class="visually-hidden">{}</span></button>"#,
            escape(&control.target),
            if control.disabled { " disabled" } else { "" },
            control.label(),
        ));
    }

    out.push_str("</div></div></div></div>");
    out
}

/// Host element with a declarative shadow root wrapping the fragment.
pub fn render_host_html(
    view: &TimelineItemView,
    attributes: &TimelineItemAttributes,
    config: &RenderConfig,
) -> String {
    let mut out = format!("<{}", config.tag_name);
    for (name, value) in attributes.pairs() {
        out.push_str(&format!(r#" {name}="{}""#, escape(value)));
    }
    out.push_str(&format!(
        r#"><template shadowrootmode="open">{}</template></{}>"#,
        render_fragment_html(view),
        config.tag_name
    ));
    out
}

fn write_slide(out: &mut String, slide: &Slide) {
    let class = if slide.active {
        "carousel-item active"
    } else {
        "carousel-item"
    };
    let src = escape(&slide.source);
    let media = match slide.kind {
        MediaKind::Image => format!(r#"<img src="{src}" class="d-block w-100">"#),
        MediaKind::Video => {
            format!(r#"<video src="{src}" class="d-block w-100" controls muted playsinline></video>"#)
        }
    };
    out.push_str(&format!(r#"<div class="{class}">{media}</div>"#));
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::CarouselId;
    use crate::render::render_attributes;

    fn view_for(attributes: &TimelineItemAttributes) -> TimelineItemView {
        render_attributes(
            attributes,
            &RenderConfig::default(),
            CarouselId::generate("carousel-"),
        )
        .view
    }

    #[test]
    fn fragment_contains_text_block_and_slides() {
        let attributes = TimelineItemAttributes {
            title: Some("X".to_string()),
            description: Some("Y".to_string()),
            date: Some("2024".to_string()),
            link: None,
            images: Some(r#"["a.png","clip.mp4"]"#.to_string()),
        };
        let view = view_for(&attributes);
        let html = render_fragment_html(&view);

        assert!(html.starts_with("<style data-timeline-item>"));
        assert_eq!(html.matches(r#"class="timeline-marker""#).count(), 1);
        assert!(html.contains(r#"<h3 class="project-title">X</h3>"#));
        assert!(html.contains(r#"<p class="project-description">Y</p>"#));
        assert!(html.contains(r#"<p class="project-date">2024</p>"#));
        assert!(html.contains(r##"<a href="#" class="project-link">View Project →</a>"##));
        assert!(html.contains(r#"<div class="carousel-item active"><img src="a.png""#));
        assert!(html.contains(r#"<div class="carousel-item"><video src="clip.mp4""#));
        assert_eq!(
            html.matches(&format!(r##"data-bs-target="#{}""##, view.carousel_id))
                .count(),
            2
        );
        assert!(!html.contains(" disabled>"));
    }

    #[test]
    fn description_markup_is_not_escaped() {
        let attributes = TimelineItemAttributes {
            title: Some("<Lost & Found>".to_string()),
            description: Some("first<br />second".to_string()),
            ..TimelineItemAttributes::default()
        };
        let html = render_fragment_html(&view_for(&attributes));

        assert!(html.contains("first<br />second"));
        assert!(html.contains("&lt;Lost &amp; Found&gt;"));
    }

    #[test]
    fn empty_carousel_disables_controls() {
        let html = render_fragment_html(&view_for(&TimelineItemAttributes::default()));

        assert!(!html.contains(r#"class="carousel-item"#));
        assert_eq!(html.matches(" disabled>").count(), 2);
    }

    #[test]
    fn host_wraps_fragment_in_declarative_shadow_root() {
        let attributes = TimelineItemAttributes {
            title: Some("Game \"Webshop\"".to_string()),
            images: Some(r#"["a.png"]"#.to_string()),
            ..TimelineItemAttributes::default()
        };
        let view = view_for(&attributes);
        let html = render_host_html(&view, &attributes, &RenderConfig::default());

        assert!(html.starts_with(
            r#"<timeline-item title="Game &quot;Webshop&quot;" images="[&quot;a.png&quot;]"><template shadowrootmode="open"><style"#
        ));
        assert!(html.ends_with("</template></timeline-item>"));
    }
}
