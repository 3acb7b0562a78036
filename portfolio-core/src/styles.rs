/// Attribute marking the style block injected into each shadow root.
pub const STYLE_MARKER_ATTR: &str = "data-timeline-item";

/// Style sheet injected inside each `timeline-item` shadow root. Page styles do
/// not reach these nodes, so the carousel rules are carried here as well.
pub const TIMELINE_ITEM_STYLES: &str = r#"
:host {
  display: block;
}

.timeline-item {
  position: relative;
  padding-left: 2rem;
  margin-bottom: 3rem;
}

.timeline-marker {
  width: 12px;
  height: 12px;
  background: #007bff;
  border-radius: 50%;
  position: absolute;
  left: 0;
  top: 0.5rem;
}

.project-card {
  display: flex;
  gap: 1.5rem;
  flex-wrap: wrap;
}

.project-text {
  flex: 1 1 300px;
}

.carousel {
  flex: 1 1 300px;
  max-width: 400px;
  position: relative;
}

.carousel-inner {
  position: relative;
  width: 100%;
  overflow: hidden;
}

.carousel-item {
  display: none;
}

.carousel-item.active {
  display: block;
}

.d-block {
  display: block;
}

.w-100 {
  width: 100%;
}

.carousel-control-prev,
.carousel-control-next {
  position: absolute;
  top: 0;
  bottom: 0;
  width: 15%;
  border: 0;
  background: none;
  color: #fff;
  opacity: 0.5;
  cursor: pointer;
}

.carousel-control-prev {
  left: 0;
}

.carousel-control-next {
  right: 0;
}

.carousel-control-prev:hover,
.carousel-control-next:hover {
  opacity: 0.9;
}

.carousel-control-prev:disabled,
.carousel-control-next:disabled {
  opacity: 0.2;
  cursor: default;
}

.carousel-control-prev-icon::before {
  content: "\2039";
  font-size: 2rem;
}

.carousel-control-next-icon::before {
  content: "\203A";
  font-size: 2rem;
}

.visually-hidden {
  position: absolute;
  width: 1px;
  height: 1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
  white-space: nowrap;
}
"#;
