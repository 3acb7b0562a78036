//! Custom element `timeline-item` cho môi trường WebAssembly.

#[cfg(target_arch = "wasm32")]
mod styles;

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use crate::styles;
    use js_sys::Function;
    use portfolio_core::{
        render_timeline_item, AttributeSource, CarouselControl, ElementRegistry, MediaKind,
        PortfolioError, Registration, RenderConfig, Slide, TimelineItemView,
    };
    use portfolio_data::ProjectRegistry;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        console, Document, Element, HtmlElement, ShadowRoot, ShadowRootInit, ShadowRootMode,
        Window,
    };
    use yew::prelude::*;

    const MOUNT_ATTR: &str = "data-timeline-item-root";
    const MOUNT_SELECTOR: &str = "[data-timeline-item-root]";

    /// Định nghĩa lớp custom element; `render` được gọi khi phần tử gắn vào document.
    const DEFINE_ELEMENT: &str = r#"
if (customElements.get(tag)) {
  return false;
}
customElements.define(tag, class extends HTMLElement {
  connectedCallback() {
    render(this);
  }
});
return true;
"#;

    struct HostAttributes<'a>(&'a HtmlElement);

    impl AttributeSource for HostAttributes<'_> {
        fn attribute(&self, name: &str) -> Option<String> {
            self.0.get_attribute(name)
        }
    }

    #[derive(Properties, PartialEq)]
    pub struct TimelineItemProps {
        pub view: TimelineItemView,
    }

    #[function_component(TimelineItem)]
    fn timeline_item(props: &TimelineItemProps) -> Html {
        let view = &props.view;
        let carousel = {
            let view = view.clone();
            use_state(move || view.carousel_state())
        };
        let active = carousel.active();
        let carousel_id = view.carousel_id.to_string();

        let controls = view.controls.iter().map(|control| {
            let carousel = carousel.clone();
            let target = control.target.clone();
            let direction = control.direction;
            let onclick = Callback::from(move |_| {
                let mut next = (*carousel).clone();
                if next.apply(&target, direction) {
                    carousel.set(next);
                }
            });
            render_control(control, &carousel_id, onclick)
        });

        html! {
            <div class="timeline-item">
                <div class="timeline-marker"></div>
                <div class="timeline-content">
                    <div class="project-card">
                        <div class="project-text">
                            <h3 class="project-title">{ view.title.clone() }</h3>
                            <p class="project-description">
                                { Html::from_html_unchecked(AttrValue::from(view.description.clone())) }
                            </p>
                            <p class="project-date">{ view.date.clone() }</p>
                            <a href={view.link.clone()} class="project-link">{ view.link_label.clone() }</a>
                        </div>
                        <div id={carousel_id.clone()} class="carousel slide">
                            <div class="carousel-inner">
                                { for view.slides.iter().map(|slide| render_slide(slide, active == Some(slide.index))) }
                            </div>
                            { for controls }
                        </div>
                    </div>
                </div>
            </div>
        }
    }

    fn render_slide(slide: &Slide, is_active: bool) -> Html {
        let media = match slide.kind {
            MediaKind::Image => html! {
                <img src={slide.source.clone()} class="d-block w-100" />
            },
            MediaKind::Video => html! {
                <video
                    src={slide.source.clone()}
                    class="d-block w-100"
                    controls="controls"
                    muted="muted"
                    playsinline="playsinline"
                />
            },
        };

        html! {
            <div class={classes!("carousel-item", is_active.then_some("active"))}>
                { media }
            </div>
        }
    }

    fn render_control(control: &CarouselControl, carousel_id: &str, onclick: Callback<MouseEvent>) -> Html {
        let direction = control.direction.as_str();
        html! {
            <button
                class={format!("carousel-control-{direction}")}
                type="button"
                data-bs-target={control.target.clone()}
                data-bs-slide={direction}
                aria-controls={carousel_id.to_string()}
                disabled={control.disabled}
                onclick={onclick}
            >
                <span class={format!("carousel-control-{direction}-icon")}></span>
                <span class="visually-hidden">{ control.label() }</span>
            </button>
        }
    }

    fn document() -> Result<Document, JsValue> {
        let window: Window =
            web_sys::window().ok_or_else(|| JsValue::from_str("Không có window"))?;
        window
            .document()
            .ok_or_else(|| JsValue::from_str("Không truy cập được document"))
    }

    fn to_js(err: PortfolioError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }

    fn shadow_root(host: &HtmlElement) -> Result<ShadowRoot, JsValue> {
        match host.shadow_root() {
            Some(root) => Ok(root),
            None => host.attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open)),
        }
    }

    fn render_host(host: &HtmlElement, config: &RenderConfig) -> Result<(), JsValue> {
        let root = shadow_root(host)?;
        if root.query_selector(MOUNT_SELECTOR)?.is_some() {
            return Ok(());
        }
        // Nội dung tĩnh từ declarative shadow root được thay bằng bản tương tác.
        root.set_inner_html("");

        let outcome = render_timeline_item(&HostAttributes(host), config);
        for diagnostic in &outcome.diagnostics {
            console::error_1(&JsValue::from_str(&format!(
                "Invalid images JSON: {}",
                diagnostic.message
            )));
        }

        let document = document()?;
        styles::ensure_styles(&document, &root)?;

        let container: Element = document.create_element("div")?;
        container.set_attribute(MOUNT_ATTR, "")?;
        root.append_child(&container)?;

        yew::Renderer::<TimelineItem>::with_root_and_props(
            container,
            TimelineItemProps { view: outcome.view },
        )
        .render();
        Ok(())
    }

    /// Gắn lớp custom element vào `customElements` của trang.
    fn define_element(
        registry: &mut ElementRegistry,
        config: &RenderConfig,
    ) -> Result<Registration, JsValue> {
        if registry.define(&config.tag_name).map_err(to_js)? == Registration::AlreadyDefined {
            return Ok(Registration::AlreadyDefined);
        }

        let tag = JsValue::from_str(&config.tag_name);
        let render_config = config.clone();
        let render = Closure::<dyn Fn(HtmlElement)>::new(move |host: HtmlElement| {
            if let Err(err) = render_host(&host, &render_config) {
                console::error_1(&err);
            }
        });

        let define = Function::new_with_args("tag, render", DEFINE_ELEMENT);
        let defined = define
            .call2(&JsValue::NULL, &tag, render.as_ref())?
            .as_bool()
            .unwrap_or(false);

        if !defined {
            // Trang đã có định nghĩa khác cho tên thẻ này.
            return Ok(Registration::AlreadyDefined);
        }
        // Lớp custom element giữ tham chiếu tới closure suốt vòng đời trang.
        render.forget();
        Ok(Registration::Defined)
    }

    /// Điểm khởi động của trang: đăng ký phần tử và gắn danh sách dự án.
    #[wasm_bindgen]
    pub struct PortfolioApp {
        elements: ElementRegistry,
        config: RenderConfig,
    }

    #[wasm_bindgen]
    impl PortfolioApp {
        #[wasm_bindgen(constructor)]
        pub fn new(tag_name: Option<String>) -> PortfolioApp {
            let mut config = RenderConfig::default();
            if let Some(tag) = tag_name {
                config.tag_name = tag;
            }
            PortfolioApp {
                elements: ElementRegistry::new(),
                config,
            }
        }

        /// Đăng ký custom element một lần; trả về `false` nếu tên thẻ đã được định nghĩa.
        pub fn register(&mut self) -> Result<bool, JsValue> {
            let registration = define_element(&mut self.elements, &self.config)?;
            Ok(registration == Registration::Defined)
        }

        /// Dựng một phần tử cho mỗi dự án và gắn vào phần tử theo selector.
        pub fn mount(&mut self, selector: &str) -> Result<u32, JsValue> {
            define_element(&mut self.elements, &self.config)?;

            let document = document()?;
            let target: Element = document
                .query_selector(selector)
                .map_err(|err| JsValue::from_str(&format!("Selector lỗi: {err:?}")))?
                .ok_or_else(|| JsValue::from_str("Không tìm thấy element theo selector"))?;

            let registry = ProjectRegistry::builtin().map_err(to_js)?;

            for attributes in registry.host_attributes().map_err(to_js)? {
                let element = document.create_element(&self.config.tag_name)?;
                for (name, value) in attributes.pairs() {
                    element.set_attribute(name, value)?;
                }
                target.append_child(&element)?;
            }

            Ok(registry.len() as u32)
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::PortfolioApp;

#[cfg(not(target_arch = "wasm32"))]
pub struct PortfolioApp;

#[cfg(not(target_arch = "wasm32"))]
impl PortfolioApp {
    pub fn new(_: Option<String>) -> Self {
        PortfolioApp
    }

    pub fn register(&mut self) -> Result<bool, wasm_bindgen::JsValue> {
        Err(wasm_bindgen::JsValue::from_str(
            "portfolio-ui chỉ hỗ trợ biên dịch target wasm32",
        ))
    }

    pub fn mount(&mut self, _: &str) -> Result<u32, wasm_bindgen::JsValue> {
        Err(wasm_bindgen::JsValue::from_str(
            "portfolio-ui chỉ hỗ trợ biên dịch target wasm32",
        ))
    }
}
