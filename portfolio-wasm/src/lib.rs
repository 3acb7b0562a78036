//! Bridge WASM <-> JavaScript trung lập framework.

use portfolio_core::{
    render_fragment_html, render_timeline_item, ElementRegistry, PortfolioError, ProjectRecord,
    RenderConfig, RenderDiagnostic, TimelineItemAttributes,
};
use portfolio_data::ProjectRegistry;
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsRenderConfig {
    #[serde(default)]
    tag_name: Option<String>,
    #[serde(default)]
    placeholder_link: Option<String>,
    #[serde(default)]
    link_label: Option<String>,
    #[serde(default)]
    carousel_id_prefix: Option<String>,
    #[serde(default)]
    video_extensions: Option<Vec<String>>,
}

impl From<JsRenderConfig> for RenderConfig {
    fn from(cfg: JsRenderConfig) -> Self {
        let mut base = RenderConfig::default();
        if let Some(tag_name) = cfg.tag_name {
            base.tag_name = tag_name;
        }
        if let Some(link) = cfg.placeholder_link {
            base.placeholder_link = link;
        }
        if let Some(label) = cfg.link_label {
            base.link_label = label;
        }
        if let Some(prefix) = cfg.carousel_id_prefix {
            base.carousel_id_prefix = prefix;
        }
        if let Some(extensions) = cfg.video_extensions {
            base.video_extensions = extensions;
        }
        base
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderedItem {
    carousel_id: String,
    html: String,
    diagnostics: Vec<RenderDiagnostic>,
}

fn read_config(config: Option<JsValue>) -> Result<RenderConfig, JsValue> {
    match config {
        Some(js_cfg) => {
            let cfg: JsRenderConfig = from_value(js_cfg)
                .map_err(|err| JsValue::from_str(&format!("Không đọc được config: {err}")))?;
            Ok(RenderConfig::from(cfg))
        }
        None => Ok(RenderConfig::default()),
    }
}

fn read_registry(projects: Option<JsValue>) -> Result<ProjectRegistry, JsValue> {
    let registry = match projects {
        Some(value) => {
            let value = from_value::<serde_json::Value>(value).map_err(|err| {
                JsValue::from_str(&format!("Không đọc được danh sách dự án: {err}"))
            })?;
            ProjectRegistry::from_value(&value)
        }
        None => ProjectRegistry::builtin(),
    };
    registry.map_err(|err| JsValue::from_str(&format_portfolio_error(err)))
}

/// Danh sách dự án (mặc định là danh sách đi kèm trang).
#[wasm_bindgen]
pub fn project_records(projects: Option<JsValue>) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let registry = read_registry(projects)?;
    to_value(registry.records())
        .map_err(|err| JsValue::from_str(&format!("Không serialize danh sách dự án: {err}")))
}

/// Ánh xạ một bản ghi dự án sang thuộc tính của `timeline-item`.
#[wasm_bindgen]
pub fn timeline_item_attributes(record: JsValue) -> Result<JsValue, JsValue> {
    let record: ProjectRecord = from_value(record)
        .map_err(|err| JsValue::from_str(&format!("Không đọc được bản ghi dự án: {err}")))?;
    let attributes = record
        .to_attributes()
        .map_err(|err| JsValue::from_str(&format_portfolio_error(err)))?;

    to_value(&attributes)
        .map_err(|err| JsValue::from_str(&format!("Không serialize thuộc tính: {err}")))
}

/// Dựng HTML nội dung shadow root cho một bộ thuộc tính.
#[wasm_bindgen]
pub fn render_timeline_item_html(
    attributes: JsValue,
    config: Option<JsValue>,
) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let attributes: TimelineItemAttributes = from_value(attributes)
        .map_err(|err| JsValue::from_str(&format!("Không đọc được thuộc tính: {err}")))?;
    let cfg = read_config(config)?;

    let outcome = render_timeline_item(&attributes, &cfg);
    let rendered = RenderedItem {
        carousel_id: outcome.view.carousel_id.to_string(),
        html: render_fragment_html(&outcome.view),
        diagnostics: outcome.diagnostics,
    };

    to_value(&rendered)
        .map_err(|err| JsValue::from_str(&format!("Không serialize kết quả: {err}")))
}

/// Dựng HTML tĩnh cho toàn bộ danh sách dự án, mỗi dự án một host element.
#[wasm_bindgen]
pub fn render_portfolio_html(
    projects: Option<JsValue>,
    config: Option<JsValue>,
) -> Result<String, JsValue> {
    let registry = read_registry(projects)?;
    let cfg = read_config(config)?;

    let mut elements = ElementRegistry::new();
    registry
        .render_page(&cfg, &mut elements)
        .map_err(|err| JsValue::from_str(&format_portfolio_error(err)))
}

fn format_portfolio_error(err: PortfolioError) -> String {
    format!("Portfolio error: {err}")
}
