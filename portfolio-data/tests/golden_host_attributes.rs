use std::fs;

use portfolio_core::{render_timeline_item, RenderConfig};
use portfolio_data::ProjectRegistry;
use serde_json::Value;

fn fixture_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn builtin_host_attributes_match_golden() {
    let registry = ProjectRegistry::builtin().expect("Không đọc được danh sách dự án");
    let attributes = registry.host_attributes().expect("Không ánh xạ được thuộc tính");

    let actual = serde_json::to_value(attributes).expect("Không serialize thuộc tính");

    let expected = fs::read_to_string(fixture_path("builtin_host_attributes.json"))
        .expect("Không đọc được golden");
    let expected: Value = serde_json::from_str(&expected).expect("Golden không hợp lệ");

    assert_eq!(actual, expected);
}

#[test]
fn every_builtin_project_renders_cleanly() {
    let registry = ProjectRegistry::builtin().expect("registry");
    let config = RenderConfig::default();

    for (record, attributes) in registry.iter().zip(registry.host_attributes().expect("attrs")) {
        let outcome = render_timeline_item(&attributes, &config);

        assert!(outcome.diagnostics.is_empty(), "{}", record.title);
        assert_eq!(outcome.view.title, record.title);
        assert_eq!(outcome.view.link, "#");
        assert_eq!(outcome.view.slides.len(), record.images.len());
    }
}
