//! Project registry feeding the `timeline-item` host layer.

use std::collections::HashSet;

use portfolio_core::{
    render_host_html, render_timeline_item, ElementRegistry, PortfolioError, ProjectRecord,
    Registration, RenderConfig, TimelineItemAttributes,
};
use serde_json::Value;

const BUILTIN_PROJECTS: &str = include_str!("../data/projects.json");

/// Ordered, read-only list of portfolio projects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectRegistry {
    records: Vec<ProjectRecord>,
}

impl ProjectRegistry {
    /// Projects shipped with the site.
    pub fn builtin() -> Result<Self, PortfolioError> {
        Self::from_json_str(BUILTIN_PROJECTS)
    }

    /// Load a registry from a JSON array of project records.
    pub fn from_json_str(json: &str) -> Result<Self, PortfolioError> {
        let value: Value =
            serde_json::from_str(json).map_err(|err| PortfolioError::Registry(err.to_string()))?;
        Self::from_value(&value)
    }

    /// Load a registry from a `serde_json::Value`.
    pub fn from_value(value: &Value) -> Result<Self, PortfolioError> {
        let entries = value.as_array().ok_or_else(|| {
            PortfolioError::Registry("expected a JSON array of projects".to_string())
        })?;

        let records = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                serde_json::from_value::<ProjectRecord>(entry.clone()).map_err(|err| {
                    PortfolioError::Registry(format!("project #{index}: {err}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("loaded {} portfolio projects", records.len());
        Ok(Self { records })
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&ProjectRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.records.iter()
    }

    /// One attribute set per record, in registry order.
    pub fn host_attributes(&self) -> Result<Vec<TimelineItemAttributes>, PortfolioError> {
        self.records.iter().map(ProjectRecord::to_attributes).collect()
    }

    /// Static page body: one host element per record, each carrying a
    /// declarative shadow root. Records `config.tag_name` in `elements`.
    pub fn render_page(
        &self,
        config: &RenderConfig,
        elements: &mut ElementRegistry,
    ) -> Result<String, PortfolioError> {
        if elements.define(&config.tag_name)? == Registration::Defined {
            log::debug!("rendering page with <{}>", config.tag_name);
        }

        let mut items = Vec::with_capacity(self.records.len());
        for attributes in self.host_attributes()? {
            let outcome = render_timeline_item(&attributes, config);
            for diagnostic in &outcome.diagnostics {
                log::warn!("{}", diagnostic.message);
            }
            items.push(render_host_html(&outcome.view, &attributes, config));
        }
        Ok(items.join("\n"))
    }

    /// Distinct technology tags in first-seen order.
    pub fn technologies(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .flat_map(|record| record.technologies.iter())
            .map(String::as_str)
            .filter(|tag| seen.insert(*tag))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ProjectRegistry {
    type Item = &'a ProjectRecord;
    type IntoIter = std::slice::Iter<'a, ProjectRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
