use serde::{Deserialize, Serialize};

/// Emission update published by the emissions engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmissionPayload {
    /// GHG protocol scope (1, 2 or 3)
    pub scope: i32,
    #[serde(rename = "emissionsKgCo2e")]
    pub emissions_kg_co2e: f64,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Change from the previous calculation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
}

impl EmissionPayload {
    pub fn new(scope: i32, emissions_kg_co2e: f64, source: impl Into<String>) -> Self {
        Self {
            scope,
            emissions_kg_co2e,
            source: source.into(),
            category: None,
            region: None,
            delta: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = Some(delta);
        self
    }
}
