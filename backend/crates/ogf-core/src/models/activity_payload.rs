use serde::{Deserialize, Serialize};

/// Activity ingestion progress published by the ingestion pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPayload {
    pub source: String,
    pub count: i64,
    pub quantity: f64,
    pub unit: String,
    pub processing: bool,
}
