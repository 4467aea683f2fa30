use crate::AlertSeverity;

use serde::{Deserialize, Serialize};

/// Anomaly or threshold alert published by the anomaly detector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlertPayload {
    pub severity: AlertSeverity,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

impl AlertPayload {
    pub fn new(
        severity: AlertSeverity,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            title: title.into(),
            description: description.into(),
            metric: None,
            value: None,
            threshold: None,
        }
    }

    /// Attach the metric that breached, with its observed value and threshold.
    pub fn with_breach(mut self, metric: impl Into<String>, value: f64, threshold: f64) -> Self {
        self.metric = Some(metric.into());
        self.value = Some(value);
        self.threshold = Some(threshold);
        self
    }
}
