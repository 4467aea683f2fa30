use crate::{ActivityPayload, AlertPayload, AlertSeverity, CompliancePayload, EmissionPayload};

use serde_json::json;

#[test]
fn test_emission_payload_uses_wire_field_names() {
    let payload = EmissionPayload::new(2, 150.5, "utility_bill");

    let value = serde_json::to_value(&payload).unwrap();

    assert_eq!(
        value,
        json!({ "scope": 2, "emissionsKgCo2e": 150.5, "source": "utility_bill" })
    );
}

#[test]
fn test_emission_payload_optional_fields_present_when_set() {
    let payload = EmissionPayload::new(1, 10.0, "fleet")
        .with_category("mobile_combustion")
        .with_region("EU")
        .with_delta(-2.5);

    let value = serde_json::to_value(&payload).unwrap();

    assert_eq!(value["category"], "mobile_combustion");
    assert_eq!(value["region"], "EU");
    assert_eq!(value["delta"], -2.5);
}

#[test]
fn test_activity_payload_shape() {
    let payload = ActivityPayload {
        source: "aws".to_string(),
        count: 42,
        quantity: 1234.5,
        unit: "kWh".to_string(),
        processing: true,
    };

    let value = serde_json::to_value(&payload).unwrap();

    assert_eq!(
        value,
        json!({
            "source": "aws",
            "count": 42,
            "quantity": 1234.5,
            "unit": "kWh",
            "processing": true
        })
    );
}

#[test]
fn test_alert_payload_with_breach() {
    let payload = AlertPayload::new(AlertSeverity::High, "Spike", "Scope 2 jumped")
        .with_breach("scope2_kg", 900.0, 500.0);

    let value = serde_json::to_value(&payload).unwrap();

    assert_eq!(value["severity"], "high");
    assert_eq!(value["metric"], "scope2_kg");
    assert_eq!(value["value"], 900.0);
    assert_eq!(value["threshold"], 500.0);
}

#[test]
fn test_alert_payload_without_breach_omits_optional_fields() {
    let payload = AlertPayload::new(AlertSeverity::Low, "Info", "FYI");

    let value = serde_json::to_value(&payload).unwrap();

    assert!(value.get("metric").is_none());
    assert!(value.get("value").is_none());
    assert!(value.get("threshold").is_none());
}

#[test]
fn test_compliance_payload_camel_case() {
    let payload = CompliancePayload {
        framework: "csrd".to_string(),
        status: "compliant".to_string(),
        previous_status: Some("at_risk".to_string()),
        detail: None,
    };

    let value = serde_json::to_value(&payload).unwrap();

    assert_eq!(value["previousStatus"], "at_risk");
    assert!(value.get("detail").is_none());
}
