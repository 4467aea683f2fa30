use crate::AlertSeverity;

use std::str::FromStr;

#[test]
fn test_alert_severity_from_str() {
    assert_eq!(
        AlertSeverity::from_str("critical").unwrap(),
        AlertSeverity::Critical
    );
    assert_eq!(AlertSeverity::from_str("low").unwrap(), AlertSeverity::Low);
}

#[test]
fn test_alert_severity_from_str_rejects_uppercase() {
    assert!(AlertSeverity::from_str("HIGH").is_err());
}

#[test]
fn test_alert_severity_as_str_matches_serde() {
    for severity in [
        AlertSeverity::Critical,
        AlertSeverity::High,
        AlertSeverity::Medium,
        AlertSeverity::Low,
    ] {
        let json = serde_json::to_string(&severity).unwrap();
        assert_eq!(json, format!("\"{}\"", severity.as_str()));
    }
}
