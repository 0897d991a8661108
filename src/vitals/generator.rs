use crate::models::alert::AlertType;
use crate::models::vitals::{FallStatus, RecordVitalRequest, Vital};

/// An alert the generator decided to raise for a reading, before persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggeredAlert {
    pub alert_type: AlertType,
    pub details: String,
}

/// Details text for an alert, keyed by type. The heart-rate and SpO2 templates
/// embed the triggering values; fall and SOS carry fixed text. The alert type
/// set is closed, so every type has a fixed template and no generic fallback
/// is needed.
pub fn alert_details(alert_type: AlertType, heart_rate: i32, spo2: i32) -> String {
    match alert_type {
        AlertType::AbnormalHr => format!("Abnormal heart rate detected: {} bpm", heart_rate),
        AlertType::AbnormalSpo2 => format!("Low oxygen level detected: {}%", spo2),
        AlertType::Fall => "Fall detected! Emergency contacts notified.".to_string(),
        AlertType::Sos => SOS_DETAILS.to_string(),
    }
}

/// Details for the user-initiated SOS path, which bypasses threshold checks.
pub const SOS_DETAILS: &str = "SOS emergency triggered by user. Emergency contacts have been notified.";

/// Vital values carried on an SOS alert: the most recent reading's heart rate
/// and SpO2, or null when nothing has been recorded yet.
pub fn sos_payload(latest: Option<&Vital>) -> (Option<i32>, Option<i32>) {
    (latest.map(|v| v.heart_rate), latest.map(|v| v.spo2))
}

/// Evaluate the abnormality predicates for a new reading, in fixed order:
/// heart rate, then SpO2, then fall. Each firing predicate yields one alert,
/// so a single reading can raise up to three.
pub fn evaluate_reading(reading: &RecordVitalRequest) -> Vec<TriggeredAlert> {
    let mut triggered = Vec::new();

    if reading.heart_rate < 60 || reading.heart_rate > 100 {
        triggered.push(TriggeredAlert {
            alert_type: AlertType::AbnormalHr,
            details: alert_details(AlertType::AbnormalHr, reading.heart_rate, reading.spo2),
        });
    }
    if reading.spo2 < 95 {
        triggered.push(TriggeredAlert {
            alert_type: AlertType::AbnormalSpo2,
            details: alert_details(AlertType::AbnormalSpo2, reading.heart_rate, reading.spo2),
        });
    }
    if reading.fall_status == FallStatus::FallDetected {
        triggered.push(TriggeredAlert {
            alert_type: AlertType::Fall,
            details: alert_details(AlertType::Fall, reading.heart_rate, reading.spo2),
        });
    }

    triggered
}
