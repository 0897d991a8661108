use chrono::Utc;
use lifepulse_backend::models::alert::AlertType;
use lifepulse_backend::models::vitals::{FallStatus, PpgStatus, RecordVitalRequest, Vital};
use lifepulse_backend::vitals::generator::{
    alert_details, evaluate_reading, sos_payload, SOS_DETAILS,
};
use uuid::Uuid;

fn reading(heart_rate: i32, spo2: i32, fall_status: FallStatus) -> RecordVitalRequest {
    RecordVitalRequest {
        heart_rate,
        spo2,
        ppg_status: PpgStatus::Normal,
        fall_status,
        recorded_at: Utc::now(),
    }
}

#[test]
fn test_normal_reading_produces_no_alerts() {
    assert!(evaluate_reading(&reading(72, 98, FallStatus::Safe)).is_empty());
}

#[test]
fn test_low_heart_rate_produces_exactly_one_hr_alert() {
    let triggered = evaluate_reading(&reading(45, 98, FallStatus::Safe));
    assert_eq!(triggered.len(), 1);
    assert_eq!(triggered[0].alert_type, AlertType::AbnormalHr);
    assert_eq!(triggered[0].details, "Abnormal heart rate detected: 45 bpm");
}

#[test]
fn test_low_spo2_with_fall_produces_two_alerts_in_check_order() {
    // hr 75 is inside 60-100, so only the SpO2 and fall checks fire
    let triggered = evaluate_reading(&reading(75, 80, FallStatus::FallDetected));
    assert_eq!(triggered.len(), 2);
    assert_eq!(triggered[0].alert_type, AlertType::AbnormalSpo2);
    assert_eq!(triggered[1].alert_type, AlertType::Fall);
}

#[test]
fn test_all_predicates_fire_in_fixed_order() {
    let triggered = evaluate_reading(&reading(130, 85, FallStatus::FallDetected));
    let types: Vec<_> = triggered.iter().map(|t| t.alert_type).collect();
    assert_eq!(
        types,
        vec![AlertType::AbnormalHr, AlertType::AbnormalSpo2, AlertType::Fall]
    );
}

#[test]
fn test_predicate_boundaries_do_not_fire() {
    assert!(evaluate_reading(&reading(60, 95, FallStatus::Safe)).is_empty());
    assert!(evaluate_reading(&reading(100, 95, FallStatus::Safe)).is_empty());
    assert_eq!(evaluate_reading(&reading(59, 95, FallStatus::Safe)).len(), 1);
    assert_eq!(evaluate_reading(&reading(101, 95, FallStatus::Safe)).len(), 1);
    assert_eq!(evaluate_reading(&reading(75, 94, FallStatus::Safe)).len(), 1);
}

#[test]
fn test_details_templates() {
    assert_eq!(
        alert_details(AlertType::AbnormalHr, 130, 98),
        "Abnormal heart rate detected: 130 bpm"
    );
    assert_eq!(
        alert_details(AlertType::AbnormalSpo2, 72, 88),
        "Low oxygen level detected: 88%"
    );
    assert_eq!(
        alert_details(AlertType::Fall, 72, 98),
        "Fall detected! Emergency contacts notified."
    );
    assert_eq!(alert_details(AlertType::Sos, 72, 98), SOS_DETAILS);
}

#[test]
fn test_sos_details_mention_contact_notification() {
    assert_eq!(
        SOS_DETAILS,
        "SOS emergency triggered by user. Emergency contacts have been notified."
    );
}

#[test]
fn test_sos_payload_uses_latest_reading_when_present() {
    let latest = Vital {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        heart_rate: 64,
        spo2: 99,
        ppg_status: PpgStatus::Normal,
        fall_status: FallStatus::Safe,
        recorded_at: Utc::now(),
        created_at: Utc::now(),
    };
    assert_eq!(sos_payload(Some(&latest)), (Some(64), Some(99)));
}

#[test]
fn test_sos_payload_is_null_without_any_reading() {
    assert_eq!(sos_payload(None), (None, None));
}
