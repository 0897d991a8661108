use chrono::Utc;
use rand::Rng;

use crate::models::vitals::{FallStatus, PpgStatus, RecordVitalRequest};

/// Generate a random demo reading in place of a paired hardware device.
/// Ranges match the demo mode of the companion app: heart rate 50-109 bpm,
/// SpO2 92-100%, with rhythm and fall states weighted towards normal.
pub fn simulate_reading() -> RecordVitalRequest {
    let mut rng = rand::thread_rng();

    let heart_rate = rng.gen_range(50..110);
    let spo2 = rng.gen_range(92..102).min(100);

    const PPG_OPTIONS: [PpgStatus; 6] = [
        PpgStatus::Normal,
        PpgStatus::Normal,
        PpgStatus::Normal,
        PpgStatus::Bradycardia,
        PpgStatus::Tachycardia,
        PpgStatus::Arrhythmia,
    ];
    const FALL_OPTIONS: [FallStatus; 6] = [
        FallStatus::Safe,
        FallStatus::Safe,
        FallStatus::Safe,
        FallStatus::Safe,
        FallStatus::Safe,
        FallStatus::FallDetected,
    ];

    RecordVitalRequest {
        heart_rate,
        spo2,
        ppg_status: PPG_OPTIONS[rng.gen_range(0..PPG_OPTIONS.len())],
        fall_status: FALL_OPTIONS[rng.gen_range(0..FALL_OPTIONS.len())],
        recorded_at: Utc::now(),
    }
}
