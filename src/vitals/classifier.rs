use serde::{Deserialize, Serialize};

use crate::models::vitals::{FallStatus, PpgStatus};

/// Severity tier for a single vital sign. Every reading lands in exactly one
/// tier; danger takes precedence over warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Normal,
    Warning,
    Danger,
}

/// Danger below 50 or above 120 bpm, warning outside the 60-100 resting range.
pub fn heart_rate_severity(hr: i32) -> Severity {
    if hr < 50 || hr > 120 {
        Severity::Danger
    } else if hr < 60 || hr > 100 {
        Severity::Warning
    } else {
        Severity::Normal
    }
}

pub fn heart_rate_label(hr: i32) -> &'static str {
    match heart_rate_severity(hr) {
        Severity::Normal => "Normal",
        Severity::Warning => "Elevated",
        Severity::Danger => "Critical",
    }
}

/// Danger below 90%, warning below 95%.
pub fn spo2_severity(spo2: i32) -> Severity {
    if spo2 < 90 {
        Severity::Danger
    } else if spo2 < 95 {
        Severity::Warning
    } else {
        Severity::Normal
    }
}

pub fn spo2_label(spo2: i32) -> &'static str {
    match spo2_severity(spo2) {
        Severity::Normal => "Healthy",
        Severity::Warning => "Low",
        Severity::Danger => "Critical",
    }
}

pub fn ppg_severity(status: PpgStatus) -> Severity {
    match status {
        PpgStatus::Normal => Severity::Normal,
        PpgStatus::Bradycardia => Severity::Warning,
        PpgStatus::Tachycardia | PpgStatus::Arrhythmia => Severity::Danger,
    }
}

pub fn fall_severity(status: FallStatus) -> Severity {
    match status {
        FallStatus::Safe => Severity::Normal,
        FallStatus::FallDetected => Severity::Danger,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heart_rate_boundaries() {
        assert_eq!(heart_rate_severity(49), Severity::Danger);
        assert_eq!(heart_rate_severity(50), Severity::Warning);
        assert_eq!(heart_rate_severity(59), Severity::Warning);
        assert_eq!(heart_rate_severity(60), Severity::Normal);
        assert_eq!(heart_rate_severity(100), Severity::Normal);
        assert_eq!(heart_rate_severity(101), Severity::Warning);
        assert_eq!(heart_rate_severity(120), Severity::Warning);
        assert_eq!(heart_rate_severity(121), Severity::Danger);
    }

    #[test]
    fn spo2_boundaries() {
        assert_eq!(spo2_severity(89), Severity::Danger);
        assert_eq!(spo2_severity(90), Severity::Warning);
        assert_eq!(spo2_severity(94), Severity::Warning);
        assert_eq!(spo2_severity(95), Severity::Normal);
        assert_eq!(spo2_severity(100), Severity::Normal);
    }

    #[test]
    fn labels_follow_severity() {
        assert_eq!(heart_rate_label(75), "Normal");
        assert_eq!(heart_rate_label(110), "Elevated");
        assert_eq!(heart_rate_label(45), "Critical");
        assert_eq!(spo2_label(98), "Healthy");
        assert_eq!(spo2_label(93), "Low");
        assert_eq!(spo2_label(85), "Critical");
    }

    #[test]
    fn ppg_and_fall_mapping() {
        assert_eq!(ppg_severity(PpgStatus::Normal), Severity::Normal);
        assert_eq!(ppg_severity(PpgStatus::Bradycardia), Severity::Warning);
        assert_eq!(ppg_severity(PpgStatus::Tachycardia), Severity::Danger);
        assert_eq!(ppg_severity(PpgStatus::Arrhythmia), Severity::Danger);
        assert_eq!(fall_severity(FallStatus::Safe), Severity::Normal);
        assert_eq!(fall_severity(FallStatus::FallDetected), Severity::Danger);
    }
}
