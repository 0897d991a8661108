pub mod latest_vital;
pub mod record_vital;
pub mod simulate_vital;
pub mod vitals_history;
