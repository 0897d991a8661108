pub mod list_alerts;
pub mod resolve_alert;
pub mod trigger_sos;
