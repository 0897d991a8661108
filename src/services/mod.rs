pub mod alert_events;
