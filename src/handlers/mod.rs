pub mod alerts;
pub mod auth_handler;
pub mod backend_health_handler;
pub mod contacts;
pub mod registration_handler;
pub mod vitals;
