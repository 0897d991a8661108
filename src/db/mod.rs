pub mod alerts;
pub mod contacts;
pub mod users;
pub mod vitals;
