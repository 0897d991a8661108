pub mod alert;
pub mod common;
pub mod contact;
pub mod user;
pub mod vitals;

