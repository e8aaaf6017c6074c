pub mod auth;
pub mod flash;
pub mod notifications;
pub mod request_gate;
