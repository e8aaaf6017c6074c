mod attendance;
mod auth;
pub mod client;
pub mod error;
mod leave;
mod notifications;
mod profile;
mod reports;
pub mod types;

pub use client::*;
pub use error::*;
pub use types::*;
