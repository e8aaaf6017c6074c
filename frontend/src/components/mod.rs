pub mod alert;
pub mod cards;
pub mod common;
pub mod confirm_dialog;
pub mod empty_state;
pub mod error;
pub mod guard;
pub mod layout;
pub mod notifications;
pub mod period;
pub mod search;
