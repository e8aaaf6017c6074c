pub mod documents;
pub mod panel;
pub mod utils;

pub use panel::ProfilePage;
