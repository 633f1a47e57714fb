// Presentation layer - HTTP surface and the embedded page
pub mod app_state;
pub mod handlers;
pub mod page;
