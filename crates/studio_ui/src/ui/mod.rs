//! UI modules for the studio window.

pub mod app_shell;
pub mod constants;
pub mod explorer;
pub mod footer;
pub mod properties;
pub mod topbar;
pub mod viewport;
