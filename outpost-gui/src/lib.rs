pub mod config;
pub mod dir;
pub mod gui;
pub mod logger;
pub mod panel;
pub mod services;
pub mod validation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
