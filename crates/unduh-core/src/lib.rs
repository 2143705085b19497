pub mod config;
pub mod logging;

pub mod error;
pub mod facebook;
pub mod http;
pub mod model;
pub mod orchestrator;
pub mod platform;
pub mod session;
pub mod tiktok;
