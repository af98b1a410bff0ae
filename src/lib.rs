pub mod client;
pub mod config;
pub mod demographics;
pub mod insights;
pub mod logging;
pub mod model;
pub mod norms;
pub mod orchestrator;
pub mod render;
