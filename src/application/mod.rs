pub mod chart_service;
pub mod config;
pub mod presenter;

pub use chart_service::*;
pub use config::*;
pub use presenter::*;
