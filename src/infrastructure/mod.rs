pub mod dom;
pub mod lightweight_charts;
pub mod services;

pub use lightweight_charts::LightweightChartsDisplay;
pub use services::ConsoleLogger;
