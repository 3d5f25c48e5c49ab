use crate::domain::{
    chart::ChartDimensions,
    errors::{AppError, AppResult},
    market_data::IndicatorParams,
};
use serde::{Deserialize, Serialize};

/// Demo page settings. Every field has a default, so partial JSON is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub bar_count: usize,
    pub interval_seconds: i64,
    pub start_price: f64,
    pub indicators: IndicatorParams,
    /// Used when the chart container reports no size of its own.
    pub dimensions: ChartDimensions,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            bar_count: 500,
            interval_seconds: 60,
            start_price: 200.0,
            indicators: IndicatorParams::default(),
            dimensions: ChartDimensions::default(),
        }
    }
}

impl DemoConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let config: DemoConfig = serde_json::from_str(json)
            .map_err(|e| AppError::ConfigError(format!("invalid config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.bar_count == 0 {
            return Err(AppError::ConfigError("bar_count must be at least 1".into()));
        }
        if self.interval_seconds <= 0 {
            return Err(AppError::ConfigError(format!(
                "interval_seconds must be positive, got {}",
                self.interval_seconds
            )));
        }
        if !self.start_price.is_finite() || self.start_price <= 0.0 {
            return Err(AppError::ConfigError(format!(
                "start_price must be a positive number, got {}",
                self.start_price
            )));
        }
        if self.dimensions.is_empty() {
            return Err(AppError::ConfigError("dimensions must be non-zero".into()));
        }
        self.indicators.validate().map_err(|e| AppError::ConfigError(e.to_string()))
    }
}
