use super::{ChartController, DemoConfig};
use crate::domain::{
    chart::ChartDisplay,
    errors::AppResult,
    logging::LogComponent,
    market_data::{Candle, IndicatorEngine, SyntheticSeriesGenerator},
};
use crate::log_info;
use rand::Rng;
use std::sync::Arc;

/// Application service wiring generator, engine and presenter for one chart.
pub struct ChartApplicationService<R: Rng> {
    config: DemoConfig,
    generator: SyntheticSeriesGenerator<R>,
}

impl ChartApplicationService<rand::rngs::ThreadRng> {
    pub fn new(config: DemoConfig) -> Self {
        Self::with_generator(config, SyntheticSeriesGenerator::new())
    }
}

impl<R: Rng> ChartApplicationService<R> {
    pub fn with_generator(config: DemoConfig, generator: SyntheticSeriesGenerator<R>) -> Self {
        Self { config, generator }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Generate the session's candles once and hand them to a new controller.
    pub fn start<D: ChartDisplay>(&mut self, display: D) -> AppResult<ChartController<D>> {
        self.config.validate()?;

        let candles: Arc<[Candle]> = self
            .generator
            .generate(self.config.bar_count, self.config.interval_seconds, self.config.start_price)
            .into();
        let controller =
            ChartController::new(display, candles, IndicatorEngine::new(self.config.indicators))?;

        log_info!(
            LogComponent::Application("ChartService"),
            "chart started with {} candles",
            controller.candles().len()
        );
        Ok(controller)
    }
}
