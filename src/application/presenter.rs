use crate::domain::{
    chart::{ChartDimensions, ChartDisplay, ChartType, SeriesData, SeriesStyle},
    errors::{AppError, AppResult},
    logging::LogComponent,
    market_data::{Candle, IndicatorEngine, IndicatorKind, Series, close_series},
};
use crate::log_debug;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::str::FromStr;
use std::sync::Arc;

/// User commands the UI shell forwards to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    ShowPrice(ChartType),
    ToggleIndicator(IndicatorKind),
    Resize(ChartDimensions),
}

impl UiAction {
    /// The six toolbar buttons, in display order.
    pub const BUTTONS: [UiAction; 6] = [
        UiAction::ShowPrice(ChartType::Candlestick),
        UiAction::ShowPrice(ChartType::Line),
        UiAction::ShowPrice(ChartType::Area),
        UiAction::ToggleIndicator(IndicatorKind::MovingAverage),
        UiAction::ToggleIndicator(IndicatorKind::Rsi),
        UiAction::ToggleIndicator(IndicatorKind::Macd),
    ];

    /// DOM id of the button bound to this action.
    pub fn button_id(&self) -> Option<&'static str> {
        match self {
            UiAction::ShowPrice(chart_type) => Some((*chart_type).into()),
            UiAction::ToggleIndicator(kind) => Some((*kind).into()),
            UiAction::Resize(_) => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UiAction::ShowPrice(ChartType::Candlestick) => "Candlestick",
            UiAction::ShowPrice(ChartType::Line) => "Line",
            UiAction::ShowPrice(ChartType::Area) => "Area",
            UiAction::ToggleIndicator(IndicatorKind::MovingAverage) => "MA",
            UiAction::ToggleIndicator(IndicatorKind::Rsi) => "RSI",
            UiAction::ToggleIndicator(IndicatorKind::Macd) => "MACD",
            UiAction::Resize(_) => "Resize",
        }
    }
}

impl FromStr for UiAction {
    type Err = AppError;

    /// Parse a toolbar button id.
    fn from_str(id: &str) -> Result<Self, Self::Err> {
        if let Ok(chart_type) = ChartType::from_str(id) {
            return Ok(UiAction::ShowPrice(chart_type));
        }
        if let Ok(kind) = IndicatorKind::from_str(id) {
            return Ok(UiAction::ToggleIndicator(kind));
        }
        Err(AppError::ValidationError(format!("unknown action id '{}'", id)))
    }
}

/// An indicator currently on the display together with the rows it shows.
#[derive(Debug, Clone)]
pub struct IndicatorHandle<H> {
    pub handle: H,
    pub series: Series,
}

/// Everything the presenter mutates between events.
#[derive(Debug)]
pub struct PresenterState<H> {
    price_mode: ChartType,
    price_series: HashMap<ChartType, H>,
    indicators: HashMap<IndicatorKind, IndicatorHandle<H>>,
}

impl<H> Default for PresenterState<H> {
    fn default() -> Self {
        Self {
            price_mode: ChartType::Candlestick,
            price_series: HashMap::new(),
            indicators: HashMap::new(),
        }
    }
}

impl<H> PresenterState<H> {
    pub fn price_mode(&self) -> ChartType {
        self.price_mode
    }

    pub fn price_handle(&self, chart_type: ChartType) -> Option<&H> {
        self.price_series.get(&chart_type)
    }

    pub fn indicator(&self, kind: IndicatorKind) -> Option<&IndicatorHandle<H>> {
        self.indicators.get(&kind)
    }

    pub fn is_active(&self, kind: IndicatorKind) -> bool {
        self.indicators.contains_key(&kind)
    }

    pub fn active_indicator_count(&self) -> usize {
        self.indicators.len()
    }
}

/// Owns the display, the immutable candles and the presenter state, and turns
/// [`UiAction`]s into display calls.
pub struct ChartController<D: ChartDisplay> {
    display: D,
    candles: Arc<[Candle]>,
    engine: IndicatorEngine,
    state: PresenterState<D::Handle>,
}

impl<D: ChartDisplay> ChartController<D> {
    /// Install the candlestick series and show all candles on it.
    pub fn new(mut display: D, candles: Arc<[Candle]>, engine: IndicatorEngine) -> AppResult<Self> {
        let handle = display.create_series(&SeriesStyle::for_price(ChartType::Candlestick))?;
        display.set_data(&handle, SeriesData::Candles(&candles))?;

        let mut state = PresenterState::default();
        state.price_series.insert(ChartType::Candlestick, handle);

        log_debug!(
            LogComponent::Application("Presenter"),
            "candlestick series installed with {} candles",
            candles.len()
        );

        Ok(Self { display, candles, engine, state })
    }

    pub fn dispatch(&mut self, action: UiAction) -> AppResult<()> {
        match action {
            UiAction::ShowPrice(chart_type) => self.show_price(chart_type),
            UiAction::ToggleIndicator(kind) => self.toggle_indicator(kind).map(|_| ()),
            UiAction::Resize(dimensions) => self.resize(dimensions),
        }
    }

    /// Clear the shown price representation, then fill `chart_type`.
    ///
    /// Selecting the active mode re-renders it. Line and area series are
    /// created on first use and reused afterwards. The target series exists
    /// before anything is cleared, so a failed creation leaves the chart as is.
    pub fn show_price(&mut self, chart_type: ChartType) -> AppResult<()> {
        if let Entry::Vacant(entry) = self.state.price_series.entry(chart_type) {
            entry.insert(self.display.create_series(&SeriesStyle::for_price(chart_type))?);
        }

        let previous = self.state.price_mode;
        if let Some(current) = self.state.price_series.get(&previous) {
            self.display.set_data(current, SeriesData::empty())?;
        }
        self.state.price_mode = chart_type;

        let handle = self
            .state
            .price_series
            .get(&chart_type)
            .ok_or_else(|| AppError::RenderingError(format!("no {} series", chart_type)))?;

        match chart_type {
            ChartType::Candlestick => {
                self.display.set_data(handle, SeriesData::Candles(&self.candles))?;
            }
            ChartType::Line | ChartType::Area => {
                let points = close_series(&self.candles);
                self.display.set_data(handle, SeriesData::Points(&points))?;
            }
        }

        log_debug!(
            LogComponent::Application("Presenter"),
            "price mode {} -> {}",
            previous,
            chart_type
        );
        Ok(())
    }

    /// Add the indicator if absent, remove it if present. Returns whether it
    /// is active afterwards.
    pub fn toggle_indicator(&mut self, kind: IndicatorKind) -> AppResult<bool> {
        if let Some(active) = self.state.indicators.get(&kind) {
            // slot keeps the handle until the display has released it
            self.display.remove_series(&active.handle)?;
            self.state.indicators.remove(&kind);
            log_debug!(LogComponent::Application("Presenter"), "{} off", kind);
            return Ok(false);
        }

        let series = self.engine.compute(kind, &self.candles)?;
        let handle = self.display.create_series(&SeriesStyle::for_indicator(kind))?;
        if let Err(err) = self.display.set_data(&handle, SeriesData::Points(&series)) {
            // drop the half-installed series
            self.display.remove_series(&handle)?;
            return Err(err);
        }

        log_debug!(
            LogComponent::Application("Presenter"),
            "{} on with {} points",
            kind,
            series.len()
        );
        self.state.indicators.insert(kind, IndicatorHandle { handle, series });
        Ok(true)
    }

    pub fn resize(&mut self, dimensions: ChartDimensions) -> AppResult<()> {
        log_debug!(
            LogComponent::Application("Presenter"),
            "resize to {}x{}",
            dimensions.width,
            dimensions.height
        );
        self.display.apply_options(dimensions)
    }

    pub fn state(&self) -> &PresenterState<D::Handle> {
        &self.state
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn engine(&self) -> &IndicatorEngine {
        &self.engine
    }
}
