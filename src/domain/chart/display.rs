use super::value_objects::{ChartDimensions, SeriesStyle};
use crate::domain::errors::DisplayResult;
use crate::domain::market_data::{Candle, SeriesPoint};
use serde::Serialize;

/// Rows handed to a display series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SeriesData<'a> {
    Candles(&'a [Candle]),
    Points(&'a [SeriesPoint]),
}

impl<'a> SeriesData<'a> {
    /// Data that clears a series of any kind.
    pub fn empty() -> Self {
        SeriesData::Points(&[])
    }

    pub fn len(&self) -> usize {
        match self {
            SeriesData::Candles(rows) => rows.len(),
            SeriesData::Points(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Rendering capability the chart is drawn through.
///
/// Implementations own layout, panning, zooming and crosshair behaviour;
/// callers only create series, feed them rows and remove them again.
pub trait ChartDisplay {
    /// Opaque reference to one series on the display.
    type Handle;

    /// Add an empty series whose kind is selected by `style`.
    fn create_series(&mut self, style: &SeriesStyle) -> DisplayResult<Self::Handle>;

    /// Replace all rows of a series.
    fn set_data(&mut self, handle: &Self::Handle, data: SeriesData<'_>) -> DisplayResult<()>;

    fn remove_series(&mut self, handle: &Self::Handle) -> DisplayResult<()>;

    fn apply_options(&mut self, dimensions: ChartDimensions) -> DisplayResult<()>;
}
