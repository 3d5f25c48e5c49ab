//! [`ChartDisplay`] backed by the `LightweightCharts` global of the
//! lightweight-charts 4.x standalone bundle.

use crate::domain::{
    chart::{ChartDimensions, ChartDisplay, ChartTheme, SeriesData, SeriesKind, SeriesStyle},
    errors::{AppError, DisplayResult},
    logging::LogComponent,
};
use crate::log_debug;
use serde::Serialize;
use serde_json::{Value, json};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `IChartApi`
    pub type ChartApi;

    /// `ISeriesApi`
    pub type SeriesApi;

    #[wasm_bindgen(catch, js_namespace = LightweightCharts, js_name = createChart)]
    fn create_chart(container: &web_sys::HtmlElement, options: &JsValue) -> Result<ChartApi, JsValue>;

    #[wasm_bindgen(method, catch, js_name = addCandlestickSeries)]
    fn add_candlestick_series(this: &ChartApi, options: &JsValue) -> Result<SeriesApi, JsValue>;

    #[wasm_bindgen(method, catch, js_name = addLineSeries)]
    fn add_line_series(this: &ChartApi, options: &JsValue) -> Result<SeriesApi, JsValue>;

    #[wasm_bindgen(method, catch, js_name = addAreaSeries)]
    fn add_area_series(this: &ChartApi, options: &JsValue) -> Result<SeriesApi, JsValue>;

    #[wasm_bindgen(method, catch, js_name = addHistogramSeries)]
    fn add_histogram_series(this: &ChartApi, options: &JsValue) -> Result<SeriesApi, JsValue>;

    #[wasm_bindgen(method, catch, js_name = removeSeries)]
    fn remove_series(this: &ChartApi, series: &SeriesApi) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = applyOptions)]
    fn apply_options(this: &ChartApi, options: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = setData)]
    fn set_data(this: &SeriesApi, data: &JsValue) -> Result<(), JsValue>;
}

/// Chart-level options for `createChart`.
pub fn chart_options(dimensions: ChartDimensions, theme: &ChartTheme) -> Value {
    json!({
        "width": dimensions.width,
        "height": dimensions.height,
        "layout": {
            "background": { "color": theme.background },
            "textColor": theme.text,
        },
        "grid": {
            "vertLines": { "color": theme.grid },
            "horzLines": { "color": theme.grid },
        },
        "crosshair": { "mode": theme.crosshair as u8 },
        "rightPriceScale": { "borderColor": theme.border },
        "timeScale": { "borderColor": theme.border },
    })
}

/// Options for `applyOptions` after a resize.
pub fn resize_options(dimensions: ChartDimensions) -> Value {
    json!({ "width": dimensions.width, "height": dimensions.height })
}

/// Plain JS objects and arrays, the shape the widget reads options and rows in.
fn to_js<T: Serialize + ?Sized>(value: &T) -> DisplayResult<JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| AppError::RenderingError(e.to_string()))
}

fn js_error(err: JsValue) -> AppError {
    AppError::RenderingError(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

pub struct LightweightChartsDisplay {
    chart: ChartApi,
}

impl LightweightChartsDisplay {
    /// Create the widget inside `container`.
    pub fn new(
        container: &web_sys::HtmlElement,
        dimensions: ChartDimensions,
        theme: &ChartTheme,
    ) -> DisplayResult<Self> {
        let options = to_js(&chart_options(dimensions, theme))?;
        let chart = create_chart(container, &options).map_err(js_error)?;
        log_debug!(
            LogComponent::Infrastructure("LightweightCharts"),
            "chart created at {}x{}",
            dimensions.width,
            dimensions.height
        );
        Ok(Self { chart })
    }
}

impl ChartDisplay for LightweightChartsDisplay {
    type Handle = SeriesApi;

    fn create_series(&mut self, style: &SeriesStyle) -> DisplayResult<SeriesApi> {
        let options = to_js(style)?;
        let series = match style.kind() {
            SeriesKind::Candlestick => self.chart.add_candlestick_series(&options),
            SeriesKind::Line => self.chart.add_line_series(&options),
            SeriesKind::Area => self.chart.add_area_series(&options),
            SeriesKind::Histogram => self.chart.add_histogram_series(&options),
        };
        series.map_err(js_error)
    }

    fn set_data(&mut self, handle: &SeriesApi, data: SeriesData<'_>) -> DisplayResult<()> {
        handle.set_data(&to_js(&data)?).map_err(js_error)
    }

    fn remove_series(&mut self, handle: &SeriesApi) -> DisplayResult<()> {
        self.chart.remove_series(handle).map_err(js_error)
    }

    fn apply_options(&mut self, dimensions: ChartDimensions) -> DisplayResult<()> {
        self.chart.apply_options(&to_js(&resize_options(dimensions))?).map_err(js_error)
    }
}
