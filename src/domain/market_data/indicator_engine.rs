use super::{Candle, Series, SeriesPoint};
use crate::domain::errors::{IndicatorError, IndicatorResult};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Indicators the chart can overlay, keyed by their toolbar identifiers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, AsRefStr, IntoStaticStr,
    Serialize, Deserialize,
)]
pub enum IndicatorKind {
    #[strum(serialize = "ma")]
    #[serde(rename = "ma")]
    MovingAverage,
    #[strum(serialize = "rsi")]
    #[serde(rename = "rsi")]
    Rsi,
    #[strum(serialize = "macd")]
    #[serde(rename = "macd")]
    Macd,
}

/// MACD periods. Defaults are the conventional 12/26/9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacdParams {
    pub fast_period: usize,
    pub slow_period: usize,
    pub signal_period: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self { fast_period: 12, slow_period: 26, signal_period: 9 }
    }
}

impl MacdParams {
    pub fn validate(&self) -> IndicatorResult<()> {
        check_period("fast_period", self.fast_period)?;
        check_period("slow_period", self.slow_period)?;
        check_period("signal_period", self.signal_period)
    }
}

/// Periods used when an indicator is toggled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorParams {
    pub ma_period: usize,
    pub rsi_period: usize,
    pub macd: MacdParams,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self { ma_period: 20, rsi_period: 14, macd: MacdParams::default() }
    }
}

impl IndicatorParams {
    pub fn validate(&self) -> IndicatorResult<()> {
        check_period("ma_period", self.ma_period)?;
        check_period("rsi_period", self.rsi_period)?;
        self.macd.validate()
    }
}

/// Stateless dispatcher from [`IndicatorKind`] to the pure indicator functions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IndicatorEngine {
    params: IndicatorParams,
}

impl IndicatorEngine {
    pub fn new(params: IndicatorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &IndicatorParams {
        &self.params
    }

    pub fn compute(&self, kind: IndicatorKind, candles: &[Candle]) -> IndicatorResult<Series> {
        match kind {
            IndicatorKind::MovingAverage => moving_average(candles, self.params.ma_period),
            IndicatorKind::Rsi => rsi(candles, self.params.rsi_period),
            IndicatorKind::Macd => macd_histogram(candles, self.params.macd),
        }
    }
}

#[inline]
fn check_period(name: &'static str, value: usize) -> IndicatorResult<()> {
    if value == 0 {
        return Err(IndicatorError::InvalidArgument { name, value });
    }
    Ok(())
}

#[inline]
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Simple moving average of closes.
///
/// One row per candle; the first `period - 1` rows are time-only placeholders.
pub fn moving_average(candles: &[Candle], period: usize) -> IndicatorResult<Series> {
    check_period("period", period)?;

    let closes: Vec<f64> = candles.iter().map(Candle::close).collect();
    let series = candles
        .iter()
        .enumerate()
        .map(|(i, candle)| {
            if i + 1 < period {
                SeriesPoint::placeholder(candle.timestamp)
            } else {
                SeriesPoint::new(candle.timestamp, mean(&closes[i + 1 - period..=i]))
            }
        })
        .collect();

    Ok(series)
}

/// Relative Strength Index over a plain `period`-long average of gains and losses.
///
/// Rows start once `period` close-to-close differences exist; earlier candles
/// are omitted, not padded. A window without losses yields exactly 100.
pub fn rsi(candles: &[Candle], period: usize) -> IndicatorResult<Series> {
    check_period("period", period)?;

    let mut gains = Vec::with_capacity(candles.len());
    let mut losses = Vec::with_capacity(candles.len());
    let mut series = Vec::with_capacity(candles.len().saturating_sub(period));

    for (i, pair) in candles.windows(2).enumerate() {
        let difference = pair[1].close() - pair[0].close();
        gains.push(difference.max(0.0));
        losses.push((-difference).max(0.0));

        // `i + 1` differences accumulated so far
        if i + 1 >= period {
            let avg_gain = mean(&gains[gains.len() - period..]);
            let avg_loss = mean(&losses[losses.len() - period..]);
            series.push(SeriesPoint::new(pair[1].timestamp, rsi_from_averages(avg_gain, avg_loss)));
        }
    }

    Ok(series)
}

#[inline]
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}

/// MACD histogram: MACD line minus its signal line.
///
/// Both EMAs are seeded with the first close. The signal line is a *simple*
/// average of the last `signal_period` MACD values. Rows start once the slow
/// EMA and the signal window are both warm.
pub fn macd_histogram(candles: &[Candle], params: MacdParams) -> IndicatorResult<Series> {
    params.validate()?;

    let Some(first) = candles.first() else {
        return Ok(Vec::new());
    };

    let fast_multiplier = 2.0 / (params.fast_period as f64 + 1.0);
    let slow_multiplier = 2.0 / (params.slow_period as f64 + 1.0);
    let mut fast_ema = first.close();
    let mut slow_ema = first.close();
    let mut macd_line = Vec::with_capacity(candles.len());
    let mut series = Vec::new();

    for (i, candle) in candles.iter().enumerate().skip(1) {
        let close = candle.close();
        fast_ema = (close - fast_ema) * fast_multiplier + fast_ema;
        slow_ema = (close - slow_ema) * slow_multiplier + slow_ema;

        if i + 1 < params.slow_period {
            continue;
        }

        let macd = fast_ema - slow_ema;
        macd_line.push(macd);

        if macd_line.len() >= params.signal_period {
            let signal = mean(&macd_line[macd_line.len() - params.signal_period..]);
            series.push(SeriesPoint::new(candle.timestamp, macd - signal));
        }
    }

    Ok(series)
}
