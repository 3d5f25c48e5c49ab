pub use super::value_objects::{OHLC, Price, Timestamp};
use serde::{Deserialize, Serialize};

/// Domain entity - Candle (one OHLC bar)
///
/// Serialises flat as `{time, open, high, low, close}`, which is the row
/// format the chart widget consumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    #[serde(rename = "time")]
    pub timestamp: Timestamp,
    #[serde(flatten)]
    pub ohlc: OHLC,
}

impl Candle {
    pub fn new(timestamp: Timestamp, ohlc: OHLC) -> Self {
        Self { timestamp, ohlc }
    }

    pub fn close(&self) -> f64 {
        self.ohlc.close.value()
    }

    pub fn is_bullish(&self) -> bool {
        self.ohlc.close > self.ohlc.open
    }

    pub fn is_bearish(&self) -> bool {
        self.ohlc.close < self.ohlc.open
    }
}

/// One row of a derived series. `value: None` is a time-only placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub time: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl SeriesPoint {
    pub fn new(time: Timestamp, value: f64) -> Self {
        Self { time, value: Some(value) }
    }

    pub fn placeholder(time: Timestamp) -> Self {
        Self { time, value: None }
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_none()
    }
}

/// Ordered derived output, one row per defined input candle.
pub type Series = Vec<SeriesPoint>;

/// `{time, value: close}` rows used by the line and area price modes.
pub fn close_series(candles: &[Candle]) -> Series {
    candles.iter().map(|c| SeriesPoint::new(c.timestamp, c.close())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(ts: i64, open: f64, close: f64) -> Candle {
        let high = open.max(close) + 1.0;
        let low = open.min(close) - 1.0;
        Candle::new(
            Timestamp::from(ts),
            OHLC::new(Price::from(open), Price::from(high), Price::from(low), Price::from(close)),
        )
    }

    #[test]
    fn candle_direction() {
        assert!(candle(0, 10.0, 11.0).is_bullish());
        assert!(candle(0, 11.0, 10.0).is_bearish());
        let flat = candle(0, 10.0, 10.0);
        assert!(!flat.is_bullish() && !flat.is_bearish());
    }

    #[test]
    fn candle_serialises_flat() {
        let json = serde_json::to_value(candle(60, 10.0, 11.0)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"time": 60, "open": 10.0, "high": 12.0, "low": 9.0, "close": 11.0})
        );
    }

    #[test]
    fn placeholder_serialises_time_only() {
        let json = serde_json::to_string(&SeriesPoint::placeholder(Timestamp::from(0))).unwrap();
        assert_eq!(json, r#"{"time":0}"#);
    }

    #[test]
    fn close_series_keeps_times() {
        let candles = [candle(0, 10.0, 11.0), candle(60, 11.0, 9.5)];
        let series = close_series(&candles);
        assert_eq!(series, vec![
            SeriesPoint::new(Timestamp::from(0), 11.0),
            SeriesPoint::new(Timestamp::from(60), 9.5),
        ]);
    }
}
