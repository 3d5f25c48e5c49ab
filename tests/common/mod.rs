#![allow(dead_code)]

use indicator_chart::domain::market_data::{Candle, OHLC, Price, Timestamp};

/// Candle whose open, high, low and close all equal `close`.
pub fn flat_candle(ts: i64, close: f64) -> Candle {
    let p = Price::from(close);
    Candle::new(Timestamp::from(ts), OHLC::new(p, p, p, p))
}

/// One candle per close, a minute apart starting at 0.
pub fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
    closes.iter().enumerate().map(|(i, &c)| flat_candle(i as i64 * 60, c)).collect()
}

/// Smooth deterministic walk, long enough for every default period.
pub fn wave_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let x = i as f64;
            flat_candle(i as i64 * 60, 200.0 + (x * 0.3).sin() * 5.0 + (x * 0.05).cos() * 2.0)
        })
        .collect()
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
