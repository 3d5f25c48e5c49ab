use super::{Candle, OHLC, Price, Timestamp};
use crate::domain::logging::{LogComponent, get_time_provider};
use crate::log_info;
use rand::Rng;
use rand::rngs::ThreadRng;

/// Maximum distance of an open from the previous close.
const OPEN_JITTER: f64 = 5.0;
/// Maximum wick length above and below the open.
const WICK_RANGE: f64 = 5.0;

/// Random-walk candle source for the demo chart.
///
/// Walks backward in time from "now", each open jittering around the previous
/// close, then returns the bars in ascending time order. Every bar satisfies
/// `low <= open, close <= high`, with close at the midpoint of the range.
pub struct SyntheticSeriesGenerator<R: Rng = ThreadRng> {
    rng: R,
}

impl SyntheticSeriesGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for SyntheticSeriesGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SyntheticSeriesGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate `count` bars ending at the current wall-clock second.
    pub fn generate(&mut self, count: usize, interval_seconds: i64, start_price: f64) -> Vec<Candle> {
        let now = Timestamp::from_millis(get_time_provider().current_timestamp());
        self.generate_at(now, count, interval_seconds, start_price)
    }

    /// Generate `count` bars, the newest stamped `now`.
    pub fn generate_at(
        &mut self,
        now: Timestamp,
        count: usize,
        interval_seconds: i64,
        start_price: f64,
    ) -> Vec<Candle> {
        let mut candles = Vec::with_capacity(count);
        let mut last_close = start_price;

        for step in 0..count {
            let open = last_close + self.rng.random_range(-OPEN_JITTER..OPEN_JITTER);
            let high = open + self.rng.random_range(0.0..WICK_RANGE);
            let low = open - self.rng.random_range(0.0..WICK_RANGE);
            let close = (high + low) / 2.0;

            candles.push(Candle::new(
                now.steps_back(step, interval_seconds),
                OHLC::new(Price::from(open), Price::from(high), Price::from(low), Price::from(close)),
            ));
            last_close = close;
        }

        candles.reverse();

        log_info!(
            LogComponent::Domain("Generator"),
            "generated {} synthetic candles ending at {}",
            candles.len(),
            now
        );

        candles
    }
}
