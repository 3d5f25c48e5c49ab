use indicator_chart::domain::market_data::{SyntheticSeriesGenerator, Timestamp};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn seeded(seed: u64) -> SyntheticSeriesGenerator<StdRng> {
    SyntheticSeriesGenerator::with_rng(StdRng::seed_from_u64(seed))
}

#[test]
fn bars_end_at_now_spaced_by_interval() {
    let now = Timestamp::from(1_700_000_000);
    let candles = seeded(7).generate_at(now, 500, 60, 200.0);

    assert_eq!(candles.len(), 500);
    assert_eq!(candles.last().unwrap().timestamp, now);
    assert_eq!(candles[0].timestamp, Timestamp::from(1_700_000_000 - 499 * 60));
    assert!(candles.windows(2).all(|w| w[1].timestamp.value() - w[0].timestamp.value() == 60));
}

#[test]
fn every_bar_is_consistent() {
    let candles = seeded(11).generate_at(Timestamp::from(0), 1_000, 300, 50.0);

    for candle in &candles {
        assert!(candle.ohlc.is_valid(), "inconsistent bar {:?}", candle);
        let midpoint = (candle.ohlc.high.value() + candle.ohlc.low.value()) / 2.0;
        assert_eq!(candle.close(), midpoint);
    }
}

#[test]
fn walk_starts_near_start_price() {
    let candles = seeded(3).generate_at(Timestamp::from(10_000), 20, 60, 200.0);
    // newest bar is the first one generated
    let newest = candles.last().unwrap();
    assert!((newest.ohlc.open.value() - 200.0).abs() <= 5.0);
    assert!(newest.ohlc.high.value() - newest.ohlc.open.value() <= 5.0);
    assert!(newest.ohlc.open.value() - newest.ohlc.low.value() <= 5.0);
}

#[test]
fn same_seed_same_series() {
    let now = Timestamp::from(42);
    assert_eq!(seeded(1).generate_at(now, 50, 60, 100.0), seeded(1).generate_at(now, 50, 60, 100.0));
}

#[test]
fn zero_count_is_empty() {
    assert!(seeded(0).generate_at(Timestamp::from(0), 0, 60, 100.0).is_empty());
}

#[test]
fn generate_uses_wall_clock() {
    let candles = SyntheticSeriesGenerator::new().generate(10, 60, 100.0);
    assert_eq!(candles.len(), 10);
    assert!(candles.last().unwrap().timestamp.value() > 1_600_000_000);
}
