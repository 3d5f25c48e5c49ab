mod common;

use common::{approx_eq, candles_from_closes, wave_candles};
use indicator_chart::domain::market_data::{Timestamp, rsi};

#[test]
fn rows_start_after_period_differences() {
    let candles = wave_candles(40);
    let series = rsi(&candles, 14).unwrap();

    assert_eq!(series.len(), 40 - 14);
    assert_eq!(series[0].time, candles[14].timestamp);
    assert_eq!(series.last().unwrap().time, candles[39].timestamp);
    assert!(series.iter().all(|p| !p.is_placeholder()));
}

#[test]
fn hand_computed_values() {
    // differences: +2, -1, +3, -2
    let candles = candles_from_closes(&[10.0, 12.0, 11.0, 14.0, 12.0]);
    let series = rsi(&candles, 2).unwrap();
    assert_eq!(series.len(), 3);

    // gains [2, 0] losses [0, 1] -> rs 2 -> 66.67
    assert!(approx_eq(series[0].value.unwrap(), 100.0 - 100.0 / 3.0));
    // gains [0, 3] losses [1, 0] -> rs 3 -> 75
    assert!(approx_eq(series[1].value.unwrap(), 75.0));
    // gains [3, 0] losses [0, 2] -> rs 1.5 -> 60
    assert!(approx_eq(series[2].value.unwrap(), 60.0));
    assert_eq!(series[2].time, Timestamp::from(240));
}

#[test]
fn only_gains_is_one_hundred() {
    let candles = candles_from_closes(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let series = rsi(&candles, 3).unwrap();
    assert!(series.iter().all(|p| p.value == Some(100.0)));
}

#[test]
fn only_losses_is_zero() {
    let candles = candles_from_closes(&[5.0, 4.0, 3.0, 2.0, 1.0]);
    let series = rsi(&candles, 3).unwrap();
    assert_eq!(series.len(), 2);
    assert!(series.iter().all(|p| p.value == Some(0.0)));
}

#[test]
fn short_and_empty_input() {
    assert!(rsi(&[], 14).unwrap().is_empty());
    assert!(rsi(&candles_from_closes(&[1.0]), 1).unwrap().is_empty());
    assert!(rsi(&candles_from_closes(&[1.0, 2.0, 3.0]), 14).unwrap().is_empty());
    assert!(rsi(&candles_from_closes(&[1.0, 2.0]), 0).is_err());
}
