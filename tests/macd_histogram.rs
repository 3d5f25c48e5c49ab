mod common;

use common::{approx_eq, candles_from_closes, wave_candles};
use indicator_chart::domain::errors::IndicatorError;
use indicator_chart::domain::market_data::{MacdParams, macd_histogram};

/// Straightforward re-derivation kept separate from the production loop.
fn reference_histogram(closes: &[f64], params: MacdParams) -> Vec<f64> {
    let fast_k = 2.0 / (params.fast_period as f64 + 1.0);
    let slow_k = 2.0 / (params.slow_period as f64 + 1.0);
    let mut fast = vec![closes[0]];
    let mut slow = vec![closes[0]];
    for i in 1..closes.len() {
        fast.push((closes[i] - fast[i - 1]) * fast_k + fast[i - 1]);
        slow.push((closes[i] - slow[i - 1]) * slow_k + slow[i - 1]);
    }
    let macd: Vec<f64> =
        (params.slow_period - 1..closes.len()).map(|i| fast[i] - slow[i]).collect();
    (params.signal_period - 1..macd.len())
        .map(|j| {
            let window = &macd[j + 1 - params.signal_period..=j];
            macd[j] - window.iter().sum::<f64>() / params.signal_period as f64
        })
        .collect()
}

#[test]
fn default_length_and_alignment() {
    let candles = wave_candles(100);
    let series = macd_histogram(&candles, MacdParams::default()).unwrap();

    assert_eq!(series.len(), 100 - 26 - 9 + 2);
    assert_eq!(series[0].time, candles[26 + 9 - 2].timestamp);
    assert_eq!(series.last().unwrap().time, candles[99].timestamp);
}

#[test]
fn matches_reference_with_simple_signal() {
    let candles = wave_candles(80);
    let closes: Vec<f64> = candles.iter().map(|c| c.close()).collect();
    let params = MacdParams { fast_period: 5, slow_period: 10, signal_period: 4 };

    let series = macd_histogram(&candles, params).unwrap();
    let expected = reference_histogram(&closes, params);

    assert_eq!(series.len(), expected.len());
    for (point, want) in series.iter().zip(&expected) {
        assert!(approx_eq(point.value.unwrap(), *want));
    }
}

#[test]
fn constant_closes_give_zero_histogram() {
    let candles = candles_from_closes(&[42.0; 50]);
    let series = macd_histogram(&candles, MacdParams::default()).unwrap();
    assert_eq!(series.len(), 50 - 26 - 9 + 2);
    assert!(series.iter().all(|p| p.value == Some(0.0)));
}

#[test]
fn warm_up_not_reached() {
    let candles = wave_candles(33);
    assert!(macd_histogram(&candles, MacdParams::default()).unwrap().is_empty());
    assert_eq!(macd_histogram(&wave_candles(34), MacdParams::default()).unwrap().len(), 1);
    assert!(macd_histogram(&[], MacdParams::default()).unwrap().is_empty());
}

#[test]
fn zero_periods_rejected() {
    let candles = wave_candles(10);
    let params = MacdParams { fast_period: 0, ..MacdParams::default() };
    assert_eq!(
        macd_histogram(&candles, params),
        Err(IndicatorError::InvalidArgument { name: "fast_period", value: 0 })
    );
}
