use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Value Object - Price
#[derive(Debug, Clone, Copy, PartialEq, Default, From, Into, Deref, Constructor, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - Unix timestamp in whole seconds
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Constructor,
    Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Convert from milliseconds, truncating toward zero.
    pub fn from_millis(value: u64) -> Self {
        Self((value / 1000) as i64)
    }

    /// Timestamp `steps * interval_seconds` before this one.
    pub fn steps_back(&self, steps: usize, interval_seconds: i64) -> Self {
        Self(self.0 - steps as i64 * interval_seconds)
    }
}

/// Value Object - OHLC prices of a single interval
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct OHLC {
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
}

impl OHLC {
    /// `low <= open, close <= high`
    pub fn is_valid(&self) -> bool {
        self.high >= self.open
            && self.high >= self.close
            && self.high >= self.low
            && self.low <= self.open
            && self.low <= self.close
    }
}
