//! Market data aggregate: candles, derived series, indicators and the synthetic source.

pub mod entities;
pub mod generator;
pub mod indicator_engine;
pub mod value_objects;

pub use entities::*;
pub use generator::SyntheticSeriesGenerator;
pub use indicator_engine::*;
pub use value_objects::*;
