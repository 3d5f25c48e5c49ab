//! Chart aggregate: display capability, price modes and series styles.

pub mod display;
pub mod value_objects;

pub use display::*;
pub use value_objects::*;
