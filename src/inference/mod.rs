//! Defuzzification and the end-to-end inference engine.

mod defuzzify;
mod engine;

pub use defuzzify::{defuzzify, select, NO_FIRE_PREDICTION};
pub use engine::{FisEngine, Inference};
