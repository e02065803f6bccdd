//! Membership functions over a single input dimension.

mod triangular;

pub use triangular::{triangular, Triangle};
