//! Accuracy metrics for predictions against reference values.

mod mae;

pub use mae::mean_absolute_error;
