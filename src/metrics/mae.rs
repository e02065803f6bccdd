use crate::error::FisError;

/// Mean of `|p - a|` over aligned pairs.
///
/// Sequences must be the same length and non-empty; nothing is truncated.
pub fn mean_absolute_error(predicted: &[f64], actual: &[f64]) -> Result<f64, FisError> {
    if predicted.len() != actual.len() {
        return Err(FisError::invalid_input(format!(
            "length mismatch: {} predictions, {} references",
            predicted.len(),
            actual.len()
        )));
    }
    if predicted.is_empty() {
        return Err(FisError::invalid_input("no values to average"));
    }

    let total: f64 = predicted
        .iter()
        .zip(actual)
        .map(|(p, a)| (p - a).abs())
        .sum();
    Ok(total / predicted.len() as f64)
}
