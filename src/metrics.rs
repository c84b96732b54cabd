use ndarray::Array1;

use crate::error::{ClassifierError, Result};

/// Fraction of positions where the prediction differs from the truth.
pub fn error_rate<L: PartialEq>(y_true: &Array1<L>, y_pred: &Array1<L>) -> Result<f64> {
    if y_true.len() != y_pred.len() {
        return Err(ClassifierError::ShapeMismatch {
            features: y_pred.len(),
            labels: y_true.len(),
        });
    }
    if y_true.is_empty() {
        return Err(ClassifierError::EmptyInput);
    }

    let wrong = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(actual, pred)| actual != pred)
        .count();
    Ok(wrong as f64 / y_true.len() as f64)
}

pub fn accuracy_score<L: PartialEq>(y_true: &Array1<L>, y_pred: &Array1<L>) -> Result<f64> {
    Ok(1.0 - error_rate(y_true, y_pred)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_error_rate() {
        let y_true = array![1.0, 0.0, 1.0, 1.0];
        let y_pred = array![1.0, 1.0, 1.0, 0.0];

        let err = error_rate(&y_true, &y_pred).unwrap();
        assert!((err - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_accuracy_score_with_string_labels() {
        let y_true = array!["cat", "dog", "dog"];
        let y_pred = array!["cat", "dog", "dog"];

        let acc = accuracy_score(&y_true, &y_pred).unwrap();
        assert!((acc - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_length_mismatch() {
        let y_true = array![1, 0];
        let y_pred = array![1];
        assert!(error_rate(&y_true, &y_pred).is_err());
    }
}
