//! Plot-ready data for a trained classifier.
//!
//! Nothing here draws. Callers hand the points to whatever renderer they use,
//! and only after training has finished.

use serde::Serialize;

use crate::Vector;
use crate::error::{ClassifierError, Result};
use crate::history::LossHistory;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LossPoint {
    pub epoch: usize,
    pub surrogate: f64,
    pub error_rate: f64,
}

pub fn linspace(start: f64, end: f64, num: usize) -> Vec<f64> {
    if num == 0 {
        return Vec::new();
    }
    let step = if num == 1 {
        0.0
    } else {
        (end - start) / (num - 1) as f64
    };
    (0..num).map(|i| start + step * i as f64).collect()
}

/// Points on `theta[0] + theta[1] x0 + theta[2] x1 = 0` for `x0` in `[x_min, x_max]`.
pub fn decision_boundary(
    theta: &Vector,
    x_min: f64,
    x_max: f64,
    n_points: usize,
) -> Result<Vec<(f64, f64)>> {
    if theta.len() != 3 {
        return Err(ClassifierError::Unplottable(format!(
            "boundary needs exactly 2 features, model has {}",
            theta.len().saturating_sub(1)
        )));
    }
    if theta[2] == 0.0 {
        return Err(ClassifierError::Unplottable(
            "boundary is vertical (theta[2] is zero)".to_string(),
        ));
    }

    let points = linspace(x_min, x_max, n_points)
        .into_iter()
        .map(|x0| (x0, (theta[0] + theta[1] * x0) / -theta[2]))
        .collect();
    Ok(points)
}

/// Absolute surrogate loss and error rate per epoch, ready for a log-x plot.
pub fn loss_curves(history: &LossHistory) -> Vec<LossPoint> {
    history
        .surrogate
        .iter()
        .zip(history.error_rate.iter())
        .enumerate()
        .map(|(epoch, (surrogate, error_rate))| LossPoint {
            epoch,
            surrogate: surrogate.abs(),
            error_rate: error_rate.abs(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_linspace() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_decision_boundary_lies_on_zero_response() {
        let theta = array![-5.0, 1.0, 1.0];
        let points = decision_boundary(&theta, 0.0, 5.0, 200).unwrap();

        assert_eq!(points.len(), 200);
        for (x0, x1) in points {
            let response = theta[0] + theta[1] * x0 + theta[2] * x1;
            assert!(response.abs() < 1e-9);
        }
    }

    #[test]
    fn test_decision_boundary_unplottable() {
        assert!(matches!(
            decision_boundary(&array![1.0, 2.0], 0.0, 1.0, 10),
            Err(ClassifierError::Unplottable(_))
        ));
        assert!(matches!(
            decision_boundary(&array![1.0, 2.0, 0.0], 0.0, 1.0, 10),
            Err(ClassifierError::Unplottable(_))
        ));
    }

    #[test]
    fn test_loss_curves_use_magnitudes() {
        let mut history = LossHistory::new();
        history.record(-0.7, 0.5);
        history.record(f64::NEG_INFINITY, 0.25);

        let curves = loss_curves(&history);
        assert_eq!(curves.len(), 2);
        assert_eq!(curves[0].epoch, 0);
        assert_eq!(curves[0].surrogate, 0.7);
        assert_eq!(curves[1].surrogate, f64::INFINITY);
        assert_eq!(curves[1].error_rate, 0.25);
    }
}
