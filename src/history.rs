use serde::{Deserialize, Serialize};

/// Per-epoch convergence signals recorded while training.
///
/// `surrogate` holds the mean of `y ln(s) + (1 - y) ln(1 - s)` over the epoch,
/// which is never positive; only its magnitude tracks the loss. Entries can be
/// `-inf` or NaN once the sigmoid saturates.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LossHistory {
    pub surrogate: Vec<f64>,
    pub error_rate: Vec<f64>,
}

impl LossHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, surrogate: f64, error_rate: f64) {
        self.surrogate.push(surrogate);
        self.error_rate.push(error_rate);
    }

    pub fn len(&self) -> usize {
        self.surrogate.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surrogate.is_empty()
    }

    pub fn clear(&mut self) {
        self.surrogate.clear();
        self.error_rate.clear();
    }

    pub fn last_surrogate(&self) -> Option<f64> {
        self.surrogate.last().copied()
    }

    pub fn last_error_rate(&self) -> Option<f64> {
        self.error_rate.last().copied()
    }

    /// `|loss[-1] - loss[-2]|`, once two epochs are recorded.
    pub fn last_delta(&self) -> Option<f64> {
        match self.surrogate.as_slice() {
            [.., previous, current] => Some((current - previous).abs()),
            _ => None,
        }
    }
}
