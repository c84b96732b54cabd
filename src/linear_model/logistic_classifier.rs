use std::fmt;

use log::{debug, info, warn};
use ndarray::{Array1, ArrayView1, Zip, s};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::StandardNormal;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::config::TrainConfig;
use crate::error::{ClassifierError, Result};
use crate::history::LossHistory;
use crate::labels::ClassRegistry;
use crate::{Matrix, Vector, metrics};

/// Binary linear classifier trained by online SGD on the logistic loss.
///
/// `theta` holds the bias followed by one weight per feature. A `theta` of the
/// right width when `fit` is called is used as a warm start; otherwise a fresh
/// one is drawn from a standard normal distribution.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogisticClassifier<L> {
    pub theta: Option<Vector>,
    classes: Option<ClassRegistry<L>>,
    init_step: f64,
    stop_tol: f64,
    stop_iter: usize,
    random_state: Option<u64>,
    #[serde(skip)]
    history: LossHistory,
    #[serde(skip)]
    n_iter: usize,
}

impl<L> LogisticClassifier<L> {
    pub fn new() -> Self {
        Self::from_config(&TrainConfig::default())
    }

    pub fn from_config(config: &TrainConfig) -> Self {
        Self {
            theta: None,
            classes: None,
            init_step: config.init_step,
            stop_tol: config.stop_tol,
            stop_iter: config.stop_iter,
            random_state: None,
            history: LossHistory::new(),
            n_iter: 0,
        }
    }

    pub fn init_step(mut self, init_step: f64) -> Self {
        self.init_step = init_step;
        self
    }

    pub fn stop_tol(mut self, stop_tol: f64) -> Self {
        self.stop_tol = stop_tol;
        self
    }

    pub fn stop_iter(mut self, stop_iter: usize) -> Self {
        self.stop_iter = stop_iter;
        self
    }

    pub fn random_state(mut self, random_state: u64) -> Self {
        self.random_state = Some(random_state);
        self
    }

    pub fn with_theta(mut self, theta: Vector) -> Self {
        self.theta = Some(theta);
        self
    }

    pub fn config(&self) -> TrainConfig {
        TrainConfig {
            init_step: self.init_step,
            stop_tol: self.stop_tol,
            stop_iter: self.stop_iter,
            plot: false,
        }
    }

    pub fn classes(&self) -> Option<&ClassRegistry<L>> {
        self.classes.as_ref()
    }

    pub fn history(&self) -> &LossHistory {
        &self.history
    }

    /// Epochs run by the last call to `fit`.
    pub fn n_iter(&self) -> usize {
        self.n_iter
    }

    pub fn n_features(&self) -> Option<usize> {
        self.theta.as_ref().map(|theta| theta.len().saturating_sub(1))
    }

    /// Linear response `theta[0] + theta[1] x[0] + theta[2] x[1] + ...` for each row.
    pub fn decision_function(&self, x: &Matrix) -> Result<Vector> {
        let theta = self.theta.as_ref().ok_or(ClassifierError::NotFitted)?;

        if x.ncols() + 1 != theta.len() {
            return Err(ClassifierError::FeatureMismatch {
                expected: theta.len().saturating_sub(1),
                found: x.ncols(),
            });
        }

        let x_with_bias = with_bias_column(x);
        let scores = x_with_bias
            .rows()
            .into_iter()
            .map(|row| linear_response(theta, row))
            .collect::<Vector>();
        Ok(scores)
    }

    fn initial_theta(&self, len: usize) -> Vector {
        match self.random_state {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                Vector::random_using(len, StandardNormal, &mut rng)
            }
            None => Vector::random(len, StandardNormal),
        }
    }
}

impl<L: Clone + PartialOrd> LogisticClassifier<L> {
    pub fn fit(&mut self, x: &Matrix, y: &Array1<L>) -> Result<()> {
        let (n_samples, n_features) = x.dim();
        if n_samples == 0 || n_features == 0 {
            return Err(ClassifierError::EmptyInput);
        }
        if y.len() != n_samples {
            return Err(ClassifierError::ShapeMismatch {
                features: n_samples,
                labels: y.len(),
            });
        }
        self.config().validate()?;
        let classes = ClassRegistry::from_labels(&y.to_vec())?;

        let mut theta = match self.theta.take() {
            Some(theta) if theta.len() == n_features + 1 => theta,
            Some(theta) => {
                warn!(
                    "theta has {} entries but {} features need {}, drawing a fresh one",
                    theta.len(),
                    n_features,
                    n_features + 1
                );
                self.initial_theta(n_features + 1)
            }
            None => self.initial_theta(n_features + 1),
        };

        let x_with_bias = with_bias_column(x);
        let targets = classes.encode(y);
        let mut probabilities = Vector::zeros(n_samples);
        let mut history = std::mem::take(&mut self.history);
        history.clear();
        let mut epoch = 0;

        loop {
            let step = 2.0 * self.init_step / (2.0 + epoch as f64);

            for (i, row) in x_with_bias.rows().into_iter().enumerate() {
                let probability = sigmoid(linear_response(&theta, row));
                probabilities[i] = probability;

                let residual = probability - targets[i];
                Zip::from(&mut theta)
                    .and(&row)
                    .for_each(|weight, &feature| *weight -= step * (residual * feature));
            }

            let error_rate = misclassification_rate(&theta, &x_with_bias, &targets);
            let surrogate = surrogate_loss(&probabilities, &targets);
            history.record(surrogate, error_rate);
            epoch += 1;

            debug!(
                "epoch {}: step={:.6} surrogate={:.6} error_rate={:.4}",
                epoch, step, surrogate, error_rate
            );

            let converged = epoch > 1
                && history
                    .last_delta()
                    .is_some_and(|delta| delta < self.stop_tol);
            if epoch > self.stop_iter || converged {
                break;
            }
        }

        info!(
            "trained on {} samples with {} features in {} epochs (surrogate={:.6}, error_rate={:.4})",
            n_samples,
            n_features,
            epoch,
            history.last_surrogate().unwrap_or(f64::NAN),
            history.last_error_rate().unwrap_or(f64::NAN)
        );

        self.theta = Some(theta);
        self.classes = Some(classes);
        self.history = history;
        self.n_iter = epoch;
        Ok(())
    }

    /// Positive class where the linear response is strictly above zero.
    pub fn predict(&self, x: &Matrix) -> Result<Array1<L>> {
        let classes = self.classes.as_ref().ok_or(ClassifierError::NotFitted)?;
        let scores = self.decision_function(x)?;

        let predictions = scores.map(|&score| {
            if score > 0.0 {
                classes.positive().clone()
            } else {
                classes.negative().clone()
            }
        });
        Ok(predictions)
    }

    /// Fraction of rows whose predicted label differs from `y`.
    pub fn err(&self, x: &Matrix, y: &Array1<L>) -> Result<f64> {
        if x.nrows() != y.len() {
            return Err(ClassifierError::ShapeMismatch {
                features: x.nrows(),
                labels: y.len(),
            });
        }
        let predictions = self.predict(x)?;
        metrics::error_rate(y, &predictions)
    }

    pub fn score(&self, x: &Matrix, y: &Array1<L>) -> Result<f64> {
        Ok(1.0 - self.err(x, y)?)
    }
}

impl<L> Default for LogisticClassifier<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> fmt::Display for LogisticClassifier<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.theta {
            Some(theta) => write!(
                f,
                "LogisticClassifier model, {} features\n{}",
                theta.len().saturating_sub(1),
                theta
            ),
            None => write!(f, "LogisticClassifier model, unfitted"),
        }
    }
}

pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

fn with_bias_column(x: &Matrix) -> Matrix {
    let mut x_with_bias = Matrix::ones((x.nrows(), x.ncols() + 1));
    x_with_bias.slice_mut(s![.., 1..]).assign(x);
    x_with_bias
}

fn linear_response(theta: &Vector, row: ArrayView1<f64>) -> f64 {
    row.iter()
        .zip(theta.iter())
        .fold(0.0, |acc, (feature, weight)| acc + feature * weight)
}

fn misclassification_rate(theta: &Vector, x_with_bias: &Matrix, targets: &Vector) -> f64 {
    let wrong = x_with_bias
        .rows()
        .into_iter()
        .zip(targets.iter())
        .filter(|(row, target)| {
            let predicted = if linear_response(theta, row.view()) > 0.0 { 1.0 } else { 0.0 };
            predicted != **target
        })
        .count();
    wrong as f64 / targets.len() as f64
}

// Mean of y ln(s) + (1 - y) ln(1 - s); saturated probabilities give -inf or NaN.
fn surrogate_loss(probabilities: &Vector, targets: &Vector) -> f64 {
    let total = probabilities
        .iter()
        .zip(targets.iter())
        .map(|(&s, &y)| y * s.ln() + (1.0 - y) * (1.0 - s).ln())
        .sum::<f64>();
    total / targets.len() as f64
}
