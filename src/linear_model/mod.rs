//! Linear models for binary classification.
//!
//! This module provides:
//! - `LogisticClassifier`: a two-class logistic model trained one example at a
//!   time by stochastic gradient descent, with a harmonically decaying step
//!   size and a loss-delta stopping rule.
//!
//! # Examples
//!
//! ```rust
//! use logistic_sgd::{LogisticClassifier, Matrix};
//! use ndarray::array;
//!
//! let x = array![[0.0, 0.0], [0.5, 0.2], [5.0, 5.0], [5.2, 4.8]];
//! let y = array!["a", "a", "b", "b"];
//!
//! let mut model = LogisticClassifier::new().random_state(0);
//! model.fit(&x, &y).unwrap();
//!
//! let predictions = model.predict(&array![[10.0, 10.0]]).unwrap();
//! assert_eq!(predictions.len(), 1);
//! println!("{}", model);
//! ```

mod logistic_classifier;

pub use logistic_classifier::{LogisticClassifier, sigmoid};
