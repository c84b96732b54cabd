//! Binary logistic classification trained by stochastic gradient descent.
//!
//! The crate fits a linear decision boundary between exactly two classes of
//! arbitrary comparable labels, one example at a time, and records the
//! surrogate loss and training error of every epoch.

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod config;
pub mod dataset;
pub mod error;
pub mod history;
pub mod labels;
pub mod linear_model;
pub mod metrics;
pub mod report;

pub use config::TrainConfig;
pub use dataset::Dataset;
pub use error::{ClassifierError, Result};
pub use history::LossHistory;
pub use labels::ClassRegistry;
pub use linear_model::{LogisticClassifier, sigmoid};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;
