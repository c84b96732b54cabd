use ndarray::{Array1, Axis, s};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Normal;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::Matrix;
use crate::error::{ClassifierError, Result};

#[derive(Clone, Debug)]
pub struct Dataset<L> {
    pub features: Matrix,
    pub labels: Array1<L>,
}

impl<L: Clone> Dataset<L> {
    pub fn new(features: Matrix, labels: Array1<L>) -> Result<Self> {
        if features.nrows() != labels.len() {
            return Err(ClassifierError::ShapeMismatch {
                features: features.nrows(),
                labels: labels.len(),
            });
        }

        Ok(Self { features, labels })
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// Keeps the row order: the first rows train, the last `test_size` share tests.
    pub fn train_test_split(&self, test_size: f64) -> Result<(Self, Self)> {
        if !(test_size > 0.0 && test_size < 1.0) {
            return Err(ClassifierError::InvalidParameter {
                name: "test_size",
                value: test_size,
                reason: "must be between 0 and 1",
            });
        }

        let n_samples = self.n_samples();
        let n_test = (n_samples as f64 * test_size).round() as usize;
        let n_train = n_samples - n_test;

        let train_features = self.features.slice(s![..n_train, ..]).to_owned();
        let train_labels = self.labels.slice(s![..n_train]).to_owned();

        let test_features = self.features.slice(s![n_train.., ..]).to_owned();
        let test_labels = self.labels.slice(s![n_train..]).to_owned();

        let train_dataset = Dataset::new(train_features, train_labels)?;
        let test_dataset = Dataset::new(test_features, test_labels)?;

        Ok((train_dataset, test_dataset))
    }

    /// Isotropic Gaussian clusters, `n_per_blob` points around each center,
    /// shuffled together. The same seed always yields the same dataset.
    pub fn gaussian_blobs(
        blobs: &[(L, Vec<f64>)],
        n_per_blob: usize,
        std_dev: f64,
        seed: u64,
    ) -> Result<Self> {
        let n_features = blobs.first().map(|(_, center)| center.len()).unwrap_or(0);
        if n_per_blob == 0 || n_features == 0 {
            return Err(ClassifierError::EmptyInput);
        }
        if let Some((_, center)) = blobs.iter().find(|(_, center)| center.len() != n_features) {
            return Err(ClassifierError::FeatureMismatch {
                expected: n_features,
                found: center.len(),
            });
        }
        if !(std_dev >= 0.0) || !std_dev.is_finite() {
            return Err(ClassifierError::InvalidParameter {
                name: "std_dev",
                value: std_dev,
                reason: "must be non-negative and finite",
            });
        }
        let noise = Normal::new(0.0, std_dev).map_err(|_| ClassifierError::InvalidParameter {
            name: "std_dev",
            value: std_dev,
            reason: "must be non-negative and finite",
        })?;

        let mut rng = StdRng::seed_from_u64(seed);
        let n_samples = blobs.len() * n_per_blob;
        let mut features = Matrix::random_using((n_samples, n_features), noise, &mut rng);
        let mut labels = Vec::with_capacity(n_samples);

        for (b, (label, center)) in blobs.iter().enumerate() {
            let center = Array1::from(center.clone());
            let mut block = features.slice_mut(s![b * n_per_blob..(b + 1) * n_per_blob, ..]);
            for mut row in block.axis_iter_mut(Axis(0)) {
                row += &center;
            }
            labels.extend(std::iter::repeat(label.clone()).take(n_per_blob));
        }

        let mut order: Vec<usize> = (0..n_samples).collect();
        order.shuffle(&mut rng);

        let features = features.select(Axis(0), &order);
        let labels = order.iter().map(|&i| labels[i].clone()).collect::<Array1<L>>();
        Dataset::new(features, labels)
    }
}
