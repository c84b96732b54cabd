//! Mapping between arbitrary class labels and the canonical 0/1 encoding.
//!
//! A [`ClassRegistry`] is built once from the training labels and fixes which
//! label is the negative class (index 0) and which is the positive class
//! (index 1). Labels are sorted ascending, so the smaller label is always the
//! negative class.
//!
//! ```rust
//! use logistic_sgd::labels::ClassRegistry;
//! use ndarray::array;
//!
//! let y = array!["spam", "ham", "spam"];
//! let classes = ClassRegistry::from_labels(y.as_slice().unwrap()).unwrap();
//!
//! assert_eq!(classes.negative(), &"ham");
//! assert_eq!(classes.encode(&y), array![1.0, 0.0, 1.0]);
//! ```

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::{ClassifierError, Result};
use crate::{Matrix, Vector};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassRegistry<L> {
    classes: [L; 2],
}

impl<L: Clone + PartialOrd> ClassRegistry<L> {
    /// Collects the distinct labels, sorted ascending.
    ///
    /// Fails unless there are exactly two of them. Counting stops at the third
    /// distinct label, so `ClassCount` reports at most 3.
    pub fn from_labels(labels: &[L]) -> Result<Self> {
        let uniques = unique_sorted(labels)?;
        if uniques.len() != 2 {
            return Err(ClassifierError::ClassCount {
                found: uniques.len(),
            });
        }

        let mut uniques = uniques.into_iter();
        match (uniques.next(), uniques.next()) {
            (Some(negative), Some(positive)) => Ok(Self {
                classes: [negative, positive],
            }),
            _ => Err(ClassifierError::ClassCount { found: 0 }),
        }
    }

    pub fn negative(&self) -> &L {
        &self.classes[0]
    }

    pub fn positive(&self) -> &L {
        &self.classes[1]
    }

    pub fn classes(&self) -> &[L; 2] {
        &self.classes
    }

    /// 0 for the negative class, 1 for anything else.
    pub fn to_index(&self, label: &L) -> usize {
        if *label == self.classes[0] { 0 } else { 1 }
    }

    pub fn from_index(&self, index: usize) -> &L {
        if index == 0 {
            &self.classes[0]
        } else {
            &self.classes[1]
        }
    }

    pub fn encode(&self, labels: &Array1<L>) -> Vector {
        labels.map(|label| self.to_index(label) as f64)
    }

    pub fn decode(&self, indices: &Array1<usize>) -> Array1<L> {
        indices.map(|&index| self.from_index(index).clone())
    }

    /// One indicator column per class.
    pub fn to_one_of_k(&self, labels: &Array1<L>) -> Matrix {
        let mut encoded = Matrix::zeros((labels.len(), 2));
        for (i, label) in labels.iter().enumerate() {
            encoded[[i, self.to_index(label)]] = 1.0;
        }
        encoded
    }

    /// Row-wise argmax back to labels. Ties resolve to the negative class.
    pub fn from_one_of_k(&self, encoded: &Matrix) -> Result<Array1<L>> {
        if encoded.ncols() != 2 {
            return Err(ClassifierError::FeatureMismatch {
                expected: 2,
                found: encoded.ncols(),
            });
        }

        let indices = encoded
            .rows()
            .into_iter()
            .map(|row| if row[1] > row[0] { 1 } else { 0 })
            .collect::<Array1<usize>>();
        Ok(self.decode(&indices))
    }
}

fn unique_sorted<L: Clone + PartialOrd>(labels: &[L]) -> Result<Vec<L>> {
    let mut uniques: Vec<L> = Vec::new();
    for label in labels {
        if label.partial_cmp(label).is_none() {
            return Err(ClassifierError::IncomparableLabels);
        }
        if !uniques.contains(label) {
            uniques.push(label.clone());
            if uniques.len() > 2 {
                return Err(ClassifierError::ClassCount {
                    found: uniques.len(),
                });
            }
        }
    }

    let mut incomparable = false;
    uniques.sort_by(|a, b| {
        a.partial_cmp(b).unwrap_or_else(|| {
            incomparable = true;
            std::cmp::Ordering::Equal
        })
    });
    if incomparable {
        return Err(ClassifierError::IncomparableLabels);
    }

    Ok(uniques)
}
