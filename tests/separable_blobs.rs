use logistic_sgd::report::{decision_boundary, loss_curves};
use logistic_sgd::{ClassifierError, Dataset, LogisticClassifier, LossHistory, TrainConfig};
use ndarray::{Array1, array};

fn blobs(seed: u64) -> Dataset<&'static str> {
    let centers = vec![("A", vec![0.0, 0.0]), ("B", vec![5.0, 5.0])];
    Dataset::gaussian_blobs(&centers, 20, 0.5, seed).unwrap()
}

#[test]
fn separable_clusters_reach_zero_training_error() {
    let data = blobs(2024);
    let config = TrainConfig::default();

    let mut model = LogisticClassifier::from_config(&config).random_state(17);
    model.fit(&data.features, &data.labels).unwrap();

    assert!(model.n_iter() <= config.stop_iter + 1);
    assert_eq!(model.history().len(), model.n_iter());
    assert_eq!(model.history().last_error_rate(), Some(0.0));
    assert_eq!(model.err(&data.features, &data.labels).unwrap(), 0.0);
    assert_eq!(model.score(&data.features, &data.labels).unwrap(), 1.0);

    let held_out = array![[10.0, 10.0], [-5.0, -5.0]];
    let predictions = model.predict(&held_out).unwrap();
    assert_eq!(predictions, array!["B", "A"]);
}

#[test]
fn single_epoch_run_records_one_entry() {
    let data = blobs(1);
    let mut model = LogisticClassifier::new().random_state(4).stop_iter(0);
    model.fit(&data.features, &data.labels).unwrap();

    assert_eq!(model.n_iter(), 1);
    assert_eq!(model.history().len(), 1);
    assert_eq!(model.history().error_rate.len(), 1);
}

#[test]
fn epoch_count_never_exceeds_cap() {
    let data = blobs(3);
    for stop_iter in [0, 1, 5, 20] {
        let mut model = LogisticClassifier::new()
            .random_state(stop_iter as u64)
            .stop_iter(stop_iter);
        model.fit(&data.features, &data.labels).unwrap();
        assert!(model.n_iter() <= stop_iter + 1);
        assert!(model.n_iter() >= 1);
    }
}

#[test]
fn retraining_continues_from_learned_parameters() {
    let data = blobs(5);
    let mut model = LogisticClassifier::new().random_state(8);
    model.fit(&data.features, &data.labels).unwrap();
    let learned = model.theta.clone().unwrap();

    let mut model = model.init_step(1e-8).stop_iter(0);
    model.fit(&data.features, &data.labels).unwrap();
    let continued = model.theta.as_ref().unwrap();

    let max_shift = learned
        .iter()
        .zip(continued.iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max);
    assert!(max_shift < 1e-4);
    assert_eq!(
        model.predict(&data.features).unwrap(),
        model.predict(&data.features).unwrap()
    );
}

#[test]
fn rejected_labels_leave_model_untouched() {
    let data = blobs(6);
    let mut model = LogisticClassifier::new().random_state(2);
    model.fit(&data.features, &data.labels).unwrap();
    let theta = model.theta.clone();
    let history = model.history().clone();

    let three_classes: Array1<&str> = data
        .labels
        .iter()
        .enumerate()
        .map(|(i, &label)| if i == 0 { "C" } else { label })
        .collect();
    assert!(matches!(
        model.fit(&data.features, &three_classes),
        Err(ClassifierError::ClassCount { found: 3 })
    ));

    let too_short = data.labels.slice(ndarray::s![..10]).to_owned();
    assert!(matches!(
        model.fit(&data.features, &too_short),
        Err(ClassifierError::ShapeMismatch { .. })
    ));

    assert_eq!(model.theta, theta);
    assert_same_history(model.history(), &history);
}

// Saturated epochs record NaN, so compare bit patterns rather than values.
fn assert_same_history(actual: &LossHistory, expected: &LossHistory) {
    assert_eq!(actual.len(), expected.len());
    assert_eq!(actual.error_rate, expected.error_rate);
    for (a, b) in actual.surrogate.iter().zip(expected.surrogate.iter()) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn report_data_follows_trained_model() {
    let data = blobs(9);
    let mut model = LogisticClassifier::new().random_state(1);
    model.fit(&data.features, &data.labels).unwrap();

    let theta = model.theta.as_ref().unwrap();
    let boundary = decision_boundary(theta, -1.0, 6.0, 50).unwrap();
    assert_eq!(boundary.len(), 50);

    let curves = loss_curves(model.history());
    assert_eq!(curves.len(), model.n_iter());
    assert!(curves.iter().all(|point| point.surrogate >= 0.0 || point.surrogate.is_nan()));
}
