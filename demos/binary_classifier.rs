use logistic_sgd::report::{decision_boundary, loss_curves};
use logistic_sgd::{Dataset, LogisticClassifier, TrainConfig};
use ndarray::array;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or("LOGISTIC_SGD_LOG", "info"),
    )
    .init();

    println!("=== Binary Logistic Classifier Example ===\n");

    // Optional JSON config as the first argument, e.g. {"stop_iter": 200, "plot": true}
    let config = match std::env::args().nth(1) {
        Some(path) => TrainConfig::from_path(path)?,
        None => TrainConfig {
            plot: true,
            ..TrainConfig::default()
        },
    };
    println!("Config: {:?}", config);

    // Two clusters: "A" around (0, 0) and "B" around (5, 5)
    let blobs = vec![("A", vec![0.0, 0.0]), ("B", vec![5.0, 5.0])];
    let dataset = Dataset::gaussian_blobs(&blobs, 20, 0.5, 42)?;
    let (train_data, test_data) = dataset.train_test_split(0.25)?;

    println!("Training samples: {}", train_data.n_samples());
    println!("Test samples: {}", test_data.n_samples());

    let mut model = LogisticClassifier::from_config(&config).random_state(7);
    model.fit(&train_data.features, &train_data.labels)?;

    println!("\n{}", model);
    println!("Epochs: {}", model.n_iter());
    println!(
        "Training error: {:.3}",
        model.err(&train_data.features, &train_data.labels)?
    );
    println!(
        "Test accuracy: {:.2}%",
        model.score(&test_data.features, &test_data.labels)? * 100.0
    );

    let new_points = array![[10.0, 10.0], [-5.0, -5.0], [2.5, 2.4]];
    let predictions = model.predict(&new_points)?;
    let scores = model.decision_function(&new_points)?;
    println!("\nPredictions on new data:");
    for ((point, label), score) in new_points
        .rows()
        .into_iter()
        .zip(predictions.iter())
        .zip(scores.iter())
    {
        println!(
            "({:.1}, {:.1}) -> {} (response {:.3})",
            point[0], point[1], label, score
        );
    }

    if config.plot {
        if let Some(theta) = model.theta.as_ref() {
            let x0 = dataset.features.column(0);
            let x_min = x0.iter().cloned().fold(f64::INFINITY, f64::min);
            let x_max = x0.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

            println!("\nDecision boundary:");
            for (x0, x1) in decision_boundary(theta, x_min, x_max, 5)? {
                println!("  x0={:7.3}  x1={:7.3}", x0, x1);
            }
        }

        println!("\nLosses (epoch, |surrogate|, error rate):");
        for point in loss_curves(model.history()).iter().take(10) {
            println!("  {:4}  {:.6}  {:.3}", point.epoch, point.surrogate, point.error_rate);
        }
    }

    Ok(())
}
