use logistic_sgd::{ClassRegistry, LogisticClassifier};
use ndarray::array;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or("LOGISTIC_SGD_LOG", "debug"),
    )
    .init();

    println!("=== Warm Start Example ===\n");

    // Feature: hours studied, label: exam outcome
    let hours = array![[1.0], [2.0], [3.0], [4.0], [5.0], [6.0], [7.0], [8.0]];
    let outcome = array!["fail", "fail", "fail", "pass", "pass", "pass", "pass", "pass"];

    let classes = ClassRegistry::from_labels(&outcome.to_vec())?;
    println!("Classes: {:?} -> 0/1 {:?}", classes.classes(), classes.encode(&outcome));

    let mut model = LogisticClassifier::new()
        .random_state(3)
        .stop_iter(5)
        .stop_tol(0.0);
    model.fit(&hours, &outcome)?;
    println!("\nAfter {} epochs:\n{}", model.n_iter(), model);

    // Same width, so training picks up from the current parameters.
    let mut model = model.stop_iter(50);
    model.fit(&hours, &outcome)?;
    println!("\nAfter {} more epochs:\n{}", model.n_iter(), model);

    let json = serde_json::to_string(&model)?;
    println!("\nSerialized model: {}", json);

    let restored: LogisticClassifier<String> = serde_json::from_str(&json)?;
    let predictions = restored.predict(&array![[2.5], [5.5], [9.0]])?;
    println!("Restored model predicts: {:?}", predictions);

    Ok(())
}
