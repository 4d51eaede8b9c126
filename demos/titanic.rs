//! The Titanic toy example: two passengers with known fate, one to classify.
//!
//! Run with `RUST_LOG=qsdc=debug` to see each pipeline stage.

use qsdc::{
    ClassifierError, ClassifierInput, FeatureScale, Label, Prediction, RawRecord, Simulator, exact_class_probabilities,
    preprocess, preprocess_labeled,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ClassifierError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("--- qsdc Example: Squared-Distance Classifier (4 bits) ---");

    // Ticket price and cabin number.
    let scale = FeatureScale::TITANIC;
    let survived = preprocess_labeled(&RawRecord::labeled(8500.0, 910.0, Label::One), &scale)?;
    let died = preprocess_labeled(&RawRecord::labeled(1200.0, 2105.0, Label::Zero), &scale)?;
    let (query, _) = preprocess(&RawRecord::unlabeled(7800.0, 1121.0), &scale)?;

    println!("\nPassenger 1: {}", survived);
    println!("Passenger 2: {}", died);
    println!("Passenger 3: {}, label=?", query);

    let input = ClassifierInput::new(survived, died, query);
    let simulator = Simulator::new().with_shots(10_000).with_seed(2024);

    let state = simulator.prepare_state(&input)?;
    println!("\nState after Hadamard on aux bit:\n  {}", state);

    let (exact_one, exact_zero) = exact_class_probabilities(&state)?;
    println!("Exact p(label=1): {:.4}, p(label=0): {:.4}", exact_one, exact_zero);

    let result = simulator.run(&input)?;
    println!("\n{}", result);
    println!(
        "Discarded (aux=1): {} ({:.1}%)",
        result.shots - result.retained,
        100.0 * (1.0 - result.acceptance_rate())
    );

    match result.prediction {
        Prediction::Label(Label::One) => println!("\n>>> Prediction for passenger 3: SURVIVED"),
        Prediction::Label(Label::Zero) => println!("\n>>> Prediction for passenger 3: DIED"),
        Prediction::Undecidable => println!("\n>>> No shots survived post-selection; increase the shot count"),
    }

    Ok(())
}
