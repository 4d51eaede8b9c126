//! How the sampled estimate approaches the exact class probability as the
//! shot count grows.

use qsdc::{ClassifierError, ClassifierInput, FeatureVector, Label, LabeledVector, Simulator, exact_class_probabilities};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ClassifierError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let input = ClassifierInput::new(
        LabeledVector::new(FeatureVector::new(0.921, 0.390), Label::One),
        LabeledVector::new(FeatureVector::new(0.141, 0.990), Label::Zero),
        FeatureVector::new(0.866, 0.500),
    );

    let base = Simulator::new().with_seed(1);
    let (exact_one, _) = exact_class_probabilities(&base.prepare_state(&input)?)?;
    println!("exact p(label=1) = {:.4}\n", exact_one);
    println!("{:>8}  {:>8}  {:>10}  {:>8}  prediction", "shots", "retained", "p(label=1)", "error");

    for shots in [1, 10, 100, 1_000, 10_000, 100_000] {
        let result = base.with_shots(shots).run(&input)?;
        println!(
            "{:>8}  {:>8}  {:>10.4}  {:>8.4}  {}",
            shots,
            result.retained,
            result.p_class_one,
            (result.p_class_one - exact_one).abs(),
            result.prediction
        );
    }
    Ok(())
}
