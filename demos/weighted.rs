//! Example: how per-operation costs change the chosen edit path.
//!
//! Run with:
//! `cargo run --example weighted`

use editpath::{DistanceEngine, DistanceEngineBuilder};

fn main() {
    // Under unit costs a single substitution is cheapest.
    let unit = DistanceEngine::new("A", "B");
    report("unit costs", &unit);

    // Priced-out substitution: the path goes through the empty word.
    let weighted = DistanceEngineBuilder::new("A", "B").replace_cost(100).build();
    report("replace cost 100", &weighted);
}

fn report(label: &str, engine: &DistanceEngine) {
    let steps: Vec<String> = engine.transformation().collect();
    println!(
        "{label}: distance {} via {:?}",
        engine.minimal_distance(),
        steps
    );
}
