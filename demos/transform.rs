//! Example: replay the cheapest transformation between two words.
//!
//! Run with:
//! `cargo run --example transform`

use editpath::DistanceEngine;

fn main() {
    let engine = DistanceEngine::new("qwerty", "etz");

    println!("Distance: {}", engine.minimal_distance());
    println!("Steps:");
    for word in engine.transformation() {
        println!("  {word}");
    }
}
