//! Example: weighted Damerau-Levenshtein distances between name pairs.
//!
//! Run with:
//! `cargo run --example compare`

use std::cmp::Ordering;

use damerau_dp::{DistanceEngine, DistanceEngineBuilder};

fn main() {
    let pairs = [
        ("O'Callaghan", "OCallaghan"),
        ("Thom", "Mira"),
        ("Oldeboom", "Ven"),
        ("пионер", "поинер"),
    ];

    for (a, b) in pairs {
        let mut engine = DistanceEngine::new(a, b);
        println!(
            "{a:>12} vs {b:<12} distance={} max={} relative={:.4}",
            engine.similarity(),
            engine.maximal_distance(),
            engine.relative_distance()
        );
    }

    // Make transpositions expensive and watch the swap turn into two substitutions.
    let mut engine = DistanceEngine::new("qw", "wq");
    println!("\nqw vs wq, unit costs: {}", engine.similarity());
    if let Err(err) = engine.set_transpose_cost(3) {
        eprintln!("rejected cost: {err}");
        return;
    }
    println!("qw vs wq, transpose=3: {}", engine.similarity());

    // Case-blind comparison through an injected comparator.
    let case_blind = |a: char, b: char| -> Ordering {
        a.to_lowercase().cmp(b.to_lowercase())
    };
    match DistanceEngineBuilder::new("enV", "Ven")
        .comparator(case_blind)
        .build()
    {
        Ok(mut engine) => {
            println!("\nenV vs Ven, case-blind: {}", engine.similarity());
            print!("{}", engine.display_matrix());
        }
        Err(err) => eprintln!("invalid costs: {err}"),
    }
}
