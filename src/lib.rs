//! Damerau-Levenshtein edit distance with configurable operation costs.
//!
//! This crate computes the *restricted* Damerau-Levenshtein distance (also
//! known as optimal string alignment) between two Unicode strings. Each of the
//! four edit operations carries its own cost:
//! - insertion of a code point into the first string,
//! - deletion of a code point from the first string,
//! - substitution of one code point for another,
//! - transposition of two adjacent code points.
//!
//! ## Core idea
//! 1. Decode both inputs into code-point sequences.
//! 2. Fill a `(lenA+1) x (lenB+1)` dynamic-programming table once.
//! 3. Answer every query (distance, full table, relative distance, debug
//!    rendering) from that cached table, refilling it only after a cost or
//!    input change.
//!
//! ## Quick start
//! ```
//! use damerau_dp::DistanceEngine;
//!
//! let mut engine = DistanceEngine::new("qw", "wq");
//! assert_eq!(engine.similarity(), 1);
//! assert_eq!(engine.maximal_distance(), 2);
//! assert!((engine.relative_distance() - 0.5).abs() < 1e-12);
//! ```
//!
//! Costs can be tuned per operation:
//! ```
//! use damerau_dp::DistanceEngineBuilder;
//!
//! let mut engine = DistanceEngineBuilder::new("foo", "fooo")
//!     .insert_cost(2)
//!     .build()
//!     .unwrap();
//! assert_eq!(engine.similarity(), 2);
//! ```
//!
//! The engine is single-owner: queries take `&mut self` because they may
//! refill the cache.

pub mod builder;
pub mod costs;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod traits;
pub mod utils;

pub use crate::builder::DistanceEngineBuilder;
pub use crate::costs::{Cost, CostModel, EditOp};
pub use crate::engine::DistanceEngine;
pub use crate::error::EditError;
pub use crate::matrix::DistanceMatrix;
pub use crate::traits::{CharComparator, Ordinal};
pub use crate::utils::osa_distance;
