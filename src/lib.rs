//! Weighted edit distance with step-by-step transformation replay.
//!
//! Given two words and a table of per-operation costs (insert, delete,
//! substitute), [`DistanceEngine`] computes the minimum total cost of
//! turning the first word into the second, and
//! [`DistanceEngine::transformation`] replays one cheapest edit path as
//! the full sequence of intermediate words, one edit at a time.
//!
//! ## Quick start
//! ```
//! use editpath::DistanceEngine;
//!
//! let engine = DistanceEngine::new("qwerty", "etz");
//! assert_eq!(engine.minimal_distance(), 4);
//!
//! let steps: Vec<String> = engine.transformation().collect();
//! assert_eq!(steps, ["qwerty", "qwertz", "qwetz", "qetz", "etz"]);
//! ```
//!
//! ## Weighted costs
//! Costs are fixed per engine; set them with [`CostTable`] or through the
//! [`DistanceEngineBuilder`]:
//! ```
//! use editpath::DistanceEngineBuilder;
//!
//! let engine = DistanceEngineBuilder::new("A", "B").replace_cost(100).build();
//! // Substitution is priced out, so delete plus insert wins.
//! assert_eq!(engine.minimal_distance(), 2);
//! ```
//!
//! The distance table is filled lazily, once per engine, and shared by
//! all queries and walks. Engines are single-threaded by construction;
//! give each thread its own engine.

pub mod builder;
pub mod costs;
pub mod engine;
pub mod utils;
pub mod walk;

pub use crate::builder::DistanceEngineBuilder;
pub use crate::costs::CostTable;
pub use crate::engine::DistanceEngine;
pub use crate::walk::Transformation;
