//! Pathlab Search: a stepwise graph-search engine.
//!
//! One engine instance owns one search. Each call to
//! [`engine::SearchEngine::step`] performs exactly one node expansion and
//! returns a read-only [`state::SearchState`] snapshot for a presentation
//! layer to render.
//!
//! # Crate dependency graph
//!
//! ```text
//! pathlab_kernel  ←  pathlab_search  ←  pathlab_harness
//! (scenarios,        (frontier,          (driver, step cap,
//!  hashing)           engine)             explanations)
//! ```
//!
//! # Key types
//!
//! - [`strategy::Strategy`]: BFS, DFS, UCS or Dijkstra
//! - [`frontier::Frontier`]: per-strategy frontier backing structure
//! - [`engine::SearchEngine`]: the `create` / `step` state machine
//! - [`state::SearchState`]: the snapshot returned after every step
//! - [`transcript::SearchTranscript`]: per-expansion audit log

#![forbid(unsafe_code)]

pub mod engine;
pub mod error;
pub mod frontier;
pub mod state;
pub mod strategy;
pub mod transcript;
