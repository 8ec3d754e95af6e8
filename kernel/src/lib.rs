//! Pathlab Kernel: scenario data and canonical hashing.
//!
//! # API Surface
//!
//! - [`graph::scenario::Scenario`] -- an immutable, validated search graph
//! - [`graph::catalog`] -- the fixed example scenarios
//! - [`proof::canon::canonical_json_bytes`] -- the single canonical JSON writer
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256
//!
//! # Module Dependency Direction
//!
//! `proof` <- `graph`
//!
//! One-way only. `graph` uses `proof` to content-address scenarios.
//! `proof` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod graph;
pub mod proof;
