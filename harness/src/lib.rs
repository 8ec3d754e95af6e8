//! Pathlab Harness: drives search engines the way a presentation layer would.
//!
//! The harness owns the loop; the engine owns the state. A run constructs a
//! fresh engine, steps it until it is solved, exhausted, or the policy's step
//! cap is hit, and summarizes the result as a [`runner::RunReport`].
//!
//! The explanation boundary ([`explain`]) lives here too. It is optional and
//! nothing in the search path depends on it.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod explain;
pub mod policy;
pub mod runner;
