//! Proof module: canonical JSON and content hashing.
//!
//! Nothing in here knows about graphs; callers hand it bytes or `Serialize`
//! values.

pub mod canon;
pub mod hash;
pub mod hash_domain;
