//! Scenario data: nodes, edges and the fixed example catalog.

pub mod catalog;
pub mod scenario;
