//! Frontier-selection strategies.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which node the engine removes from the frontier next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Strategy {
    /// First in, first out.
    #[serde(rename = "BFS")]
    Bfs,
    /// Last in, first out.
    #[serde(rename = "DFS")]
    Dfs,
    /// Minimum path cost, goal-directed.
    #[serde(rename = "UCS")]
    Ucs,
    /// Minimum path cost. Selection is identical to UCS here; only the
    /// presentation differs.
    Dijkstra,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [Self::Bfs, Self::Dfs, Self::Ucs, Self::Dijkstra];

    /// Short identifier, also accepted by [`FromStr`].
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Ucs => "UCS",
            Self::Dijkstra => "Dijkstra",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Bfs => "Breadth-First Search",
            Self::Dfs => "Depth-First Search",
            Self::Ucs => "Uniform-Cost Search",
            Self::Dijkstra => "Dijkstra's Algorithm",
        }
    }

    /// Whether a cheaper route to a node still on the frontier replaces the
    /// recorded one. BFS and DFS keep the first discovery.
    #[must_use]
    pub const fn relaxes(self) -> bool {
        matches!(self, Self::Ucs | Self::Dijkstra)
    }

    /// Whether selection is by minimum path cost.
    #[must_use]
    pub const fn is_cost_ordered(self) -> bool {
        self.relaxes()
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy {0:?} (expected BFS, DFS, UCS or Dijkstra)")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}
