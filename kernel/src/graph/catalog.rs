//! The fixed example scenarios.
//!
//! Each scenario is built fresh on request; callers own the result.

use std::str::FromStr;

use super::scenario::{Edge, Node, Scenario, ScenarioError};

/// Catalog entry selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScenarioKind {
    Standard,
    DeepNarrow,
    WideShallow,
    UniformCost,
    VariableCost,
}

impl ScenarioKind {
    /// All catalog entries in presentation order.
    pub const ALL: [ScenarioKind; 5] = [
        Self::Standard,
        Self::DeepNarrow,
        Self::WideShallow,
        Self::UniformCost,
        Self::VariableCost,
    ];

    /// Display name, also accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::DeepNarrow => "Deep & Narrow",
            Self::WideShallow => "Wide & Shallow",
            Self::UniformCost => "Uniform Cost",
            Self::VariableCost => "Variable Cost",
        }
    }

    #[must_use]
    pub fn scenario(self) -> Scenario {
        match self {
            Self::Standard => standard(),
            Self::DeepNarrow => deep_narrow(),
            Self::WideShallow => wide_shallow(),
            Self::UniformCost => uniform_cost(),
            Self::VariableCost => variable_cost(),
        }
    }
}

impl std::fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScenarioKind {
    type Err = ScenarioError;

    /// Case-insensitive; `&` may be written as `and`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|kind| normalize(kind.name()) == wanted)
            .ok_or_else(|| ScenarioError::UnknownScenario {
                name: s.to_string(),
            })
    }
}

fn normalize(name: &str) -> String {
    name.to_ascii_lowercase()
        .replace('&', "and")
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Every catalog scenario, in [`ScenarioKind::ALL`] order.
#[must_use]
pub fn catalog() -> Vec<Scenario> {
    ScenarioKind::ALL.iter().map(|k| k.scenario()).collect()
}

/// Look up a scenario by display name.
///
/// # Errors
///
/// Returns [`ScenarioError::UnknownScenario`] for an unrecognized name.
pub fn by_name(name: &str) -> Result<Scenario, ScenarioError> {
    name.parse::<ScenarioKind>().map(ScenarioKind::scenario)
}

fn standard() -> Scenario {
    Scenario::new(
        ScenarioKind::Standard.name(),
        "A balanced graph to demonstrate basic algorithm behavior.",
        vec![
            Node::new("S", "Start", 50, 100),
            Node::new("A", "A", 200, 50),
            Node::new("B", "B", 200, 150),
            Node::new("C", "C", 350, 50),
            Node::new("D", "D", 350, 150),
            Node::new("G", "Goal", 500, 100),
        ],
        vec![
            Edge::new("S", "A", 2),
            Edge::new("S", "B", 5),
            Edge::new("A", "C", 3),
            Edge::new("A", "D", 8),
            Edge::new("B", "D", 4),
            Edge::new("C", "G", 6),
            Edge::new("D", "G", 2),
        ],
    )
}

fn deep_narrow() -> Scenario {
    Scenario::new(
        ScenarioKind::DeepNarrow.name(),
        "Deep tree where DFS might find a deep solution fast, while BFS explores layers.",
        vec![
            Node::new("S", "Start", 50, 100),
            Node::new("A", "A", 150, 50),
            Node::new("A1", "A1", 250, 30),
            Node::new("A2", "A2", 350, 20),
            Node::new("B", "B", 150, 150),
            Node::new("B1", "B1", 250, 170),
            Node::new("B2", "B2", 350, 180),
            Node::new("B3", "B3", 450, 190),
            Node::new("G", "Goal", 550, 200),
        ],
        vec![
            Edge::new("S", "A", 1),
            Edge::new("A", "A1", 1),
            Edge::new("A1", "A2", 1),
            Edge::new("S", "B", 1),
            Edge::new("B", "B1", 1),
            Edge::new("B1", "B2", 1),
            Edge::new("B2", "B3", 1),
            Edge::new("B3", "G", 1),
        ],
    )
}

fn wide_shallow() -> Scenario {
    Scenario::new(
        ScenarioKind::WideShallow.name(),
        "High branching factor at root. BFS must visit many nodes at layer 1.",
        vec![
            Node::new("S", "Start", 50, 125),
            Node::new("A", "A", 250, 25),
            Node::new("B", "B", 250, 75),
            Node::new("C", "C", 250, 125),
            Node::new("D", "D", 250, 175),
            Node::new("E", "E", 250, 225),
            Node::new("G", "Goal", 450, 125),
        ],
        vec![
            Edge::new("S", "A", 1),
            Edge::new("S", "B", 1),
            Edge::new("S", "C", 1),
            Edge::new("S", "D", 1),
            Edge::new("S", "E", 1),
            Edge::new("A", "G", 10),
            Edge::new("B", "G", 10),
            Edge::new("C", "G", 10),
            Edge::new("D", "G", 10),
            Edge::new("E", "G", 1),
        ],
    )
}

fn uniform_cost() -> Scenario {
    Scenario::new(
        ScenarioKind::UniformCost.name(),
        "All weights are 1. BFS and UCS should produce identical results.",
        vec![
            Node::new("S", "Start", 50, 100),
            Node::new("A", "A", 200, 50),
            Node::new("B", "B", 200, 150),
            Node::new("C", "C", 350, 50),
            Node::new("D", "D", 350, 150),
            Node::new("G", "Goal", 500, 100),
        ],
        vec![
            Edge::new("S", "A", 1),
            Edge::new("S", "B", 1),
            Edge::new("A", "C", 1),
            Edge::new("B", "D", 1),
            Edge::new("C", "G", 1),
            Edge::new("D", "G", 1),
        ],
    )
}

fn variable_cost() -> Scenario {
    Scenario::new(
        ScenarioKind::VariableCost.name(),
        "BFS will choose the 'shorter' path (S-A-G), but UCS finds the 'cheaper' path (S-B-C-D-G).",
        vec![
            Node::new("S", "Start", 50, 100),
            Node::new("A", "A", 250, 40),
            Node::new("B", "B", 150, 160),
            Node::new("C", "C", 300, 180),
            Node::new("D", "D", 450, 160),
            Node::new("G", "Goal", 500, 80),
        ],
        vec![
            Edge::new("S", "A", 10),
            Edge::new("A", "G", 10),
            Edge::new("S", "B", 1),
            Edge::new("B", "C", 1),
            Edge::new("C", "D", 1),
            Edge::new("D", "G", 1),
        ],
    )
}
