//! Shared helpers for pathlab benchmark suites.

use pathlab_kernel::graph::scenario::{Edge, Node, Scenario};

fn layer_node(layer: usize, slot: usize) -> String {
    format!("L{layer}_{slot}")
}

/// A layered graph: `S`, then `layers` layers of `width` nodes, then `G`.
///
/// Every node links to every node of the next layer. Weights cycle through
/// `1..=7` so cost-ordered strategies see real relaxations.
#[must_use]
pub fn layered_scenario(layers: usize, width: usize) -> Scenario {
    let layers = layers.max(1);
    let width = width.max(1);

    let mut nodes = vec![Node::new("S", "Start", 0, 0)];
    for layer in 0..layers {
        for slot in 0..width {
            let id = layer_node(layer, slot);
            nodes.push(Node::new(
                &id,
                &id,
                i32::try_from(layer + 1).unwrap_or(i32::MAX),
                i32::try_from(slot).unwrap_or(i32::MAX),
            ));
        }
    }
    nodes.push(Node::new("G", "Goal", i32::try_from(layers + 1).unwrap_or(i32::MAX), 0));

    let mut weight = 0u64;
    let mut next_weight = || {
        weight = weight % 7 + 1;
        weight
    };
    let mut edges = Vec::new();
    for slot in 0..width {
        edges.push(Edge::new("S", &layer_node(0, slot), next_weight()));
    }
    for layer in 1..layers {
        for from in 0..width {
            for to in 0..width {
                edges.push(Edge::new(
                    &layer_node(layer - 1, from),
                    &layer_node(layer, to),
                    next_weight(),
                ));
            }
        }
    }
    for slot in 0..width {
        edges.push(Edge::new(&layer_node(layers - 1, slot), "G", next_weight()));
    }

    Scenario::new(
        format!("layered-{layers}x{width}"),
        "synthetic benchmark graph",
        nodes,
        edges,
    )
}
