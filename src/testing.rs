//! Assertions shared by the flow tests.

use itertools::Itertools;

use crate::prelude::*;

/// Asserts that `flow` leaves `s`, enters `t` and is conserved at every other node
pub fn assert_conservation(graph: &ResidualGraph, s: Node, t: Node, flow: Capacity) {
    for u in graph.vertices() {
        let expected = if s == t {
            0
        } else if u == s {
            flow
        } else if u == t {
            -flow
        } else {
            0
        };
        assert_eq!(graph.net_outflow(u), expected, "net outflow of node {u}");
    }
}

/// Asserts conservation and that the flow pairs up on every arc and its reverse
pub fn assert_flow_invariants(graph: &ResidualGraph, s: Node, t: Node, flow: Capacity) {
    assert_conservation(graph, s, t, flow);

    for Edge(u, v) in graph.edges() {
        let forward = graph.flow(u, v).unwrap();
        match graph.flow(v, u) {
            Some(backward) => assert_eq!(forward, -backward, "flow on ({u},{v})"),
            None => assert_eq!(forward, 0, "flow on ({u},{v}) without reverse arc"),
        }
        assert!(graph.residual_capacity(u, v) >= 0);
    }
}

/// Asserts `0 <= flow <= capacity` on every input edge.
/// Only holds if the input contains no antiparallel edges.
pub fn assert_capacities_respected(graph: &ResidualGraph) {
    for CapacitatedEdge(u, v, capacity) in graph.original_edges() {
        let flow = graph.flow(u, v).unwrap();
        assert!(
            (0..=capacity).contains(&flow),
            "flow {flow} on ({u},{v}) with capacity {capacity}"
        );
    }
}

/// Returns the sum of input capacities of the given edges
pub fn cut_capacity(graph: &ResidualGraph, cut: &[Edge]) -> Capacity {
    cut.iter()
        .map(|&Edge(u, v)| {
            let arc = graph.arc(u, v).unwrap();
            assert!(arc.is_original());
            arc.capacity()
        })
        .sum()
}

/// Returns *true* if `t` cannot be reached from `s` via input edges with positive capacity
/// after removing all edges in `cut`
pub fn separates(graph: &ResidualGraph, cut: &[Edge], s: Node, t: Node) -> bool {
    let mut adj = vec![Vec::new(); graph.len()];
    for CapacitatedEdge(u, v, capacity) in graph.original_edges() {
        if capacity > 0 && !cut.contains(&Edge(u, v)) {
            adj[u as usize].push(v);
        }
    }

    let mut visited = graph.vertex_bitset_unset();
    let mut stack = vec![s];
    visited.set_bit(s);
    while let Some(u) = stack.pop() {
        for &v in &adj[u as usize] {
            if !visited.get_bit(v) {
                visited.set_bit(v);
                stack.push(v);
            }
        }
    }

    !visited.get_bit(t)
}

/// Enumerates all `(s, t)` cuts and returns the smallest capacity.
/// Exponential in the number of nodes; only use on tiny graphs.
pub fn brute_force_min_cut(graph: &ResidualGraph, s: Node, t: Node) -> Capacity {
    assert_ne!(s, t);
    assert!(graph.number_of_nodes() <= 16);

    let others = graph.vertices().filter(|&u| u != s && u != t).collect_vec();
    let edges = graph.original_edges().collect_vec();

    (0u32..(1 << others.len()))
        .map(|mask| {
            let mut source_side = graph.vertex_bitset_unset();
            source_side.set_bit(s);
            for (i, &u) in others.iter().enumerate() {
                if (mask >> i) & 1 == 1 {
                    source_side.set_bit(u);
                }
            }

            edges
                .iter()
                .filter(|e| source_side.get_bit(e.0) && !source_side.get_bit(e.1))
                .map(|e| e.capacity())
                .sum::<Capacity>()
        })
        .min()
        .unwrap_or(0)
}
