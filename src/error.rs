//! Error types shared by graph construction and the flow algorithms.

use thiserror::Error;

use crate::{edge::*, node::*};

/// Shorthand for results of fallible flow operations
pub type Result<T> = std::result::Result<T, FlowError>;

/// Everything that can go wrong when building a residual graph or computing a flow on it.
///
/// Not finding an augmenting path is *not* an error: it is how the main loop terminates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    /// The input graph is invalid. Raised by construction before any flow is pushed.
    #[error("malformed graph: {0}")]
    MalformedGraph(#[from] MalformedGraph),

    /// An arc was queried or pushed along that does not exist in the residual graph.
    ///
    /// Only the `try_*` accessors return this; everything else treats it as a broken
    /// invariant and panics.
    #[error("no arc {0} in residual graph")]
    NoSuchArc(Edge),

    /// A budget on the number of augmentations was configured and an augmenting path
    /// still existed after spending it.
    #[error("augmentation budget of {budget} exhausted after pushing {flow} units of flow")]
    BudgetExhausted {
        /// Configured number of augmentations
        budget: usize,
        /// Flow pushed up to this point
        flow: Capacity,
    },
}

/// The ways an input edge list can be rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedGraph {
    /// An endpoint is not in `0..number_of_nodes`
    #[error("edge {edge} references a node outside of 0..{number_of_nodes}")]
    NodeOutOfRange {
        /// The offending edge
        edge: Edge,
        /// Number of nodes of the graph
        number_of_nodes: NumNodes,
    },

    /// Capacities must be non-negative
    #[error("edge {edge} has negative capacity {capacity}")]
    NegativeCapacity {
        /// The offending edge
        edge: Edge,
        /// Its capacity
        capacity: Capacity,
    },

    /// The same `(u, v)` pair was supplied twice
    #[error("edge {0} occurs more than once")]
    DuplicateEdge(Edge),

    /// The capacities of all edges sum up to more than `Capacity::MAX`.
    /// Any flow or residual capacity is bounded by this sum, so rejecting such graphs
    /// keeps all flow arithmetic in range.
    #[error("adding edge {edge} with capacity {capacity} overflows the total capacity")]
    CapacityOverflow {
        /// The offending edge
        edge: Edge,
        /// Its capacity
        capacity: Capacity,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err: FlowError = MalformedGraph::DuplicateEdge(Edge(1, 2)).into();
        assert_eq!(err.to_string(), "malformed graph: edge (1,2) occurs more than once");

        let err = FlowError::MalformedGraph(MalformedGraph::NodeOutOfRange {
            edge: Edge(0, 7),
            number_of_nodes: 4,
        });
        assert!(err.to_string().contains("0..4"));

        let err = FlowError::BudgetExhausted { budget: 3, flow: 12 };
        assert!(err.to_string().contains("budget of 3"));
        assert!(err.to_string().contains("12 units"));

        let err: FlowError = MalformedGraph::CapacityOverflow {
            edge: Edge(2, 3),
            capacity: 5,
        }
        .into();
        assert!(err.to_string().contains("overflows the total capacity"));
    }
}
