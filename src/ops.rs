use std::ops::Range;

use itertools::Itertools;

use crate::{error::Result, prelude::*};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns a range of vertices.
    /// In contrast to self.vertices(), the range returned does not borrow self and hence may be
    /// used where additional mutable references of self are needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of arcs of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the out-neighborhood of a given vertex.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of outgoing neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over outgoing edges of a given vertex.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u).map(move |v| Edge(u, v))
    }

    /// Returns an iterator over all edges of the graph
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(|u| self.edges_of(u))
    }

    /// Returns all edges of the graph in lexicographic order
    fn ordered_edges(&self) -> Vec<Edge> {
        self.edges().sorted().collect_vec()
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.vertices().map(|u| self.degree_of(u)).max().unwrap_or(0)
    }
}

/// A residual network as required by augmenting-path algorithms.
///
/// The neighbors of a node are exactly the heads of its residual arcs, and both are reported
/// in the order the arcs were inserted. This order decides which augmenting path is found first.
pub trait ResidualNetwork: AdjacencyList {
    /// Returns the arcs leaving `u` in insertion order.
    /// ** Panics if `u >= n` **
    fn residual_arcs_of(&self, u: Node) -> impl Iterator<Item = ResidualArc> + '_;

    /// Returns `capacity(u, v) - flow(u, v)` or `FlowError::NoSuchArc` if the arc does not exist.
    fn try_residual_capacity(&self, u: Node, v: Node) -> Result<Capacity>;

    /// Pushes `amount` units along `(u, v)`: the flow on `(u, v)` grows by `amount` and the
    /// flow on `(v, u)` shrinks by `amount`, where `(v, u)` is created with capacity zero if it
    /// does not exist yet. Capacities are *not* checked.
    ///
    /// Returns `FlowError::NoSuchArc` if `(u, v)` does not exist.
    fn try_push(&mut self, u: Node, v: Node, amount: Capacity) -> Result<()>;

    /// Same as [`ResidualNetwork::try_residual_capacity`].
    /// ** Panics if the arc `(u, v)` does not exist **
    fn residual_capacity(&self, u: Node, v: Node) -> Capacity {
        match self.try_residual_capacity(u, v) {
            Ok(residual) => residual,
            Err(err) => panic!("{err}"),
        }
    }

    /// Same as [`ResidualNetwork::try_push`].
    /// ** Panics if the arc `(u, v)` does not exist **
    fn push(&mut self, u: Node, v: Node, amount: Capacity) {
        if let Err(err) = self.try_push(u, v, amount) {
            panic!("{err}");
        }
    }

    /// Returns the sum of flow on all arcs leaving `u`.
    ///
    /// As every push is mirrored on the reverse arc, this is zero for every node
    /// that is neither source nor sink of the computed flow.
    fn net_outflow(&self, u: Node) -> Capacity {
        self.residual_arcs_of(u).map(|arc| arc.flow()).sum()
    }
}
