use std::fmt::{Debug, Display};

use crate::node::Node;

/// An edge is defined by two nodes/endpoints.
/// Edges are always directed from `self.0` to `self.1`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of arcs to `2^32 - 1`.
/// Note that every input edge may create one additional reverse arc.
pub type NumEdges = u32;

/// Capacities and flow values.
///
/// Signed, as flow on a lazily created reverse arc is allowed to drop below zero.
pub type Capacity = i64;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// A directed edge `(u, v)` together with its capacity as supplied by the input.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CapacitatedEdge(pub Node, pub Node, pub Capacity);

impl CapacitatedEdge {
    /// Drops the capacity
    pub fn edge(&self) -> Edge {
        Edge(self.0, self.1)
    }

    /// Returns the capacity of the edge
    pub fn capacity(&self) -> Capacity {
        self.2
    }
}

impl Display for CapacitatedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{};{})", self.0, self.1, self.2)
    }
}

impl Debug for CapacitatedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<(Node, Node, Capacity)> for CapacitatedEdge {
    fn from(value: (Node, Node, Capacity)) -> Self {
        CapacitatedEdge(value.0, value.1, value.2)
    }
}

impl From<&(Node, Node, Capacity)> for CapacitatedEdge {
    fn from(value: &(Node, Node, Capacity)) -> Self {
        CapacitatedEdge(value.0, value.1, value.2)
    }
}

impl From<&CapacitatedEdge> for CapacitatedEdge {
    fn from(value: &CapacitatedEdge) -> Self {
        *value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_order_lexicographically() {
        let mut edges = vec![Edge(2, 0), Edge(0, 3), Edge(0, 1), Edge(1, 5)];
        edges.sort();
        assert_eq!(edges, vec![Edge(0, 1), Edge(0, 3), Edge(1, 5), Edge(2, 0)]);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Edge(3, 4)), "(3,4)");
        assert_eq!(format!("{:?}", CapacitatedEdge(3, 4, 7)), "(3,4;7)");
        assert_eq!(Edge(3, 4).reverse(), Edge(4, 3));
        assert!(Edge(2, 2).is_loop());
        assert_eq!(CapacitatedEdge::from((1, 2, 9)).edge(), Edge(1, 2));
    }
}
