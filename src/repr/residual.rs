/*!
# Residual Graph

An arena of arcs addressed by [`ArcId`]s. Every node keeps the ids of its outgoing arcs in
insertion order: first the arcs supplied by the input (in input order), then reverse arcs in the
order in which they were created by [`ResidualNetwork::push`].

An index maps `Edge(u, v)` to its arc so that the reverse arc of `(u, v)` can be found (or
created) without aliasing any arc.
*/

use fxhash::FxHashMap;

use crate::{
    error::{FlowError, MalformedGraph, Result},
    ops::*,
    prelude::*,
};

/// Handle of an arc inside a [`ResidualGraph`]
pub type ArcId = NumEdges;

/// A directed arc of a residual graph.
///
/// `capacity` is fixed at creation, `flow` changes with every push along the arc or its reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResidualArc {
    tail: Node,
    head: Node,
    capacity: Capacity,
    flow: Capacity,
    original: bool,
}

impl ResidualArc {
    /// Returns the node the arc starts at
    pub fn tail(&self) -> Node {
        self.tail
    }

    /// Returns the node the arc points to
    pub fn head(&self) -> Node {
        self.head
    }

    /// Returns the capacity of the arc. Reverse arcs that were created during the
    /// computation have capacity `0`.
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Returns the current flow on the arc. May be negative on reverse arcs.
    pub fn flow(&self) -> Capacity {
        self.flow
    }

    /// Returns `capacity - flow`
    pub fn residual_capacity(&self) -> Capacity {
        self.capacity - self.flow
    }

    /// Returns *true* if no further flow can be pushed along the arc
    pub fn is_saturated(&self) -> bool {
        self.residual_capacity() == 0
    }

    /// Returns *true* if the arc was supplied by the input (and not created as a reverse arc)
    pub fn is_original(&self) -> bool {
        self.original
    }
}

/// Residual graph of a capacitated directed graph
#[derive(Debug, Clone)]
pub struct ResidualGraph {
    arcs: Vec<ResidualArc>,
    out_arcs: Vec<Vec<ArcId>>,
    index: FxHashMap<Edge, ArcId>,
    number_of_original_arcs: NumEdges,
    total_capacity: Capacity,
}

/// Builds a residual graph with `n` nodes from an ordered sequence of `(u, v, capacity)` triples.
///
/// Shorthand for [`ResidualGraph::try_from_edges`].
pub fn build_graph<I, E>(n: NumNodes, edges: I) -> Result<ResidualGraph>
where
    I: IntoIterator<Item = E>,
    E: Into<CapacitatedEdge>,
{
    ResidualGraph::try_from_edges(n, edges)
}

impl ResidualGraph {
    /// Creates a residual graph with `n` nodes and no arcs
    pub fn new(n: NumNodes) -> Self {
        Self {
            arcs: Vec::new(),
            out_arcs: vec![Vec::new(); n as usize],
            index: FxHashMap::default(),
            number_of_original_arcs: 0,
            total_capacity: 0,
        }
    }

    /// Builds a residual graph with `n` nodes from an ordered sequence of capacitated edges.
    ///
    /// # Errors
    /// Fails with [`FlowError::MalformedGraph`] if an endpoint is not in `0..n`, a capacity is
    /// negative, the same `(u, v)` pair is supplied more than once, or the capacities sum up
    /// to more than `Capacity::MAX`.
    pub fn try_from_edges<I, E>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<CapacitatedEdge>,
    {
        let mut graph = Self::new(n);
        for edge in edges {
            graph.try_add_edge(edge.into())?;
        }
        Ok(graph)
    }

    /// Adds an input edge. Must not be called after flow has been pushed.
    ///
    /// # Errors
    /// See [`ResidualGraph::try_from_edges`].
    pub fn try_add_edge(&mut self, edge: CapacitatedEdge) -> Result<()> {
        let CapacitatedEdge(u, v, capacity) = edge;
        let n = self.number_of_nodes();

        if u >= n || v >= n {
            return Err(MalformedGraph::NodeOutOfRange {
                edge: Edge(u, v),
                number_of_nodes: n,
            }
            .into());
        }

        if capacity < 0 {
            return Err(MalformedGraph::NegativeCapacity {
                edge: Edge(u, v),
                capacity,
            }
            .into());
        }

        if self.index.contains_key(&Edge(u, v)) {
            return Err(MalformedGraph::DuplicateEdge(Edge(u, v)).into());
        }

        // every flow value, residual capacity and flow total is bounded by this sum
        self.total_capacity = self.total_capacity.checked_add(capacity).ok_or(
            MalformedGraph::CapacityOverflow {
                edge: Edge(u, v),
                capacity,
            },
        )?;

        debug_assert_eq!(self.number_of_original_arcs as usize, self.arcs.len());
        self.insert_arc(u, v, capacity, true);
        self.number_of_original_arcs += 1;
        Ok(())
    }

    fn insert_arc(&mut self, u: Node, v: Node, capacity: Capacity, original: bool) -> ArcId {
        let id = self.arcs.len() as ArcId;
        self.arcs.push(ResidualArc {
            tail: u,
            head: v,
            capacity,
            flow: 0,
            original,
        });
        self.out_arcs[u as usize].push(id);
        self.index.insert(Edge(u, v), id);
        id
    }

    /// Returns the id of arc `(u, v)` if it exists
    pub fn arc_id(&self, u: Node, v: Node) -> Option<ArcId> {
        self.index.get(&Edge(u, v)).copied()
    }

    /// Returns the arc `(u, v)` if it exists
    pub fn arc(&self, u: Node, v: Node) -> Option<&ResidualArc> {
        self.arc_id(u, v).map(|id| &self.arcs[id as usize])
    }

    /// Returns the current flow on `(u, v)` if the arc exists
    pub fn flow(&self, u: Node, v: Node) -> Option<Capacity> {
        self.arc(u, v).map(ResidualArc::flow)
    }

    /// Returns the capacity of `(u, v)` if the arc exists
    pub fn capacity(&self, u: Node, v: Node) -> Option<Capacity> {
        self.arc(u, v).map(ResidualArc::capacity)
    }

    /// Returns the number of arcs supplied by the input
    pub fn number_of_original_edges(&self) -> NumEdges {
        self.number_of_original_arcs
    }

    /// Returns all input edges together with their capacity in input order
    pub fn original_edges(&self) -> impl Iterator<Item = CapacitatedEdge> + '_ {
        self.arcs[..self.number_of_original_arcs as usize]
            .iter()
            .map(|arc| CapacitatedEdge(arc.tail, arc.head, arc.capacity))
    }

    /// Removes all flow and all reverse arcs created while pushing flow.
    /// Afterwards, the graph is in the same state as right after construction.
    pub fn reset_flow(&mut self) {
        // input arcs are inserted before any reverse arc
        let first_reverse = self.number_of_original_arcs;
        for ids in &mut self.out_arcs {
            ids.retain(|&id| id < first_reverse);
        }
        self.index.retain(|_, id| *id < first_reverse);
        self.arcs.truncate(first_reverse as usize);
        self.arcs.iter_mut().for_each(|arc| arc.flow = 0);
    }
}

impl GraphNodeOrder for ResidualGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.out_arcs.len() as NumNodes
    }
}

impl GraphEdgeOrder for ResidualGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.arcs.len() as NumEdges
    }
}

impl AdjacencyList for ResidualGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.out_arcs[u as usize]
            .iter()
            .map(|&id| self.arcs[id as usize].head)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.out_arcs[u as usize].len() as NumNodes
    }
}

impl ResidualNetwork for ResidualGraph {
    fn residual_arcs_of(&self, u: Node) -> impl Iterator<Item = ResidualArc> + '_ {
        self.out_arcs[u as usize]
            .iter()
            .map(|&id| self.arcs[id as usize])
    }

    fn try_residual_capacity(&self, u: Node, v: Node) -> Result<Capacity> {
        self.arc(u, v)
            .map(ResidualArc::residual_capacity)
            .ok_or(FlowError::NoSuchArc(Edge(u, v)))
    }

    fn try_push(&mut self, u: Node, v: Node, amount: Capacity) -> Result<()> {
        debug_assert!(amount >= 0);
        let forward = self.arc_id(u, v).ok_or(FlowError::NoSuchArc(Edge(u, v)))?;
        self.arcs[forward as usize].flow += amount;

        let backward = match self.arc_id(v, u) {
            Some(id) => id,
            None => self.insert_arc(v, u, 0, false),
        };
        self.arcs[backward as usize].flow -= amount;

        Ok(())
    }
}
