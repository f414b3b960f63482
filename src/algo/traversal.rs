/*!
Depth-first search for augmenting paths in residual networks.

The search keeps an explicit last-in-first-out frontier of `(parent, node)` pairs.
A node is marked visited when it is *popped* (not when it is pushed), and its residual
neighbors are pushed in insertion order. Hence the most recently inserted neighbor is
explored first. This order decides which augmenting path is found, and with it which of
possibly several minimum cuts is reported, so it must not be replaced by a queue or a
recursive search.

Two modes share the same traversal:
- *search-to-sink* stops as soon as the sink has been visited,
- *full-reachability* exhausts the frontier and yields all nodes reachable via arcs with
  positive residual capacity.

Both produce a [`ParentMap`].
*/

use smallvec::SmallVec;
use stream_bitset::prelude::*;

use super::*;

/// Node sequence from source to sink of an augmenting path.
/// Augmenting paths are typically short, so they live on the stack.
pub type Path = SmallVec<[Node; 8]>;

/// Compact representation of `(predecessor, node)` used for the search frontier.
///
/// The absence of a predecessor is encoded by setting both tuple entries to the same node value.
pub type PredecessorOfNode = (Node, Node);

/// Spanning tree of a search in a residual network: every visited node together with the node
/// it was reached from. The root of the search has no parent.
#[derive(Debug, Clone)]
pub struct ParentMap {
    root: Node,
    visited: NodeBitSet,
    parents: Vec<Option<OptionalNode>>,
}

impl ParentMap {
    fn new(n: NumNodes, root: Node) -> Self {
        Self {
            root,
            visited: NodeBitSet::new(n),
            parents: vec![None; n as usize],
        }
    }

    fn visit(&mut self, u: Node, parent: Option<Node>) {
        self.visited.set_bit(u);
        self.parents[u as usize] = parent.and_then(OptionalNode::new);
    }

    /// Returns the node the search was started from
    pub fn root(&self) -> Node {
        self.root
    }

    /// Returns *true* if `u` was visited
    pub fn contains(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }

    /// Returns the node `u` was reached from. `None` if `u` is the root or was not visited.
    pub fn parent_of(&self, u: Node) -> Option<Node> {
        self.parents[u as usize].map(|p| p.get())
    }

    /// Returns the set of visited nodes
    pub fn visited(&self) -> &NodeBitSet {
        &self.visited
    }

    /// Returns an iterator over all visited nodes in ascending order
    pub fn visited_nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.visited.iter_set_bits()
    }

    /// Returns the number of visited nodes
    pub fn number_of_visited(&self) -> NumNodes {
        self.visited.cardinality() as NumNodes
    }

    /// Reconstructs the path from the root to `t` by following parent links backwards.
    /// Returns `None` if `t` was not visited.
    pub fn path_to(&self, t: Node) -> Option<Path> {
        if !self.contains(t) {
            return None;
        }

        let mut path = Path::new();
        let mut node = Some(t);
        while let Some(u) = node {
            path.push(u);
            node = self.parent_of(u);
        }
        path.reverse();

        debug_assert_eq!(path.first(), Some(&self.root));
        Some(path)
    }
}

/// Explicit-stack depth-first search over arcs with positive residual capacity.
///
/// Yields every node when it is visited together with its parent.
pub struct AugmentingPathSearch<'a, G>
where
    G: ResidualNetwork,
{
    graph: &'a G,
    parents: ParentMap,
    stack: Vec<PredecessorOfNode>,
    stop_at: Option<Node>,
}

impl<'a, G> AugmentingPathSearch<'a, G>
where
    G: ResidualNetwork,
{
    /// Creates a new search starting from `source`.
    /// ** Panics if `source >= n` **
    pub fn new(graph: &'a G, source: Node) -> Self {
        assert!(source < graph.number_of_nodes());
        Self {
            graph,
            parents: ParentMap::new(graph.number_of_nodes(), source),
            stack: vec![(source, source)],
            stop_at: None,
        }
    }

    /// Sets a stopper node. Once this node is visited, the iterator returns only None.
    pub fn set_stop_at(&mut self, stopper: Node) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper node. Once this node is visited, the iterator returns only None.
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Returns *true* if `u` was visited so far
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.parents.contains(u)
    }

    /// Runs the search to its end and returns the resulting parent map
    pub fn into_parent_map(mut self) -> ParentMap {
        self.by_ref().for_each(drop);
        self.parents
    }
}

impl<G> Iterator for AugmentingPathSearch<'_, G>
where
    G: ResidualNetwork,
{
    type Item = (Option<Node>, Node);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.stop_at.is_some_and(|t| self.parents.contains(t)) {
                return None;
            }

            let (p, u) = self.stack.pop()?;
            if self.parents.contains(u) {
                continue;
            }

            let parent = (p != u).then_some(p);
            self.parents.visit(u, parent);

            // an already visited node would be discarded when popped, so it is never pushed
            for arc in self.graph.residual_arcs_of(u) {
                if arc.residual_capacity() > 0 && !self.parents.contains(arc.head()) {
                    self.stack.push((u, arc.head()));
                }
            }

            return Some((parent, u));
        }
    }
}

/// Augmenting path searches provided directly on residual networks
pub trait AugmentingPathFinder: ResidualNetwork {
    /// Returns a lazy search starting at `source`.
    /// ** Panics if `source >= n` **
    fn augmenting_path_search(&self, source: Node) -> AugmentingPathSearch<'_, Self> {
        AugmentingPathSearch::new(self, source)
    }

    /// Searches from `source` until `sink` is visited or no further node can be reached.
    /// `sink` is contained in the returned map iff an augmenting path exists.
    /// ** Panics if `source >= n` **
    fn search_to_sink(&self, source: Node, sink: Node) -> ParentMap {
        self.augmenting_path_search(source)
            .stop_at(sink)
            .into_parent_map()
    }

    /// Computes all nodes reachable from `source` via arcs with positive residual capacity.
    /// ** Panics if `source >= n` **
    fn reachable_from(&self, source: Node) -> ParentMap {
        self.augmenting_path_search(source).into_parent_map()
    }

    /// Returns the augmenting path the search finds first or `None` if the sink is unreachable.
    /// ** Panics if `source >= n` **
    fn find_augmenting_path(&self, source: Node, sink: Node) -> Option<Path> {
        self.search_to_sink(source, sink).path_to(sink)
    }
}

impl<G> AugmentingPathFinder for G where G: ResidualNetwork {}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn diamond() -> ResidualGraph {
        //  / 1 \
        // 0     3
        //  \ 2 /
        build_graph(4, [(0, 1, 10), (0, 2, 10), (1, 3, 10), (2, 3, 10)]).unwrap()
    }

    #[test]
    fn last_inserted_neighbor_first() {
        let graph = diamond();

        let order = graph.augmenting_path_search(0).collect_vec();
        assert_eq!(
            order,
            vec![(None, 0), (Some(0), 2), (Some(2), 3), (Some(0), 1)]
        );

        let stopped = graph.augmenting_path_search(0).stop_at(3).collect_vec();
        assert_eq!(stopped, vec![(None, 0), (Some(0), 2), (Some(2), 3)]);

        let mut search = graph.augmenting_path_search(0);
        search.set_stop_at(2);
        assert_eq!(search.next(), Some((None, 0)));
        assert!(search.did_visit_node(0));
        assert!(!search.did_visit_node(2));
        assert_eq!(search.next(), Some((Some(0), 2)));
        assert!(search.did_visit_node(2));
        assert_eq!(search.next(), None);

        let parents = search.into_parent_map();
        assert!(parents.visited().get_bit(2));
        assert!(!parents.visited().get_bit(1));
        assert_eq!(parents.number_of_visited(), 2);
    }

    #[test]
    fn path_reconstruction() {
        let graph = diamond();
        let parents = graph.search_to_sink(0, 3);

        assert_eq!(parents.root(), 0);
        assert!(parents.contains(3));
        assert!(!parents.contains(1));
        assert_eq!(parents.parent_of(0), None);
        assert_eq!(parents.parent_of(3), Some(2));
        assert_eq!(parents.path_to(3).unwrap().as_slice(), &[0, 2, 3]);
        assert!(parents.path_to(1).is_none());

        assert_eq!(graph.find_augmenting_path(1, 3).unwrap().as_slice(), &[1, 3]);
        assert!(graph.find_augmenting_path(3, 0).is_none());
    }

    #[test]
    fn parent_is_last_pusher() {
        // 1 is pushed by 0 first and by 2 later; the later push is popped first
        let graph = build_graph(4, [(0, 1, 1), (0, 2, 1), (2, 1, 1), (1, 3, 1)]).unwrap();
        let parents = graph.reachable_from(0);
        assert_eq!(parents.parent_of(1), Some(2));
        assert_eq!(parents.path_to(3).unwrap().as_slice(), &[0, 2, 1, 3]);
    }

    #[test]
    fn saturated_arcs_are_skipped() {
        let mut graph = build_graph(4, [(0, 1, 2), (1, 2, 0), (0, 3, 1)]).unwrap();

        let reachable = graph.reachable_from(0);
        assert_eq!(reachable.visited_nodes().collect_vec(), vec![0, 1, 3]);
        assert_eq!(reachable.number_of_visited(), 3);

        graph.push(0, 1, 2);
        let reachable = graph.reachable_from(0);
        assert_eq!(reachable.visited_nodes().collect_vec(), vec![0, 3]);

        // the reverse arc (1, 0) now has residual capacity
        let reachable = graph.reachable_from(1);
        assert_eq!(reachable.visited_nodes().collect_vec(), vec![0, 1, 3]);
        assert_eq!(reachable.parent_of(3), Some(0));
    }

    #[test]
    fn source_is_sink() {
        let graph = diamond();
        let parents = graph.search_to_sink(0, 0);
        assert_eq!(parents.visited_nodes().collect_vec(), vec![0]);
        assert_eq!(parents.path_to(0).unwrap().as_slice(), &[0]);
    }

    #[test]
    fn self_loops_are_ignored() {
        let graph = build_graph(2, [(0, 0, 5), (0, 1, 1)]).unwrap();
        assert_eq!(
            graph.augmenting_path_search(0).collect_vec(),
            vec![(None, 0), (Some(0), 1)]
        );
    }

    #[test]
    #[should_panic]
    fn source_out_of_range() {
        diamond().reachable_from(4);
    }
}
