/*!
# Flow Network Generators

Random capacitated directed graphs, mainly used to test flow algorithms against
brute-force solutions.

Generators follow a builder-style pattern:

1. Create a generator instance (e.g., `RandomFlowNetwork::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).edges(m)`).
3. Generate edges via `generate()` or `stream()`.
*/

use fxhash::FxHashSet;
use rand::Rng;

use crate::prelude::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the number of edges.
pub trait NumEdgesGen {
    /// Sets the number of edges in the graph generator.
    fn edges(self, m: NumEdges) -> Self;
}

/// General trait for a configurable random flow network generator.
pub trait FlowNetworkGenerator {
    /// Generates a list of random capacitated edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<CapacitatedEdge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = CapacitatedEdge>
    where
        R: Rng;

    /// Generates a residual graph with all generated edges
    fn build<R>(&self, rng: &mut R) -> ResidualGraph
    where
        R: Rng;
}

/// Generator for random flow networks with `n` nodes and at most `m` edges.
///
/// `m` endpoint pairs are sampled uniformly. Loops, pairs that were already sampled and (unless
/// enabled) pairs whose reverse was already sampled are discarded, so the generated network is a
/// valid input for [`ResidualGraph::try_from_edges`] with possibly less than `m` edges.
/// Capacities are drawn uniformly from `0..=max_capacity`.
#[derive(Debug, Copy, Clone)]
pub struct RandomFlowNetwork {
    n: NumNodes,
    m: NumEdges,
    max_capacity: Capacity,
    antiparallel: bool,
}

impl Default for RandomFlowNetwork {
    fn default() -> Self {
        Self {
            n: 0,
            m: 0,
            max_capacity: 1,
            antiparallel: true,
        }
    }
}

impl RandomFlowNetwork {
    /// Creates a new generator without nodes and edges
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the largest capacity an edge can receive
    pub fn max_capacity(mut self, max_capacity: Capacity) -> Self {
        assert!(max_capacity >= 0);
        self.max_capacity = max_capacity;
        self
    }

    /// Allows or forbids that both `(u, v)` and `(v, u)` are generated
    pub fn antiparallel(mut self, antiparallel: bool) -> Self {
        self.antiparallel = antiparallel;
        self
    }
}

impl NumNodesGen for RandomFlowNetwork {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl NumEdgesGen for RandomFlowNetwork {
    fn edges(mut self, m: NumEdges) -> Self {
        self.m = m;
        self
    }
}

impl FlowNetworkGenerator for RandomFlowNetwork {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = CapacitatedEdge>
    where
        R: Rng,
    {
        assert!(self.n > 0 || self.m == 0);

        let mut sampled: FxHashSet<Edge> = FxHashSet::default();
        (0..self.m).filter_map(move |_| {
            let u = rng.random_range(0..self.n);
            let v = rng.random_range(0..self.n);
            let capacity = rng.random_range(0..=self.max_capacity);

            let edge = Edge(u, v);
            if edge.is_loop()
                || sampled.contains(&edge)
                || (!self.antiparallel && sampled.contains(&edge.reverse()))
            {
                return None;
            }

            sampled.insert(edge);
            Some(CapacitatedEdge(u, v, capacity))
        })
    }

    fn build<R>(&self, rng: &mut R) -> ResidualGraph
    where
        R: Rng,
    {
        match ResidualGraph::try_from_edges(self.n, self.stream(rng)) {
            Ok(graph) => graph,
            Err(err) => unreachable!("generated invalid network: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn generated_networks_are_valid() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [1 as NumNodes, 2, 10, 50] {
            for m in [0, n, n * 5] {
                for antiparallel in [false, true] {
                    let edges = RandomFlowNetwork::new()
                        .nodes(n)
                        .edges(m)
                        .max_capacity(7)
                        .antiparallel(antiparallel)
                        .generate(rng);

                    assert!(edges.len() <= m as usize);
                    assert!(edges.iter().all(|e| e.0 < n && e.1 < n && e.0 != e.1));
                    assert!(edges.iter().all(|e| (0..=7).contains(&e.capacity())));
                    assert!(edges.iter().map(|e| e.edge()).all_unique());

                    if !antiparallel {
                        assert!(
                            edges
                                .iter()
                                .map(|e| e.edge().min(e.edge().reverse()))
                                .all_unique()
                        );
                    }

                    assert!(ResidualGraph::try_from_edges(n, edges).is_ok());
                }
            }
        }
    }

    #[test]
    fn build() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);
        let graph = RandomFlowNetwork::new().nodes(20).edges(100).build(rng);
        assert_eq!(graph.number_of_nodes(), 20);
        assert!(graph.number_of_edges() > 0);
        assert_eq!(graph.number_of_edges(), graph.number_of_original_edges());
    }
}
