/*!
# Maximum Flow and Minimum Cut

Ford–Fulkerson augmenting-path algorithm on [`ResidualNetwork`]s.

## Core concepts
- An **augmenting path** is a path from source to sink in the residual network along which every
  arc has positive residual capacity. Its **bottleneck** is the smallest residual capacity on it.
- The algorithm repeatedly searches for an augmenting path (see [`AugmentingPathFinder`]) and pushes
  the bottleneck along it until the sink becomes unreachable.
- Afterwards, the nodes reachable from the source form one side of a **minimum cut**. The cut edges
  are the saturated input edges leaving this side; their capacities sum up to the maximum flow.

## Implementations
- [`FordFulkerson`] is an iterator over the performed [`Augmentation`]s and optionally limits
  the number of augmentations.
- [`MaxFlow`] provides `max_flow` and `min_cut` directly on residual networks.

As augmenting paths are found by a depth-first search, the running time depends on the capacities.
Integer capacities guarantee termination after at most `total capacity out of the source`
augmentations; use [`FordFulkerson::max_augmentations`] for untrusted inputs.
*/

use itertools::Itertools;
use tracing::{debug, trace, warn};

use super::*;
use crate::error::{FlowError, Result};

/// A single augmentation step: `bottleneck` units were pushed along `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Augmentation {
    /// Nodes of the augmenting path from source to sink
    pub path: Path,
    /// Flow pushed along the path
    pub bottleneck: Capacity,
}

/// States of the main loop
#[derive(Debug, Clone, PartialEq, Eq)]
enum FlowState {
    /// Next step searches for an augmenting path
    Searching,
    /// An augmenting path was found and is pushed in the next step
    Augmenting(Path),
    /// No augmenting path exists anymore; terminal
    Done,
}

/// Implementation of the Ford–Fulkerson algorithm with depth-first augmenting path search.
///
/// Each iteration performs one augmentation and returns it. The iterator terminates when the
/// sink is no longer reachable from the source in the residual network, after which the
/// flow stored in the residual network is maximum.
pub struct FordFulkerson<'a, G>
where
    G: ResidualNetwork,
{
    graph: &'a mut G,
    source: Node,
    sink: Node,
    state: FlowState,
    total_flow: Capacity,
    augmentations: usize,
    max_augmentations: Option<usize>,
}

impl<'a, G> FordFulkerson<'a, G>
where
    G: ResidualNetwork,
{
    /// Creates a new solver pushing flow from `source` to `sink` in `graph`.
    /// Flow already present in `graph` is kept and augmented.
    /// ** Panics if `source >= n || sink >= n` **
    pub fn new(graph: &'a mut G, source: Node, sink: Node) -> Self {
        assert!(source < graph.number_of_nodes());
        assert!(sink < graph.number_of_nodes());

        Self {
            graph,
            source,
            sink,
            // a path without arcs has no bottleneck; the degenerate case carries no flow
            state: if source == sink {
                FlowState::Done
            } else {
                FlowState::Searching
            },
            total_flow: 0,
            augmentations: 0,
            max_augmentations: None,
        }
    }

    /// Limits the number of augmentations [`FordFulkerson::try_run`] performs.
    /// `None` removes the limit.
    pub fn set_max_augmentations(&mut self, max_augmentations: Option<usize>) {
        self.max_augmentations = max_augmentations;
    }

    /// Chainable version of [`Self::set_max_augmentations`].
    pub fn max_augmentations(mut self, max_augmentations: Option<usize>) -> Self {
        self.set_max_augmentations(max_augmentations);
        self
    }

    /// Returns the flow pushed so far
    pub fn total_flow(&self) -> Capacity {
        self.total_flow
    }

    /// Returns the number of augmentations performed so far
    pub fn number_of_augmentations(&self) -> usize {
        self.augmentations
    }

    /// Returns *true* once no augmenting path is left
    pub fn is_done(&self) -> bool {
        self.state == FlowState::Done
    }

    /// Returns the residual network the flow is computed on
    pub fn graph_ref(&self) -> &G {
        &*self.graph
    }

    /// Runs the search step if the last step was an augmentation
    fn search(&mut self) {
        if self.state != FlowState::Searching {
            return;
        }

        self.state = match self.graph.find_augmenting_path(self.source, self.sink) {
            Some(path) => FlowState::Augmenting(path),
            None => {
                debug!(
                    source = self.source,
                    sink = self.sink,
                    flow = self.total_flow,
                    augmentations = self.augmentations,
                    "no augmenting path left"
                );
                FlowState::Done
            }
        };
    }

    /// Pushes the bottleneck along `path` and returns the corresponding augmentation
    fn augment(&mut self, path: Path) -> Augmentation {
        let bottleneck = path
            .iter()
            .tuple_windows()
            .map(|(&u, &v)| self.graph.residual_capacity(u, v))
            .min()
            .unwrap_or(0);
        debug_assert!(bottleneck > 0);

        for (&u, &v) in path.iter().tuple_windows() {
            self.graph.push(u, v, bottleneck);
        }

        self.total_flow += bottleneck;
        self.augmentations += 1;
        trace!(len = path.len(), bottleneck, flow = self.total_flow, "augmented");

        Augmentation { path, bottleneck }
    }

    /// Runs the algorithm until no augmenting path is left and returns the total flow pushed.
    /// Ignores any configured limit on the number of augmentations.
    pub fn run(mut self) -> Capacity {
        self.by_ref().for_each(drop);
        self.total_flow
    }

    /// Runs the algorithm until no augmenting path is left and returns the total flow pushed.
    ///
    /// # Errors
    /// Fails with [`FlowError::BudgetExhausted`] if a limit on the number of augmentations was
    /// configured and an augmenting path still exists after reaching it. The flow pushed up to
    /// this point remains in the residual network.
    pub fn try_run(mut self) -> Result<Capacity> {
        loop {
            let exhausted = self
                .max_augmentations
                .filter(|&budget| self.augmentations >= budget);

            if let Some(budget) = exhausted {
                self.search();
                if self.is_done() {
                    return Ok(self.total_flow);
                }

                warn!(budget, flow = self.total_flow, "augmentation budget exhausted");
                return Err(FlowError::BudgetExhausted {
                    budget,
                    flow: self.total_flow,
                });
            }

            if self.next().is_none() {
                return Ok(self.total_flow);
            }
        }
    }
}

impl<G> Iterator for FordFulkerson<'_, G>
where
    G: ResidualNetwork,
{
    type Item = Augmentation;

    fn next(&mut self) -> Option<Self::Item> {
        self.search();

        match std::mem::replace(&mut self.state, FlowState::Searching) {
            FlowState::Augmenting(path) => Some(self.augment(path)),
            FlowState::Done => {
                self.state = FlowState::Done;
                None
            }
            FlowState::Searching => unreachable!("search() always leaves the searching state"),
        }
    }
}

/// Maximum flow and minimum cut computations on residual networks.
pub trait MaxFlow: ResidualNetwork {
    /// Pushes a maximum flow from `source` to `sink` and returns its value.
    /// `source == sink` is allowed and yields `0`.
    /// ** Panics if `source >= n || sink >= n` **
    fn max_flow(&mut self, source: Node, sink: Node) -> Capacity {
        FordFulkerson::new(self, source, sink).run()
    }

    /// Same as [`MaxFlow::max_flow`] but gives up after `max_augmentations` augmentations.
    ///
    /// # Errors
    /// See [`FordFulkerson::try_run`].
    fn try_max_flow(
        &mut self,
        source: Node,
        sink: Node,
        max_augmentations: Option<usize>,
    ) -> Result<Capacity> {
        FordFulkerson::new(self, source, sink)
            .max_augmentations(max_augmentations)
            .try_run()
    }

    /// Returns the edges of a minimum cut separating `source` from the sink of a previously
    /// computed maximum flow, sorted lexicographically.
    ///
    /// The source side consists of all nodes reachable from `source` in the residual network.
    /// A cut edge is a saturated input edge with positive capacity leaving the source side.
    /// Only meaningful after [`MaxFlow::max_flow`] ran to completion on the same graph.
    /// ** Panics if `source >= n` **
    fn min_cut(&self, source: Node) -> Vec<Edge> {
        let reachable = self.reachable_from(source);

        let cut = reachable
            .visited_nodes()
            .flat_map(|u| self.residual_arcs_of(u))
            .filter(|arc| {
                !reachable.contains(arc.head())
                    && arc.is_saturated()
                    && arc.is_original()
                    && arc.capacity() > 0
            })
            .map(|arc| Edge(arc.tail(), arc.head()))
            .sorted()
            .collect_vec();

        debug!(
            source,
            reachable = reachable.number_of_visited(),
            cut_edges = cut.len(),
            "extracted minimum cut"
        );

        cut
    }
}

impl<G> MaxFlow for G where G: ResidualNetwork {}

/// Pushes a maximum flow from `source` to `sink` through `graph` and returns its value.
///
/// Shorthand for [`MaxFlow::max_flow`].
pub fn max_flow<G: ResidualNetwork>(graph: &mut G, source: Node, sink: Node) -> Capacity {
    graph.max_flow(source, sink)
}

/// Returns the sorted edges of a minimum cut after [`max_flow`] completed on `graph`.
///
/// Shorthand for [`MaxFlow::min_cut`].
pub fn min_cut<G: ResidualNetwork>(graph: &G, source: Node) -> Vec<Edge> {
    graph.min_cut(source)
}
