/*!
`uflow` computes **maximum flows** and **minimum cuts** on directed graphs that are
- **u**nlabelled and **u**nsigned : Nodes are numbered `0` to `n - 1`
- capacitated : Every input edge carries a non-negative integer capacity

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`; an input edge with its capacity is
a [`CapacitatedEdge`](crate::edge::CapacitatedEdge).

Flow is stored in a [`ResidualGraph`](crate::repr::ResidualGraph). Every push along an arc `(u, v)`
also updates the reverse arc `(v, u)`, which is created with capacity `0` the first time it is
needed. The flow on an arc is thus always the negated flow on its reverse arc and may become
negative on arcs that were not part of the input.

# Design

The Ford–Fulkerson algorithm is provided as the configurable iterator
[`FordFulkerson`](crate::algo::FordFulkerson) that yields one augmentation at a time.
The most common functionality is also available via the [`MaxFlow`](crate::algo::MaxFlow) trait
that is implemented on every residual network:

```rust
use uflow::{prelude::*, algo::*};

let mut graph = build_graph(4, [(0, 1, 10), (0, 2, 10), (1, 3, 10), (2, 3, 10)]).unwrap();
assert_eq!(graph.max_flow(0, 3), 20);
assert_eq!(graph.min_cut(0), vec![Edge(0, 1), Edge(0, 2)]);
```

# Usage

- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations and the residual graph,
- [`algo`] includes the augmenting path search and the maximum flow / minimum cut computation,
- [`gens`] includes random flow network generators,
- [`io`] includes readers and writers for flow networks and flow results.

In most use-cases, `use uflow::{prelude::*, algo::*};` suffices for your needs.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

/// `uflow::prelude` includes definitions for nodes, edges and errors, all basic graph operation traits as well as the residual graph.
pub mod prelude {
    pub use super::{
        edge::*,
        error::{FlowError, MalformedGraph},
        node::*,
        ops::*,
        repr::*,
    };
}
