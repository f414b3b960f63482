/*!
# Flow Algorithms

This module provides the **augmenting path search** and the **Ford–Fulkerson** maximum flow /
minimum cut computation built on top of [`ResidualNetwork`](crate::ops::ResidualNetwork)s.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use uflow::algo::*;
```
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

mod network_flow;
mod traversal;

use crate::prelude::*;

pub use network_flow::*;
pub use traversal::*;
