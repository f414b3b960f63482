//! Graph representations that store a flow alongside the capacities.
//!
//! Currently there is a single representation, the arc arena [`ResidualGraph`].

mod residual;

pub use residual::*;
