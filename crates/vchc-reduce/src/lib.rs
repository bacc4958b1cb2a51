#![deny(missing_docs)]

//! Polynomial reduction from VERTEX-COVER to HAMILTONIAN-CIRCUIT.
//!
//! Every undirected source edge `{u, v}` becomes a twelve-node cover testing
//! component; the components incident to a vertex are threaded into one path
//! whose two ends link to each of the `k` selector nodes. The resulting
//! directed graph has a Hamiltonian circuit iff the source graph has a vertex
//! cover of size `k`. No search of either kind is performed here.

mod config;
mod params;
mod reducer;
mod session;

pub use config::ReductionConfig;
pub use params::check_parameters;
pub use reducer::{reduce, ReductionSummary, Reducer};
pub use session::ReductionSession;
