//! `epi-lattice`: the spatial substrate of the epidemic simulator.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`cell`]    | `Position`, `Cell`                                          |
//! | [`graph`]   | `LatticeGraph` (CSR adjacency + occupancy)                  |
//! | [`error`]   | `LatticeError`, `LatticeResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod cell;
pub mod error;
pub mod graph;


pub use cell::{Cell, Position};
pub use error::{LatticeError, LatticeResult};
pub use graph::LatticeGraph;
