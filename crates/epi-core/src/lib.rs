//! `epi-core`: foundational types for the lattice epidemic simulator.
//!
//! This crate is a dependency of every other `epi-*` crate.  It
//! has no `epi-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `CellId`                                   |
//! | [`time`]        | `Tick`                                                |
//! | [`disease`]     | `DiseaseState` enum                                   |
//! | [`topology`]    | `Boundary`, `Neighborhood`                            |
//! | [`config`]      | `EpiConfig` and its validation                        |
//! | [`rng`]         | `RandomSource` trait, `SimRng`                        |
//! | [`error`]       | `EpiError`, `EpiResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types (JSON config) |

pub mod config;
pub mod disease;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod topology;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::EpiConfig;
pub use disease::DiseaseState;
pub use error::{EpiError, EpiResult};
pub use ids::{AgentId, CellId};
pub use rng::{RandomSource, SimRng};
pub use time::Tick;
pub use topology::{Boundary, Neighborhood};
