//! `epi-agent`: agents and their registry.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`agent`]       | `Agent` (disease state + per-state clock), `PhaseDurations` |
//! | [`store`]       | `AgentStore`: id to agent registry, append-only           |
//!
//! Agents know nothing about the lattice beyond the `CellId` they occupy;
//! neighbor lookups go through `epi-lattice`.

pub mod agent;
pub mod store;


pub use agent::{Agent, PhaseDurations};
pub use store::AgentStore;
