//! `epi-sim`: the simulation engine.
//!
//! # Synchronous step
//!
//! ```text
//! for tick in 1..=config.steps:
//!   ① transmission  snapshot who is infectious, then for every Susceptible
//!                   agent run one Bernoulli(lam) trial per infectious
//!                   neighbor; queue the agent if any trial succeeds
//!   ② advance       apply queued S→A conversions, then run the A→Sy and
//!                   Sy→R clocks of every agent not converted this step
//!   ③ influx        place new Susceptible agents in random empty cells
//!   ④ aggregate     verify invariants, count agents per state
//! ```
//!
//! Phase ① only reads, so an agent infected this step cannot transmit until
//! the next one.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use epi_core::EpiConfig;
//! use epi_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::seeded(EpiConfig::default()).build()?;
//! let series = sim.run(&mut NoopObserver)?;
//! println!("final: {}", series.last().unwrap());
//! ```

pub mod builder;
pub mod counts;
pub mod error;
pub mod network;
pub mod observer;
pub mod sim;
pub mod snapshot;


pub use builder::SimBuilder;
pub use counts::{StateCounts, TimeSeries};
pub use error::{SimError, SimResult};
pub use network::{DiseaseParams, Network};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use snapshot::{CellState, LatticeSnapshot};
