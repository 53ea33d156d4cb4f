//! pagesim - A page replacement simulator with swappable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Simulation (simulation/)                    │   │
//! │  │     Simulator::run / run_with  +  compare (threads)      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Replacement Policies (policy/)                  │   │
//! │  │            FIFO  |  LRU  |  Optimal                      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Reference Trackers (tracker/)                  │   │
//! │  │   ArrivalQueue  |  RecencyList  |  FutureIndex           │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Physical Memory (memory/)                      │   │
//! │  │              FrameTable + FaultStats                     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`memory`] - Frame table and fault statistics
//! - [`tracker`] - Per-policy bookkeeping used to choose victims
//! - [`policy`] - Replacement policy implementations
//! - [`simulation`] - Driving policies over reference traces
//!
//! # Quick Start
//! ```
//! use pagesim::{simulate, to_trace, PolicyKind};
//!
//! let trace = to_trace(&[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1]);
//!
//! let result = simulate(PolicyKind::Optimal, 3, &trace).unwrap();
//! assert_eq!(result.faults(), 9);
//! ```

pub mod common;
pub mod memory;
pub mod policy;
pub mod simulation;
pub mod tracker;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_FRAME_COUNT, DEFAULT_TRACE};
pub use common::{Error, FrameId, PageId, Result};

pub use memory::{FaultStats, FrameTable};
pub use policy::{AccessOutcome, FifoPolicy, LruPolicy, OptimalPolicy, PolicyKind, ReplacementPolicy};
pub use simulation::{
    compare, parse_trace, simulate, to_trace, AccessEvent, SimulationResult, Simulator,
};
