//! Running policies over reference traces.
//!
//! - [`Simulator`] - Drives one policy over a trace, reporting each access
//! - [`compare`] - Runs several policies side by side on isolated state
//! - [`parse_trace`] - Reads a trace from text

mod simulator;
mod trace;

pub use simulator::{compare, simulate, AccessEvent, SimulationResult, Simulator};
pub use trace::{parse_trace, to_trace};
