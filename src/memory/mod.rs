//! Physical memory model.
//!
//! # Components
//! - [`FrameTable`] - Fixed set of frame slots, each holding one page
//! - [`FaultStats`] - Hit/fault counters for a run

mod frame_table;
mod stats;

pub use frame_table::FrameTable;
pub use stats::FaultStats;
