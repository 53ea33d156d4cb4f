//! Reference trackers: the bookkeeping each policy consults to pick a victim.
//!
//! - [`ArrivalQueue`] - Load order, for FIFO
//! - [`RecencyList`] - Last-use order over every page seen, for LRU
//! - [`FutureIndex`] - Next-use positions over the remaining trace, for Optimal

mod arrival;
mod future;
mod recency;

pub use arrival::ArrivalQueue;
pub use future::FutureIndex;
pub use recency::RecencyList;
