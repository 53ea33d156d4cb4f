//! Page replacement policies.
//!
//! Currently implements:
//! - [`FifoPolicy`] - First-In-First-Out
//! - [`LruPolicy`] - Least Recently Used
//! - [`OptimalPolicy`] - Belady's clairvoyant algorithm
//!
//! Each policy owns its tracker and works against a [`FrameTable`] supplied
//! by the caller, one reference at a time.

mod fifo;
mod lru;
mod optimal;

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, FrameId, PageId, Result};
use crate::memory::FrameTable;

pub use fifo::FifoPolicy;
pub use lru::LruPolicy;
pub use optimal::OptimalPolicy;

/// What happened on a single reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The page was already resident.
    Hit,

    /// The page was not resident and was loaded into `frame`.
    ///
    /// `evicted` is the page it displaced, or `None` if the frame was empty.
    Fault {
        frame: FrameId,
        evicted: Option<PageId>,
    },
}

impl AccessOutcome {
    /// Whether the page was already resident.
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, AccessOutcome::Hit)
    }

    /// Whether the reference was a page fault.
    #[inline]
    pub fn is_fault(&self) -> bool {
        !self.is_hit()
    }

    /// The page evicted by this reference, if any.
    pub fn evicted(&self) -> Option<PageId> {
        match self {
            AccessOutcome::Hit => None,
            AccessOutcome::Fault { evicted, .. } => *evicted,
        }
    }
}

/// A page replacement algorithm.
///
/// On a miss the policy first tries an empty frame, and only when the table
/// is full picks a victim. Insertion and replacement never both happen for
/// the same reference.
pub trait ReplacementPolicy {
    /// Which algorithm this is.
    fn kind(&self) -> PolicyKind;

    /// Process one reference, updating `frames` and the policy's own state.
    ///
    /// # Errors
    /// Returns [`Error::InvariantViolation`] if the policy's bookkeeping has
    /// diverged from `frames`.
    fn access(&mut self, frames: &mut FrameTable, page: PageId) -> Result<AccessOutcome>;
}

/// Selector for one of the supported policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Fifo,
    Lru,
    Optimal,
}

impl PolicyKind {
    /// Every supported policy, in reporting order.
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Fifo, PolicyKind::Lru, PolicyKind::Optimal];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "First In First Out",
            PolicyKind::Lru => "Least Recently Used",
            PolicyKind::Optimal => "Optimal",
        }
    }

    /// Build fresh policy state for a run over `trace`.
    ///
    /// Only Optimal looks at the trace; it needs the whole future up front.
    pub fn build(&self, trace: &[PageId]) -> Box<dyn ReplacementPolicy> {
        match self {
            PolicyKind::Fifo => Box::new(FifoPolicy::new()),
            PolicyKind::Lru => Box::new(LruPolicy::new()),
            PolicyKind::Optimal => Box::new(OptimalPolicy::new(trace)),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "lru" => Ok(PolicyKind::Lru),
            "optimal" | "opt" => Ok(PolicyKind::Optimal),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let short = match self {
            PolicyKind::Fifo => "fifo",
            PolicyKind::Lru => "lru",
            PolicyKind::Optimal => "optimal",
        };
        write!(f, "{}", short)
    }
}
