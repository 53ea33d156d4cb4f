//! Fault statistics for a simulation run.

use std::fmt;

/// Counters accumulated over one run.
///
/// Every reference is either a hit or a fault; evictions are the subset of
/// faults that had to replace a resident page.
///
/// # Example
/// ```
/// use pagesim::FaultStats;
///
/// let stats = FaultStats { hits: 7, faults: 3, evictions: 1 };
/// assert_eq!(stats.references(), 10);
/// assert_eq!(stats.hit_rate(), 0.7);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaultStats {
    /// References to a page that was already resident.
    pub hits: u64,

    /// References to a page that was not resident.
    pub faults: u64,

    /// Faults that displaced a resident page.
    pub evictions: u64,
}

impl FaultStats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total references seen.
    pub fn references(&self) -> u64 {
        self.hits + self.faults
    }

    /// Hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        match self.references() {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }

    /// Fault rate (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        match self.references() {
            0 => 0.0,
            total => self.faults as f64 / total as f64,
        }
    }
}

impl fmt::Display for FaultStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.hits,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = FaultStats::new();
        assert_eq!(stats.references(), 0);
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.fault_rate(), 0.0);
    }

    #[test]
    fn test_stats_rates() {
        let stats = FaultStats {
            hits: 3,
            faults: 1,
            evictions: 0,
        };
        assert_eq!(stats.hit_rate(), 0.75);
        assert_eq!(stats.fault_rate(), 0.25);
    }

    #[test]
    fn test_stats_display() {
        let stats = FaultStats {
            hits: 80,
            faults: 20,
            evictions: 5,
        };
        let display = format!("{}", stats);

        assert!(display.contains("hits: 80"));
        assert!(display.contains("faults: 20"));
        assert!(display.contains("80.00%"));
    }
}
