//! Per-run access statistics.

use std::fmt;

use crate::replacer::Access;

/// Counters collected while a replacer processes a reference string.
///
/// `faults` always equals the replacer's own fault count; `evictions` only
/// counts faults that displaced a resident page, so
/// `faults - evictions` is the number of cold fills.
///
/// # Example
/// ```
/// use pagesim::AccessStats;
///
/// let stats = AccessStats {
///     hits: 3,
///     faults: 9,
///     evictions: 6,
/// };
/// assert_eq!(stats.references(), 12);
/// assert_eq!(stats.hit_rate(), 0.25);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessStats {
    /// References that found their page resident.
    pub hits: u64,

    /// References that had to load their page.
    pub faults: u64,

    /// Faults that replaced a resident page.
    pub evictions: u64,
}

impl AccessStats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one access outcome into the counters.
    pub fn record(&mut self, access: &Access) {
        match access {
            Access::Hit { .. } => self.hits += 1,
            Access::Fault { evicted, .. } => {
                self.faults += 1;
                if evicted.is_some() {
                    self.evictions += 1;
                }
            }
        }
    }

    /// Total references processed.
    pub fn references(&self) -> u64 {
        self.hits + self.faults
    }

    /// Fraction of references that hit (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.references();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Fraction of references that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        let total = self.references();
        if total == 0 {
            0.0
        } else {
            self.faults as f64 / total as f64
        }
    }
}

impl fmt::Display for AccessStats {
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
