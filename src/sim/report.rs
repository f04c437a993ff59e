//! Simulation results and their text rendering.

use std::fmt;

use crate::common::config::EMPTY_SLOT;
use crate::common::PageId;
use crate::replacer::Policy;
use crate::sim::AccessStats;

/// Result of running one policy over a reference string.
///
/// Rendered with `Display` in the two-line form the driver prints:
///
/// ```text
/// FIFO: 9 page faults
/// Final state of memory: 5 3 4
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub policy: Policy,

    /// Number of page faults.
    pub faults: u64,

    /// Final frame contents in the replacer's native order.
    pub frames: Vec<Option<PageId>>,

    /// Evicted pages in the order they were evicted.
    pub evictions: Vec<PageId>,

    pub stats: AccessStats,
}

impl Report {
    /// Frame contents as printed, empty frames shown as `-1`.
    pub fn render_frames(&self) -> String {
        self.frames
            .iter()
            .map(|slot| match slot {
                Some(page_id) => page_id.0.to_string(),
                None => EMPTY_SLOT.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Eviction history line, e.g. `Evicted pages: 1 2 3`.
    pub fn render_evictions(&self) -> String {
        if self.evictions.is_empty() {
            return "Evicted pages: none".to_string();
        }

        let pages = self
            .evictions
            .iter()
            .map(|page_id| page_id.0.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        format!("Evicted pages: {}", pages)
    }

    /// Page ids that are resident at the end of the run, in frame order.
    pub fn resident(&self) -> impl Iterator<Item = PageId> + '_ {
        self.frames.iter().flatten().copied()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {} page faults", self.policy, self.faults)?;
        write!(f, "Final state of memory: {}", self.render_frames())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> Report {
        Report {
            policy: Policy::Fifo,
            faults: 9,
            frames: vec![Some(PageId::new(5)), None, Some(PageId::new(4))],
            evictions: vec![PageId::new(1), PageId::new(2)],
            stats: AccessStats {
                hits: 3,
                faults: 9,
                evictions: 2,
            },
        }
    }

    #[test]
    fn test_report_display() {
        assert_eq!(
            format!("{}", report()),
            "FIFO: 9 page faults\nFinal state of memory: 5 -1 4"
        );
    }

    #[test]
    fn test_render_evictions() {
        let mut report = report();
        assert_eq!(report.render_evictions(), "Evicted pages: 1 2");

        report.evictions.clear();
        assert_eq!(report.render_evictions(), "Evicted pages: none");
    }

    #[test]
    fn test_resident_skips_empty_frames() {
        let resident: Vec<_> = report().resident().collect();
        assert_eq!(resident, vec![PageId::new(5), PageId::new(4)]);
    }
}
