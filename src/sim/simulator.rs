//! Drives replacers over a reference string and collects their reports.

use std::thread;

use log::debug;
use parking_lot::Mutex;

use crate::common::{FrameCapacity, PageId, SimConfig};
use crate::replacer::{FifoReplacer, LruReplacer, Policy, Replacer};
use crate::sim::{AccessStats, Report};

/// Feed every reference to `replacer` in order and report the outcome.
///
/// The report's fault count and frames come from the replacer itself, so a
/// replacer that already processed references keeps its earlier faults;
/// pass a fresh (or reset) replacer to get per-run numbers.
pub fn simulate<R: Replacer>(replacer: &mut R, references: &[PageId]) -> Report {
    let mut stats = AccessStats::new();
    let mut evictions = Vec::new();

    for &page_id in references {
        let access = replacer.access(page_id);
        stats.record(&access);
        if let Some(victim) = access.evicted() {
            evictions.push(victim);
        }
    }

    debug!(
        "{} over {} references with {}: {}",
        replacer.policy(),
        references.len(),
        replacer.capacity(),
        stats
    );

    Report {
        policy: replacer.policy(),
        faults: replacer.faults(),
        frames: replacer.frames().to_vec(),
        evictions,
        stats,
    }
}

/// Runs one or more policies with a shared frame capacity.
///
/// # Usage
/// ```
/// use pagesim::{FrameCapacity, PageId, Policy, Simulator};
///
/// let refs: Vec<PageId> = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]
///     .into_iter()
///     .map(PageId::new)
///     .collect();
/// let sim = Simulator::new(FrameCapacity::new(3).unwrap());
///
/// let reports = sim.run_all(&Policy::ALL, &refs);
/// assert_eq!(reports[0].faults, 9); // FIFO
/// assert_eq!(reports[1].faults, 10); // LRU
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Simulator {
    capacity: FrameCapacity,
}

impl Simulator {
    pub fn new(capacity: FrameCapacity) -> Self {
        Self { capacity }
    }

    pub fn capacity(&self) -> FrameCapacity {
        self.capacity
    }

    /// Run a single policy on a fresh replacer.
    pub fn run_policy(&self, policy: Policy, references: &[PageId]) -> Report {
        match policy {
            Policy::Fifo => simulate(&mut FifoReplacer::new(self.capacity), references),
            Policy::Lru => simulate(&mut LruReplacer::new(self.capacity), references),
        }
    }

    /// Run each policy in turn, returning reports in the same order.
    pub fn run_all(&self, policies: &[Policy], references: &[PageId]) -> Vec<Report> {
        policies
            .iter()
            .map(|&policy| self.run_policy(policy, references))
            .collect()
    }

    /// Run each policy on its own thread.
    ///
    /// Replacers share nothing but the read-only reference slice, so the
    /// reports are identical to [`Simulator::run_all`] and come back in the
    /// same order.
    pub fn run_concurrent(&self, policies: &[Policy], references: &[PageId]) -> Vec<Report> {
        let results: Mutex<Vec<Option<Report>>> = Mutex::new(vec![None; policies.len()]);

        thread::scope(|scope| {
            for (idx, &policy) in policies.iter().enumerate() {
                let results = &results;
                scope.spawn(move || {
                    let report = self.run_policy(policy, references);
                    results.lock()[idx] = Some(report);
                });
            }
        });

        results.into_inner().into_iter().flatten().collect()
    }

    /// Run the policies named by `config`, sequentially or concurrently.
    pub fn run_config(config: &SimConfig, references: &[PageId]) -> Vec<Report> {
        let sim = Simulator::new(config.capacity);
        if config.parallel {
            sim.run_concurrent(&config.policies, references)
        } else {
            sim.run_all(&config.policies, references)
        }
    }
}
