//! LRU (Least Recently Used) replacement policy.
//!
//! Each resident page carries the logical time of its last reference. On a
//! fault with every frame occupied, the frames are scanned left to right and
//! the page with the smallest timestamp is replaced. Timestamps are keyed by
//! page, not by frame, because the page living in a frame changes over time.

use std::collections::HashMap;

use log::trace;

use super::{find_frame, Access, Policy, Replacer};
use crate::common::{FrameCapacity, FrameId, PageId};

/// An LRU replacer using a linear scan for the oldest timestamp.
///
/// Frame positions carry no recency information; a faulting page lands in
/// the first empty frame, or in the frame of the page it evicts.
///
/// # Example
/// ```
/// use pagesim::replacer::{LruReplacer, Replacer};
/// use pagesim::{FrameCapacity, PageId};
///
/// let mut replacer = LruReplacer::new(FrameCapacity::new(2).unwrap());
/// for page in [1, 2, 1, 3] {
///     replacer.access(PageId::new(page));
/// }
///
/// // The hit on page 1 made page 2 the least recently used.
/// assert_eq!(replacer.faults(), 3);
/// assert_eq!(replacer.frames(), &[Some(PageId::new(1)), Some(PageId::new(3))]);
/// ```
#[derive(Debug, Clone)]
pub struct LruReplacer {
    capacity: FrameCapacity,

    /// Frame contents; `None` is an empty frame.
    slots: Vec<Option<PageId>>,

    /// Logical time of the last reference to each resident page.
    last_access: HashMap<PageId, u64>,

    /// Ticks once per processed reference.
    clock: u64,

    faults: u64,
}

impl LruReplacer {
    /// Create an LRU replacer with every frame empty.
    pub fn new(capacity: FrameCapacity) -> Self {
        Self {
            capacity,
            slots: vec![None; capacity.get()],
            last_access: HashMap::with_capacity(capacity.get()),
            clock: 0,
            faults: 0,
        }
    }

    /// Logical time of the last reference to `page_id`, if it is resident.
    pub fn last_access(&self, page_id: PageId) -> Option<u64> {
        self.last_access.get(&page_id).copied()
    }

    /// Number of references processed so far.
    pub fn clock(&self) -> u64 {
        self.clock
    }

    /// Frame whose page has the oldest timestamp.
    ///
    /// Only called once every frame is occupied. Ties go to the lowest frame
    /// index because the comparison is strict.
    fn victim(&self) -> FrameId {
        let mut victim = 0;
        let mut oldest = u64::MAX;

        for (idx, slot) in self.slots.iter().enumerate() {
            let Some(page_id) = slot else { continue };
            debug_assert!(self.last_access.contains_key(page_id));
            let stamp = self.last_access.get(page_id).copied().unwrap_or(0);
            if stamp < oldest {
                oldest = stamp;
                victim = idx;
            }
        }

        FrameId::new(victim)
    }
}

impl Replacer for LruReplacer {
    fn policy(&self) -> Policy {
        Policy::Lru
    }

    fn capacity(&self) -> FrameCapacity {
        self.capacity
    }

    fn access(&mut self, page_id: PageId) -> Access {
        let now = self.clock;
        self.clock += 1;

        if let Some(frame) = find_frame(&self.slots, page_id) {
            self.last_access.insert(page_id, now);
            trace!("lru hit: {} in {} at t={}", page_id, frame, now);
            return Access::Hit { frame };
        }

        self.faults += 1;

        // Initial fill takes the first empty frame without looking at timestamps.
        let frame = match self.slots.iter().position(Option::is_none) {
            Some(idx) => FrameId::new(idx),
            None => self.victim(),
        };

        let evicted = self.slots[frame.0].replace(page_id);
        if let Some(victim) = evicted {
            self.last_access.remove(&victim);
        }
        self.last_access.insert(page_id, now);

        trace!(
            "lru fault: {} into {} at t={} (evicted {:?})",
            page_id,
            frame,
            now,
            evicted
        );

        Access::Fault { frame, evicted }
    }

    fn faults(&self) -> u64 {
        self.faults
    }

    fn frames(&self) -> &[Option<PageId>] {
        &self.slots
    }

    fn reset(&mut self) {
        self.slots.fill(None);
        self.last_access.clear();
        self.clock = 0;
        self.faults = 0;
    }

    fn resident_count(&self) -> usize {
        self.last_access.len()
    }
}
