//! FIFO (First-In-First-Out) replacement policy.
//!
//! Frames form a circular buffer: new pages are written at the insertion
//! cursor `rear`, and once every frame is occupied the page under `rear` is
//! the oldest arrival, so it is the one overwritten. A hit never reorders
//! anything, which is what separates FIFO from LRU.

use log::trace;

use super::{find_frame, Access, Policy, Replacer};
use crate::common::{FrameCapacity, FrameId, PageId};

/// A FIFO replacer over a fixed ring of frames.
///
/// # Example
/// ```
/// use pagesim::replacer::{FifoReplacer, Replacer};
/// use pagesim::{FrameCapacity, PageId};
///
/// let mut replacer = FifoReplacer::new(FrameCapacity::new(2).unwrap());
/// for page in [1, 2, 1, 3] {
///     replacer.access(PageId::new(page));
/// }
///
/// // Page 1 arrived first, so page 3 replaced it despite the later hit.
/// assert_eq!(replacer.faults(), 3);
/// assert_eq!(replacer.frames(), &[Some(PageId::new(3)), Some(PageId::new(2))]);
/// ```
#[derive(Debug, Clone)]
pub struct FifoReplacer {
    capacity: FrameCapacity,

    /// Frame contents; `None` is an empty frame.
    slots: Vec<Option<PageId>>,

    /// Eviction cursor: frame holding the oldest resident page.
    front: usize,

    /// Insertion cursor: frame the next faulting page is written to.
    rear: usize,

    /// Number of occupied frames.
    len: usize,

    faults: u64,
}

impl FifoReplacer {
    /// Create a FIFO replacer with every frame empty.
    pub fn new(capacity: FrameCapacity) -> Self {
        Self {
            capacity,
            slots: vec![None; capacity.get()],
            front: 0,
            rear: 0,
            len: 0,
            faults: 0,
        }
    }

    /// The page that would be evicted by the next fault on a full buffer.
    ///
    /// Returns None while no page is resident.
    pub fn oldest(&self) -> Option<PageId> {
        if self.len == 0 {
            None
        } else {
            self.slots[self.front]
        }
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }
}

impl Replacer for FifoReplacer {
    fn policy(&self) -> Policy {
        Policy::Fifo
    }

    fn capacity(&self) -> FrameCapacity {
        self.capacity
    }

    fn access(&mut self, page_id: PageId) -> Access {
        if let Some(frame) = find_frame(&self.slots, page_id) {
            trace!("fifo hit: {} in {}", page_id, frame);
            return Access::Hit { frame };
        }

        self.faults += 1;

        let capacity = self.slots.len();
        let was_full = self.is_full();
        let frame = FrameId::new(self.rear);

        // When full, front == rear, so this overwrites the oldest page.
        let evicted = self.slots[self.rear].replace(page_id);
        self.rear = (self.rear + 1) % capacity;

        if was_full {
            self.front = (self.front + 1) % capacity;
        } else {
            self.len += 1;
        }

        debug_assert_eq!(was_full, evicted.is_some());
        trace!(
            "fifo fault: {} into {} (evicted {:?})",
            page_id,
            frame,
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
        self.front = 0;
        self.rear = 0;
        self.len = 0;
        self.faults = 0;
    }

    fn resident_count(&self) -> usize {
        self.len
    }
}
