//! Page replacement policy implementations (replacers).
//!
//! Currently implements:
//! - [`FifoReplacer`] - evicts the page that has been resident longest
//! - [`LruReplacer`] - evicts the page whose last access is oldest
//!
//! Every replacer is a small state machine over a fixed set of frames. Feed it
//! one reference at a time with [`Replacer::access`], then read the fault
//! count and the final frame contents.

mod fifo;
mod lru;

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, FrameCapacity, FrameId, PageId};

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;

/// Outcome of a single page reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The page was already resident in `frame`.
    Hit { frame: FrameId },

    /// The page was missing and has been loaded into `frame`.
    ///
    /// `evicted` holds the page that previously occupied the frame, if any.
    Fault {
        frame: FrameId,
        evicted: Option<PageId>,
    },
}

impl Access {
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, Access::Hit { .. })
    }

    #[inline]
    pub fn is_fault(&self) -> bool {
        matches!(self, Access::Fault { .. })
    }

    /// Frame that holds the referenced page after the access.
    pub fn frame(&self) -> FrameId {
        match *self {
            Access::Hit { frame } | Access::Fault { frame, .. } => frame,
        }
    }

    /// Page displaced by this access, if any.
    pub fn evicted(&self) -> Option<PageId> {
        match *self {
            Access::Hit { .. } => None,
            Access::Fault { evicted, .. } => evicted,
        }
    }
}

/// The replacement policies pagesim knows how to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    Fifo,
    Lru,
}

impl Policy {
    /// All policies in their default reporting order.
    pub const ALL: [Policy; 2] = [Policy::Fifo, Policy::Lru];

    /// Upper-case name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

/// A page replacement policy operating on a fixed number of frames.
///
/// Implementations own their frames exclusively and never fail: capacity is
/// validated before construction, and every reference is either a hit or a
/// fault.
pub trait Replacer {
    /// Policy implemented by this replacer.
    fn policy(&self) -> Policy;

    /// Number of frames this replacer manages.
    fn capacity(&self) -> FrameCapacity;

    /// Process the next page reference.
    fn access(&mut self, page_id: PageId) -> Access;

    /// Number of faults since construction (or the last reset).
    fn faults(&self) -> u64;

    /// Current frame contents in the policy's native order.
    ///
    /// Always exactly `capacity()` long; `None` marks an empty frame.
    fn frames(&self) -> &[Option<PageId>];

    /// Forget every resident page and zero the fault counter.
    fn reset(&mut self);

    /// Check whether `page_id` is resident.
    fn contains(&self, page_id: PageId) -> bool {
        self.frames().contains(&Some(page_id))
    }

    /// Number of occupied frames.
    fn resident_count(&self) -> usize {
        self.frames().iter().flatten().count()
    }
}

/// Index of the frame holding `page_id`, scanning left to right.
fn find_frame(slots: &[Option<PageId>], page_id: PageId) -> Option<FrameId> {
    slots
        .iter()
        .position(|slot| *slot == Some(page_id))
        .map(FrameId::new)
}
