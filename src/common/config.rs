//! Configuration constants and validated run parameters for pagesim.

use std::fmt;

use crate::common::{Error, Result};
use crate::replacer::Policy;

/// Smallest number of frames a simulation may use.
pub const MIN_FRAMES: usize = 1;

/// Largest number of frames a simulation may use.
///
/// Matches the number of physical frames the simulated machine exposes.
pub const MAX_FRAMES: usize = 10;

/// Maximum number of page references accepted from a single input source.
pub const MAX_REFERENCES: usize = 1024;

/// Marker printed for a frame that holds no page.
pub const EMPTY_SLOT: &str = "-1";

/// Number of frames available to a replacer, guaranteed to lie in
/// `[MIN_FRAMES, MAX_FRAMES]`.
///
/// The only ways to build one are [`FrameCapacity::new`] and
/// [`FrameCapacity::parse`], so replacers never see an out-of-range value.
///
/// # Example
/// ```
/// use pagesim::FrameCapacity;
///
/// let frames = FrameCapacity::new(3).unwrap();
/// assert_eq!(frames.get(), 3);
/// assert!(FrameCapacity::new(0).is_err());
/// assert!(FrameCapacity::parse("11").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameCapacity(usize);

impl FrameCapacity {
    /// Validate a frame count.
    ///
    /// # Errors
    /// `Error::InvalidFrameCount` if `frames` is outside `[1, 10]`.
    pub fn new(frames: usize) -> Result<Self> {
        if (MIN_FRAMES..=MAX_FRAMES).contains(&frames) {
            Ok(FrameCapacity(frames))
        } else {
            Err(Error::InvalidFrameCount {
                value: frames.to_string(),
            })
        }
    }

    /// Parse and validate a frame count given as text (e.g. a CLI argument).
    ///
    /// # Errors
    /// `Error::InvalidFrameCount` if `s` is not a number or is out of range.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let frames = trimmed
            .parse::<usize>()
            .map_err(|_| Error::InvalidFrameCount {
                value: trimmed.to_string(),
            })?;
        Self::new(frames)
    }

    /// Number of frames.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for FrameCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} frames", self.0)
    }
}

/// Everything a driver needs to run one simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Frames available to every replacer.
    pub capacity: FrameCapacity,

    /// Upper bound on the number of references read from input.
    pub max_references: usize,

    /// Policies to simulate, in reporting order.
    pub policies: Vec<Policy>,

    /// Run the policies on separate threads.
    pub parallel: bool,
}

impl SimConfig {
    /// Config running FIFO then LRU sequentially with the default reference bound.
    pub fn new(capacity: FrameCapacity) -> Self {
        Self {
            capacity,
            max_references: MAX_REFERENCES,
            policies: Policy::ALL.to_vec(),
            parallel: false,
        }
    }

    /// Replace the policy list. An empty list falls back to all policies.
    pub fn with_policies(mut self, policies: Vec<Policy>) -> Self {
        self.policies = if policies.is_empty() {
            Policy::ALL.to_vec()
        } else {
            policies
        };
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
