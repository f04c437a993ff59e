//! pagesim - A page replacement simulator comparing FIFO and LRU eviction.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Driver (bin/pagesim.rs, input/)               │   │
//! │  │   read reference file → validate frames → print reports │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Simulation (sim/)                           │   │
//! │  │      Simulator + Report + AccessStats                    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Replacers (replacer/)                       │   │
//! │  │      FifoReplacer (ring buffer) | LruReplacer (stamps)   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, FrameCapacity, Error)
//! - [`replacer`] - FIFO and LRU replacement policies
//! - [`sim`] - Running policies and reporting their results
//! - [`input`] - Parsing reference strings
//! - [`logging`] - `env_logger` setup
//!
//! # Quick Start
//! ```
//! use pagesim::input::parse_references;
//! use pagesim::{FrameCapacity, Policy, Simulator};
//!
//! let refs = parse_references("1 2 3 4 1 2 5 1 2 3 4 5", 1024).unwrap();
//! let sim = Simulator::new(FrameCapacity::new(3).unwrap());
//!
//! for report in sim.run_all(&Policy::ALL, &refs) {
//!     println!("{}", report);
//! }
//! ```

pub mod common;
pub mod input;
pub mod logging;
pub mod replacer;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::config::{MAX_FRAMES, MAX_REFERENCES, MIN_FRAMES};
pub use common::{Error, FrameCapacity, FrameId, PageId, Result, SimConfig};

pub use replacer::{Access, FifoReplacer, LruReplacer, Policy, Replacer};
pub use sim::{simulate, AccessStats, Report, Simulator};
