//! Replacer Tests
//!
//! Step-by-step traces of the FIFO and LRU replacers on textbook reference
//! strings. Frame contents are checked in native slot order, since that order
//! is part of the observable output.

use pagesim::{Access, FifoReplacer, FrameCapacity, FrameId, LruReplacer, PageId, Policy};
use pagesim::{Replacer, Simulator};

fn refs(ids: &[u32]) -> Vec<PageId> {
    ids.iter().copied().map(PageId::new).collect()
}

fn frames(ids: &[i64]) -> Vec<Option<PageId>> {
    ids.iter()
        .map(|&id| (id >= 0).then(|| PageId::new(id as u32)))
        .collect()
}

fn capacity(frames: usize) -> FrameCapacity {
    FrameCapacity::new(frames).unwrap()
}

// ============================================================================
// Worked example: 1 2 3 4 1 2 5 1 2 3 4 5 with three frames
// ============================================================================

const BELADY: [u32; 12] = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];

#[test]
fn test_fifo_belady_sequence() {
    let report = Simulator::new(capacity(3)).run_policy(Policy::Fifo, &refs(&BELADY));

    assert_eq!(report.faults, 9);
    assert_eq!(report.frames, frames(&[5, 3, 4]));
    assert_eq!(report.evictions, refs(&[1, 2, 3, 4, 1, 2]));
    assert_eq!(report.stats.hits, 3);
    assert_eq!(
        format!("{}", report),
        "FIFO: 9 page faults\nFinal state of memory: 5 3 4"
    );
}

#[test]
fn test_lru_belady_sequence() {
    let report = Simulator::new(capacity(3)).run_policy(Policy::Lru, &refs(&BELADY));

    assert_eq!(report.faults, 10);
    assert_eq!(report.frames, frames(&[3, 4, 5]));
    assert_eq!(report.evictions, refs(&[1, 2, 3, 4, 5, 1, 2]));
    assert_eq!(
        format!("{}", report),
        "LRU: 10 page faults\nFinal state of memory: 3 4 5"
    );
}

#[test]
fn test_fifo_belady_anomaly() {
    // More frames, more faults: the anomaly FIFO is known for.
    let references = refs(&BELADY);
    let three = Simulator::new(capacity(3)).run_policy(Policy::Fifo, &references);
    let four = Simulator::new(capacity(4)).run_policy(Policy::Fifo, &references);

    assert_eq!(three.faults, 9);
    assert_eq!(four.faults, 10);
}

#[test]
fn test_lru_trace_step_by_step() {
    let mut replacer = LruReplacer::new(capacity(3));
    let fault = |frame: usize, evicted: Option<u32>| Access::Fault {
        frame: FrameId::new(frame),
        evicted: evicted.map(PageId::new),
    };
    let hit = |frame: usize| Access::Hit {
        frame: FrameId::new(frame),
    };

    let expected = [
        fault(0, None),
        fault(1, None),
        fault(2, None),
        fault(0, Some(1)),
        fault(1, Some(2)),
        fault(2, Some(3)),
        fault(0, Some(4)),
        hit(1),
        hit(2),
        fault(0, Some(5)),
        fault(1, Some(1)),
        fault(2, Some(2)),
    ];

    for (page, want) in BELADY.iter().zip(expected) {
        assert_eq!(replacer.access(PageId::new(*page)), want, "page {}", page);
    }
}

// ============================================================================
// Worked example: 7 0 1 2 0 3 0 4 2 3 0 3 2 with three frames
// ============================================================================

const TEXTBOOK: [u32; 13] = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2];

#[test]
fn test_fifo_textbook_sequence() {
    let report = Simulator::new(capacity(3)).run_policy(Policy::Fifo, &refs(&TEXTBOOK));

    assert_eq!(report.faults, 10);
    assert_eq!(report.frames, frames(&[0, 2, 3]));
    assert_eq!(report.evictions, refs(&[7, 0, 1, 2, 3, 0, 4]));
}

#[test]
fn test_lru_textbook_sequence() {
    let report = Simulator::new(capacity(3)).run_policy(Policy::Lru, &refs(&TEXTBOOK));

    assert_eq!(report.faults, 9);
    assert_eq!(report.frames, frames(&[0, 3, 2]));
    assert_eq!(report.evictions, refs(&[7, 1, 2, 3, 0, 4]));
}

#[test]
fn test_fifo_trace_step_by_step() {
    let mut replacer = FifoReplacer::new(capacity(3));
    let snapshots: Vec<Vec<Option<PageId>>> = TEXTBOOK
        .iter()
        .map(|&page| {
            replacer.access(PageId::new(page));
            replacer.frames().to_vec()
        })
        .collect();

    let expected = [
        frames(&[7, -1, -1]),
        frames(&[7, 0, -1]),
        frames(&[7, 0, 1]),
        frames(&[2, 0, 1]),
        frames(&[2, 0, 1]),
        frames(&[2, 3, 1]),
        frames(&[2, 3, 0]),
        frames(&[4, 3, 0]),
        frames(&[4, 2, 0]),
        frames(&[4, 2, 3]),
        frames(&[0, 2, 3]),
        frames(&[0, 2, 3]),
        frames(&[0, 2, 3]),
    ];
    assert_eq!(snapshots, expected);
}

// ============================================================================
// Boundaries
// ============================================================================

#[test]
fn test_single_frame_faults_on_every_change() {
    let references = refs(&[1, 1, 1, 2, 2, 1]);
    for report in Simulator::new(capacity(1)).run_all(&Policy::ALL, &references) {
        assert_eq!(report.faults, 3, "{}", report.policy);
        assert_eq!(report.frames, frames(&[1]));
    }
}

#[test]
fn test_partial_fill_reports_empty_frames() {
    let references = refs(&[4, 8, 4]);
    for report in Simulator::new(capacity(5)).run_all(&Policy::ALL, &references) {
        assert_eq!(report.faults, 2);
        assert_eq!(report.frames, frames(&[4, 8, -1, -1, -1]));
        assert!(format!("{}", report).ends_with("Final state of memory: 4 8 -1 -1 -1"));
    }
}

#[test]
fn test_distinct_pages_within_capacity_fault_once_each() {
    let references = refs(&[9, 3, 9, 5, 3, 5, 9]);
    for report in Simulator::new(capacity(10)).run_all(&Policy::ALL, &references) {
        assert_eq!(report.faults, 3);
        assert!(report.evictions.is_empty());
    }
}

#[test]
fn test_fifo_and_lru_diverge_on_hot_page() {
    // Page 1 is hot: LRU keeps it, FIFO evicts it anyway.
    let references = refs(&[1, 2, 1, 3, 1, 4, 1]);
    let sim = Simulator::new(capacity(2));

    let fifo = sim.run_policy(Policy::Fifo, &references);
    let lru = sim.run_policy(Policy::Lru, &references);

    assert_eq!(fifo.faults, 5);
    assert_eq!(lru.faults, 4);
    assert!(lru.resident().any(|page| page == PageId::new(1)));
}
