//! Timetable generation, manual patching, and coverage.
//!
//! # Algorithm
//!
//! `GreedyScheduler` walks the template grid once, in declaration order,
//! placing the first eligible course at each cell. It is deterministic
//! and not optimal: re-running with unchanged inputs yields the same
//! slots, and some placeable demand may be left unplaced.
//!
//! # Patching
//!
//! `patch_slot` retargets one existing slot to another course without
//! re-running the scheduler or re-checking constraints.
//!
//! # Coverage
//!
//! `CoverageReport` compares placed slots against weekly demand.

mod coverage;
mod greedy;
mod patch;

pub use coverage::{grid_fill, CourseCoverage, CoverageReport};
pub use greedy::{GreedyRun, GreedyScheduler};
pub use patch::{patch_slot, PatchOutcome};
