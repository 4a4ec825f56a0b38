//! Weekly course timetabling.
//!
//! Assigns courses to faculty across a grid of working days and periods,
//! respecting each faculty member's declared free cells and daily hour cap,
//! then lets a human editor patch individual cells.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Template`, `Period`, `Faculty`, `FreeSlot`,
//!   `Course`, `TimeSlot`, `GeneratedTimetable`, `Violation`
//! - **`availability`**: Free-cell and daily-load queries (`is_free`, `daily_load`)
//! - **`scheduler`**: `GreedyScheduler`, `patch_slot`, `CoverageReport`
//! - **`validation`**: Input integrity checks and timetable audits
//! - **`store`**: `TimetableStore`, the in-memory entity store with cascades
//! - **`render`**: `TimetableGrid`, the printable day × period projection
//! - **`config`** / **`error`**: `StoreConfig`, `TimetableError`
//!
//! # Algorithm
//!
//! A single deterministic first-fit pass over the grid, O(days × periods × courses).
//! No optimality guarantee: the first-listed course wins every contested cell,
//! and demand that cannot be placed is left for the caller to detect.
//!
//! # Logging
//!
//! Uses the `log` facade. No logger is installed by this crate.

pub mod availability;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod scheduler;
pub mod store;
pub mod validation;

pub use error::{Result, TimetableError};
