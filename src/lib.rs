//! Budget-constrained PC component selection engine.
//!
//! `buildsmith-core` takes a catalog of parts grouped by category and a total
//! budget, and assembles one internally compatible build: one CPU, motherboard,
//! RAM kit, GPU, storage drive, case, PSU and cooler. Selection is a bounded
//! greedy heuristic driven by per-category allocation tables, retried with
//! progressively more conservative tables before falling back to a
//! minimum-viable assembly. Every finished build is validated by a compatibility
//! reporter that is also usable on its own after manual part swaps.
//!
//! Randomness is injected by the caller, so a seeded generator produces the
//! same build for the same catalog and budget.

pub mod catalog;
pub mod component;
pub mod report;
pub mod selection;
pub mod types;
