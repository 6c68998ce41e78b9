//! Gift-exchange draw engine.
//!
//! Finds a derangement of the participants (nobody gives to themselves,
//! everybody gives and receives exactly once) that honors every `must` and
//! `exclude` constraint, driven entirely by the seed text.
//!
//! # Algorithm
//!
//! [`AssignmentEngine`] runs a bounded randomized greedy search: each
//! attempt shuffles the candidate receivers and fills givers first-fit,
//! without backtracking. It is not an exact solver; an exhausted search does
//! not prove that no draw exists.
//!
//! # Audit
//!
//! [`audit_assignments`] re-checks any draw against its participants and
//! constraints.

mod audit;
mod greedy;

pub use audit::audit_assignments;
pub use greedy::{
    generate_assignments, AssignmentEngine, Draw, DEFAULT_MAX_ATTEMPTS, MIN_PARTICIPANTS,
};
