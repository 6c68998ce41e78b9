//! Draw domain models.
//!
//! Participants are plain display names (`String`), compared by exact
//! value. The types here describe what goes into a draw (constraints),
//! what comes out (assignments), and what travels inside links (payloads).
//!
//! | Type | Role |
//! |------|------|
//! | [`Constraint`] | `must` / `exclude` edge between two participants |
//! | [`Assignment`] | giver → receiver pair of a draw |
//! | [`Violation`] | audit finding on a draw |
//! | [`AssignmentPayload`] | personal link content |
//! | [`SantaState`] | reproducibility link content |
//! | [`Theme`] | reveal-page theme |

mod assignment;
mod constraint;
mod payload;
mod theme;

pub use assignment::{Assignment, Violation, ViolationType};
pub use constraint::{Constraint, ConstraintKind};
pub use payload::{AssignmentPayload, DisplayOptions, SantaState};
pub use theme::Theme;
