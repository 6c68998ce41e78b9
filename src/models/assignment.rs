//! Draw results and audit findings.
//!
//! A draw is an ordered list of [`Assignment`]s, one per participant, in
//! the order participants were supplied.

use serde::{Deserialize, Serialize};

/// One giver → receiver pair of a draw.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    /// Participant giving the gift.
    pub giver: String,
    /// Participant receiving it.
    pub receiver: String,
    /// Giver's position in the original participant list.
    pub index: usize,
}

impl Assignment {
    /// Creates an assignment.
    pub fn new(giver: impl Into<String>, receiver: impl Into<String>, index: usize) -> Self {
        Self {
            giver: giver.into(),
            receiver: receiver.into(),
            index,
        }
    }
}

/// A problem found when auditing a draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Participant the violation is about.
    pub participant: String,
    /// Human-readable description.
    pub message: String,
}

/// Classification of draw violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// Someone gives to themselves.
    SelfAssignment,
    /// Someone receives more than one gift.
    DuplicateReceiver,
    /// A participant gives no gift or receives none.
    Unassigned,
    /// Giver or receiver is not a participant.
    UnknownParticipant,
    /// A `must` edge is missing from the draw.
    MustBroken,
    /// An `exclude` edge is present in the draw.
    ExcludeBroken,
}

impl Violation {
    /// Creates a violation.
    pub fn new(
        violation_type: ViolationType,
        participant: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            violation_type,
            participant: participant.into(),
            message: message.into(),
        }
    }
}
