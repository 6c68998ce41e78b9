//! Pairwise draw constraints.
//!
//! A constraint is a directed edge `from → to` between two participants:
//! `must` forces the edge into the draw, `exclude` forbids it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of directed constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstraintKind {
    /// `from` must give to `to`.
    Must,
    /// `from` may not give to `to`.
    Exclude,
}

/// A directed constraint between two participants.
///
/// Serialized as `{"type": "must" | "exclude", "from": ..., "to": ...}`,
/// the shape carried inside state links.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Constraint {
    /// Constraint kind.
    #[serde(rename = "type")]
    pub kind: ConstraintKind,
    /// Giver side.
    pub from: String,
    /// Receiver side.
    pub to: String,
}

impl Constraint {
    /// Creates a constraint of the given kind.
    pub fn new(kind: ConstraintKind, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            kind,
            from: from.into(),
            to: to.into(),
        }
    }

    /// Creates a `must` constraint: `from` gives to `to`.
    pub fn must(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::new(ConstraintKind::Must, from, to)
    }

    /// Creates an `exclude` constraint: `from` never gives to `to`.
    pub fn exclude(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::new(ConstraintKind::Exclude, from, to)
    }

    /// Whether this is a `must` constraint.
    #[inline]
    pub fn is_must(&self) -> bool {
        self.kind == ConstraintKind::Must
    }

    /// Whether this is an `exclude` constraint.
    #[inline]
    pub fn is_exclude(&self) -> bool {
        self.kind == ConstraintKind::Exclude
    }
}

/// Renders the organizer text form: `A -> B` or `A !-> B`.
impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ConstraintKind::Must => write!(f, "{} -> {}", self.from, self.to),
            ConstraintKind::Exclude => write!(f, "{} !-> {}", self.from, self.to),
        }
    }
}
