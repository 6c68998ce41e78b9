//! Constraint validation.
//!
//! Checks a constraint set for internal consistency before any draw
//! attempt. Detects:
//! - Two `must` constraints from the same giver
//! - A `must` constraint from a giver to themselves
//! - Two `must` constraints onto the same receiver
//! - Constraints naming someone who is not a participant
//!
//! Validation is fail-fast: the first problem found is returned.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::models::{Constraint, ConstraintKind};

/// Validation result.
pub type ValidationResult<'a> = Result<ValidatedConstraints<'a>, ValidationError>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A giver has more than one `must` constraint.
    DuplicateMustConstraint,
    /// Two givers are forced onto the same receiver.
    ConflictingMustTargets,
    /// A `must` constraint points a giver at themselves.
    SelfMustConstraint,
    /// A constraint names someone outside the participant list.
    UnknownParticipantReference,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// A constraint set that passed validation, indexed for the engine.
///
/// Borrows names from the constraint list it was built from.
#[derive(Debug, Clone, Default)]
pub struct ValidatedConstraints<'a> {
    must_match: HashMap<&'a str, &'a str>,
    /// `must` constraints in input order, for stable iteration.
    must_order: Vec<(&'a str, &'a str)>,
    excludes: Vec<&'a Constraint>,
    excluded_pairs: HashSet<(&'a str, &'a str)>,
}

impl<'a> ValidatedConstraints<'a> {
    /// Forced receiver for `giver`, if any.
    pub fn must_target(&self, giver: &str) -> Option<&'a str> {
        self.must_match.get(giver).copied()
    }

    /// `(giver, receiver)` pairs of every `must` constraint, in input order.
    pub fn must_pairs(&self) -> &[(&'a str, &'a str)] {
        &self.must_order
    }

    /// The `exclude` constraints, unchanged and in input order.
    pub fn excludes(&self) -> &[&'a Constraint] {
        &self.excludes
    }

    /// Whether `giver → receiver` is forbidden by an `exclude` constraint.
    pub fn is_excluded(&self, giver: &str, receiver: &str) -> bool {
        self.excluded_pairs.contains(&(giver, receiver))
    }

    /// Number of `must` constraints.
    pub fn must_count(&self) -> usize {
        self.must_order.len()
    }
}

/// Validates `constraints` against `participants`.
///
/// Checks, in order:
/// 1. No giver has two `must` constraints
/// 2. Every `must` names known participants
/// 3. No `must` points a giver at themselves
/// 4. No two `must` constraints share a receiver
/// 5. Every `exclude` names known participants
///
/// # Returns
/// The indexed constraints, or the first [`ValidationError`] found.
pub fn validate_constraints<'a, S: AsRef<str>>(
    participants: &[S],
    constraints: &'a [Constraint],
) -> ValidationResult<'a> {
    let known: HashSet<&str> = participants.iter().map(AsRef::as_ref).collect();

    let mut must_match: HashMap<&str, &str> = HashMap::new();
    let mut must_order = Vec::new();
    for c in constraints.iter().filter(|c| c.kind == ConstraintKind::Must) {
        if must_match.insert(&c.from, &c.to).is_some() {
            return Err(ValidationError::new(
                ValidationErrorKind::DuplicateMustConstraint,
                format!("{} has multiple must-match constraints", c.from),
            ));
        }
        must_order.push((c.from.as_str(), c.to.as_str()));
    }

    for &(from, to) in &must_order {
        check_known(&known, from, "Must-match")?;
        check_known(&known, to, "Must-match")?;
        if from == to {
            return Err(ValidationError::new(
                ValidationErrorKind::SelfMustConstraint,
                format!("{from} cannot be required to gift themselves"),
            ));
        }
    }

    let mut must_receive: HashMap<&str, &str> = HashMap::new();
    for &(from, to) in &must_order {
        if must_receive.insert(to, from).is_some() {
            return Err(ValidationError::new(
                ValidationErrorKind::ConflictingMustTargets,
                format!("{to} is the must-match target of multiple people"),
            ));
        }
    }

    let mut excludes = Vec::new();
    let mut excluded_pairs = HashSet::new();
    for c in constraints.iter().filter(|c| c.kind == ConstraintKind::Exclude) {
        check_known(&known, &c.from, "Exclusion")?;
        check_known(&known, &c.to, "Exclusion")?;
        excludes.push(c);
        excluded_pairs.insert((c.from.as_str(), c.to.as_str()));
    }

    Ok(ValidatedConstraints {
        must_match,
        must_order,
        excludes,
        excluded_pairs,
    })
}

fn check_known(known: &HashSet<&str>, name: &str, label: &str) -> Result<(), ValidationError> {
    if known.contains(name) {
        Ok(())
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::UnknownParticipantReference,
            format!("{label} constraint references unknown participant: {name}"),
        ))
    }
}
