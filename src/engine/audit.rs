//! Independent checks on a finished draw.
//!
//! The engine only returns draws that pass these checks; the audit exists
//! for draws that arrive from elsewhere (edited by hand, rebuilt from
//! links) and for tests.

use std::collections::{HashMap, HashSet};

use crate::models::{Assignment, Constraint, ConstraintKind, Violation, ViolationType};

/// Checks that `assignments` is a constraint-respecting derangement of
/// `participants`.
///
/// # Returns
/// Every violation found; empty for a valid draw.
pub fn audit_assignments<S: AsRef<str>>(
    participants: &[S],
    constraints: &[Constraint],
    assignments: &[Assignment],
) -> Vec<Violation> {
    let known: HashSet<&str> = participants.iter().map(AsRef::as_ref).collect();
    let mut violations = Vec::new();
    let mut gives: HashMap<&str, &str> = HashMap::new();
    let mut receives: HashMap<&str, usize> = HashMap::new();

    for a in assignments {
        for name in [&a.giver, &a.receiver] {
            if !known.contains(name.as_str()) {
                violations.push(Violation::new(
                    ViolationType::UnknownParticipant,
                    name,
                    format!("'{name}' is not a participant"),
                ));
            }
        }
        if a.giver == a.receiver {
            violations.push(Violation::new(
                ViolationType::SelfAssignment,
                &a.giver,
                format!("'{}' gives to themselves", a.giver),
            ));
        }
        gives.insert(&a.giver, &a.receiver);
        *receives.entry(&a.receiver).or_default() += 1;
    }

    for (&name, &count) in &receives {
        if count > 1 {
            violations.push(Violation::new(
                ViolationType::DuplicateReceiver,
                name,
                format!("'{name}' receives {count} gifts"),
            ));
        }
    }

    for name in participants.iter().map(AsRef::as_ref) {
        if !gives.contains_key(name) {
            violations.push(Violation::new(
                ViolationType::Unassigned,
                name,
                format!("'{name}' gives no gift"),
            ));
        }
        if !receives.contains_key(name) {
            violations.push(Violation::new(
                ViolationType::Unassigned,
                name,
                format!("'{name}' receives no gift"),
            ));
        }
    }

    for c in constraints {
        let actual = gives.get(c.from.as_str()).copied();
        match c.kind {
            ConstraintKind::Must if actual != Some(c.to.as_str()) => {
                violations.push(Violation::new(
                    ViolationType::MustBroken,
                    &c.from,
                    format!("'{}' must give to '{}'", c.from, c.to),
                ));
            }
            ConstraintKind::Exclude if actual == Some(c.to.as_str()) => {
                violations.push(Violation::new(
                    ViolationType::ExcludeBroken,
                    &c.from,
                    format!("'{}' may not give to '{}'", c.from, c.to),
                ));
            }
            _ => {}
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has(violations: &[Violation], kind: ViolationType) -> bool {
        violations.iter().any(|v| v.violation_type == kind)
    }

    #[test]
    fn test_valid_draw() {
        let people = ["A", "B", "C"];
        let draw = vec![
            Assignment::new("A", "B", 0),
            Assignment::new("B", "C", 1),
            Assignment::new("C", "A", 2),
        ];
        let constraints = vec![Constraint::must("A", "B"), Constraint::exclude("B", "A")];
        assert!(audit_assignments(&people, &constraints, &draw).is_empty());
    }

    #[test]
    fn test_self_assignment() {
        let people = ["A", "B"];
        let draw = vec![Assignment::new("A", "A", 0), Assignment::new("B", "B", 1)];
        let v = audit_assignments(&people, &[], &draw);
        assert!(has(&v, ViolationType::SelfAssignment));
    }

    #[test]
    fn test_duplicate_and_missing_receiver() {
        let people = ["A", "B", "C"];
        let draw = vec![
            Assignment::new("A", "B", 0),
            Assignment::new("B", "A", 1),
            Assignment::new("C", "A", 2),
        ];
        let v = audit_assignments(&people, &[], &draw);
        assert!(has(&v, ViolationType::DuplicateReceiver));
        assert!(v
            .iter()
            .any(|x| x.violation_type == ViolationType::Unassigned && x.participant == "C"));
    }

    #[test]
    fn test_unknown_participant() {
        let people = ["A", "B"];
        let draw = vec![Assignment::new("A", "Z", 0), Assignment::new("B", "A", 1)];
        let v = audit_assignments(&people, &[], &draw);
        assert!(has(&v, ViolationType::UnknownParticipant));
    }

    #[test]
    fn test_constraint_breaches() {
        let people = ["A", "B", "C"];
        let draw = vec![
            Assignment::new("A", "C", 0),
            Assignment::new("B", "A", 1),
            Assignment::new("C", "B", 2),
        ];
        let constraints = vec![Constraint::must("A", "B"), Constraint::exclude("B", "A")];
        let v = audit_assignments(&people, &constraints, &draw);
        assert!(has(&v, ViolationType::MustBroken));
        assert!(has(&v, ViolationType::ExcludeBroken));
        assert_eq!(v.len(), 2);
    }
}
