//! Bounded randomized greedy draw.
//!
//! # Algorithm
//!
//! 1. Hash the seed and build one [`SeededRandom`] for the whole draw.
//! 2. Validate constraints once.
//! 3. Up to `max_attempts` times:
//!    a. Shuffle a copy of the participants into a candidate order.
//!    b. Reserve every `must` receiver.
//!    c. For each giver in input order, take the `must` receiver if there is
//!       one, otherwise the first unused candidate that is neither the giver
//!       nor excluded. If none fits, abandon the attempt.
//!    d. If everyone got a receiver and all receivers are distinct, return.
//! 4. Report [`DrawError::SearchExhausted`].
//!
//! The stream is never reset between attempts: attempt 2 continues where
//! attempt 1 stopped. There is no backtracking within an attempt, so a
//! tight but satisfiable constraint set can still exhaust the search.
//!
//! # Complexity
//! O(attempts * n^2) for n participants.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::error::DrawError;
use crate::models::{Assignment, Constraint};
use crate::random::{seeded_shuffle, RandomSource, SeededRandom};
use crate::validation::{validate_constraints, ValidatedConstraints};

/// Attempt ceiling used by [`generate_assignments`].
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Minimum number of participants in a draw.
pub const MIN_PARTICIPANTS: usize = 2;

/// A successful draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    /// One assignment per participant, in participant order.
    pub assignments: Vec<Assignment>,
    /// Attempts consumed, including the successful one.
    pub attempts: usize,
}

impl Draw {
    /// Receiver for `giver`, if `giver` took part.
    pub fn receiver_of(&self, giver: &str) -> Option<&str> {
        self.assignments
            .iter()
            .find(|a| a.giver == giver)
            .map(|a| a.receiver.as_str())
    }

    /// Consumes the draw, keeping only the assignments.
    pub fn into_assignments(self) -> Vec<Assignment> {
        self.assignments
    }
}

/// Seeded, constraint-aware gift-exchange engine.
///
/// # Example
///
/// ```
/// use u_santa::engine::AssignmentEngine;
/// use u_santa::models::Constraint;
///
/// let people = vec!["Alice".to_string(), "Bob".to_string(), "Carol".to_string()];
/// let constraints = vec![Constraint::must("Alice", "Bob")];
///
/// let draw = AssignmentEngine::new()
///     .draw(&people, "x", &constraints)
///     .unwrap();
/// assert_eq!(draw.receiver_of("Alice"), Some("Bob"));
/// assert_eq!(draw.receiver_of("Bob"), Some("Carol"));
/// ```
#[derive(Debug, Clone)]
pub struct AssignmentEngine {
    max_attempts: usize,
}

impl Default for AssignmentEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AssignmentEngine {
    /// Creates an engine with [`DEFAULT_MAX_ATTEMPTS`].
    pub fn new() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets the attempt ceiling.
    ///
    /// Changing it changes which configurations succeed, never which draw a
    /// successful configuration produces.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Configured attempt ceiling.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Draws assignments for `participants`.
    ///
    /// Identical `(participants, seed, constraints)` always give the same
    /// draw. Participant names must be unique; they are not deduplicated.
    pub fn draw<S: AsRef<str>>(
        &self,
        participants: &[S],
        seed: &str,
        constraints: &[Constraint],
    ) -> Result<Draw, DrawError> {
        if participants.len() < MIN_PARTICIPANTS {
            return Err(DrawError::InsufficientParticipants {
                count: participants.len(),
            });
        }

        let mut rng = SeededRandom::from_seed_text(seed);
        let validated = validate_constraints(participants, constraints)?;
        let names: Vec<&str> = participants.iter().map(AsRef::as_ref).collect();

        for attempt in 1..=self.max_attempts {
            if let Some(assignments) = try_attempt(&names, &validated, &mut rng) {
                info!(
                    participants = names.len(),
                    constraints = constraints.len(),
                    attempts = attempt,
                    "Draw complete"
                );
                return Ok(Draw {
                    assignments,
                    attempts: attempt,
                });
            }
            if attempt % 100 == 0 {
                debug!(attempt, "Draw still searching");
            }
        }

        warn!(
            participants = names.len(),
            constraints = constraints.len(),
            attempts = self.max_attempts,
            "Draw search exhausted"
        );
        Err(DrawError::SearchExhausted {
            attempts: self.max_attempts,
        })
    }
}

/// One shuffle + first-fit pass. `None` abandons the attempt.
fn try_attempt<R: RandomSource + ?Sized>(
    names: &[&str],
    constraints: &ValidatedConstraints<'_>,
    rng: &mut R,
) -> Option<Vec<Assignment>> {
    let candidates = seeded_shuffle(names, rng);
    let mut used: HashSet<&str> = HashSet::with_capacity(names.len());

    for &(_, receiver) in constraints.must_pairs() {
        if !used.insert(receiver) {
            return None;
        }
    }

    let mut assignments = Vec::with_capacity(names.len());
    for (index, &giver) in names.iter().enumerate() {
        if let Some(receiver) = constraints.must_target(giver) {
            assignments.push(Assignment::new(giver, receiver, index));
            continue;
        }

        let receiver = candidates.iter().copied().find(|&candidate| {
            !used.contains(candidate)
                && candidate != giver
                && !constraints.is_excluded(giver, candidate)
        })?;
        used.insert(receiver);
        assignments.push(Assignment::new(giver, receiver, index));
    }

    let distinct: HashSet<&str> = assignments.iter().map(|a| a.receiver.as_str()).collect();
    (distinct.len() == names.len()).then_some(assignments)
}

/// Draws assignments with the default engine.
///
/// # Errors
/// - [`DrawError::InsufficientParticipants`] for fewer than two names
/// - [`DrawError::Validation`] for inconsistent constraints
/// - [`DrawError::SearchExhausted`] after [`DEFAULT_MAX_ATTEMPTS`] failed attempts
pub fn generate_assignments<S: AsRef<str>>(
    participants: &[S],
    seed: &str,
    constraints: &[Constraint],
) -> Result<Vec<Assignment>, DrawError> {
    AssignmentEngine::new()
        .draw(participants, seed, constraints)
        .map(Draw::into_assignments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::audit_assignments;
    use crate::validation::ValidationErrorKind;
    use proptest::prelude::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn pairs(assignments: &[Assignment]) -> Vec<(&str, &str)> {
        assignments
            .iter()
            .map(|a| (a.giver.as_str(), a.receiver.as_str()))
            .collect()
    }

    #[test]
    fn test_two_participants_swap() {
        let result = generate_assignments(&names(&["Alice", "Bob"]), "x", &[]).unwrap();
        assert_eq!(
            result,
            vec![Assignment::new("Alice", "Bob", 0), Assignment::new("Bob", "Alice", 1)]
        );
    }

    #[test]
    fn test_must_forces_remaining_cycle() {
        let result = generate_assignments(
            &names(&["Alice", "Bob", "Carol"]),
            "x",
            &[Constraint::must("Alice", "Bob")],
        )
        .unwrap();
        assert_eq!(
            pairs(&result),
            vec![("Alice", "Bob"), ("Bob", "Carol"), ("Carol", "Alice")]
        );
    }

    #[test]
    fn test_impossible_exclusion_exhausts() {
        let err = generate_assignments(&names(&["A", "B"]), "x", &[Constraint::exclude("A", "B")])
            .unwrap_err();
        assert_eq!(err, DrawError::SearchExhausted { attempts: 1000 });
    }

    #[test]
    fn test_single_participant_rejected() {
        let err = generate_assignments(&names(&["Solo"]), "x", &[]).unwrap_err();
        assert_eq!(err, DrawError::InsufficientParticipants { count: 1 });
    }

    #[test]
    fn test_empty_rejected() {
        let err = generate_assignments::<String>(&[], "x", &[]).unwrap_err();
        assert_eq!(err, DrawError::InsufficientParticipants { count: 0 });
    }

    #[test]
    fn test_validation_error_propagates() {
        let err = generate_assignments(
            &names(&["A", "B", "C"]),
            "x",
            &[Constraint::must("A", "A")],
        )
        .unwrap_err();
        match err {
            DrawError::Validation(e) => assert_eq!(e.kind, ValidationErrorKind::SelfMustConstraint),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_golden_draw() {
        let people = names(&["Alice", "Bob", "Carol", "Dave", "Eve"]);
        let result = generate_assignments(&people, "snowflake-42", &[]).unwrap();
        assert_eq!(
            pairs(&result),
            vec![
                ("Alice", "Eve"),
                ("Bob", "Alice"),
                ("Carol", "Dave"),
                ("Dave", "Bob"),
                ("Eve", "Carol"),
            ]
        );
        let indices: Vec<usize> = result.iter().map(|a| a.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_deterministic() {
        let people = names(&["Alice", "Bob", "Carol", "Dave", "Eve", "Frank"]);
        let constraints = vec![
            Constraint::exclude("Alice", "Bob"),
            Constraint::exclude("Bob", "Alice"),
            Constraint::must("Eve", "Frank"),
        ];
        let first = generate_assignments(&people, "holly", &constraints).unwrap();
        for _ in 0..5 {
            assert_eq!(generate_assignments(&people, "holly", &constraints).unwrap(), first);
        }
    }

    #[test]
    fn test_seed_sensitivity() {
        let people = names(&["Alice", "Bob", "Carol", "Dave", "Eve"]);
        let a = generate_assignments(&people, "a", &[]).unwrap();
        let b = generate_assignments(&people, "b", &[]).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_stream_continues_across_attempts() {
        // "noel" fails twice before the forced cycle falls out of the shuffle.
        let people = names(&["Alice", "Bob", "Carol"]);
        let constraints = vec![Constraint::must("Alice", "Bob")];
        let draw = AssignmentEngine::new()
            .draw(&people, "noel", &constraints)
            .unwrap();
        assert_eq!(draw.attempts, 3);
        assert_eq!(draw.receiver_of("Bob"), Some("Carol"));
        assert_eq!(draw.receiver_of("Carol"), Some("Alice"));
    }

    #[test]
    fn test_max_attempts_limits_search() {
        let people = names(&["Alice", "Bob", "Carol"]);
        let constraints = vec![Constraint::must("Alice", "Bob")];
        let err = AssignmentEngine::new()
            .with_max_attempts(2)
            .draw(&people, "noel", &constraints)
            .unwrap_err();
        assert_eq!(err, DrawError::SearchExhausted { attempts: 2 });
    }

    #[test]
    fn test_zero_attempts_exhausts_immediately() {
        let engine = AssignmentEngine::new().with_max_attempts(0);
        assert_eq!(engine.max_attempts(), 0);
        let err = engine.draw(&names(&["A", "B"]), "x", &[]).unwrap_err();
        assert_eq!(err, DrawError::SearchExhausted { attempts: 0 });
    }

    #[test]
    fn test_exclusions_honored() {
        let people = names(&["Alice", "Bob", "Carol", "Dave"]);
        let constraints = vec![
            Constraint::exclude("Alice", "Bob"),
            Constraint::exclude("Bob", "Alice"),
        ];
        for seed in ["x", "y", "z", "test", "alpha", "beta"] {
            let result = generate_assignments(&people, seed, &constraints).unwrap();
            for a in &result {
                assert_ne!((a.giver.as_str(), a.receiver.as_str()), ("Alice", "Bob"));
                assert_ne!((a.giver.as_str(), a.receiver.as_str()), ("Bob", "Alice"));
            }
        }
    }

    #[test]
    fn test_tight_exclusions_golden() {
        let people = names(&["A", "B", "C", "D"]);
        let constraints = vec![
            Constraint::exclude("A", "B"),
            Constraint::exclude("A", "C"),
            Constraint::exclude("B", "A"),
            Constraint::exclude("C", "A"),
        ];
        let result = generate_assignments(&people, "tight", &constraints).unwrap();
        assert_eq!(
            pairs(&result),
            vec![("A", "D"), ("B", "C"), ("C", "B"), ("D", "A")]
        );
    }

    #[test]
    fn test_accepts_str_participants() {
        let result = generate_assignments(&["Alice", "Bob"], "x", &[]).unwrap();
        assert_eq!(result.len(), 2);
    }

    /// Distinct names plus sparse exclusions between them.
    fn draw_input() -> impl Strategy<Value = (Vec<String>, Vec<Constraint>)> {
        (2usize..12).prop_flat_map(|n| {
            let people: Vec<String> = (0..n).map(|i| format!("P{i}")).collect();
            let excludes = proptest::collection::vec((0..n, 0..n), 0..n);
            (Just(people), excludes).prop_map(|(people, pairs)| {
                let constraints = pairs
                    .into_iter()
                    .filter(|(a, b)| a != b)
                    .map(|(a, b)| Constraint::exclude(people[a].clone(), people[b].clone()))
                    .collect();
                (people, constraints)
            })
        })
    }

    proptest! {
        #[test]
        fn prop_draw_is_valid_derangement((people, constraints) in draw_input(), seed in "\\PC{1,24}") {
            match generate_assignments(&people, &seed, &constraints) {
                Ok(result) => {
                    prop_assert_eq!(result.len(), people.len());
                    prop_assert!(audit_assignments(&people, &constraints, &result).is_empty());
                }
                Err(e) => {
                    prop_assert_eq!(e, DrawError::SearchExhausted { attempts: 1000 });
                }
            }
        }

        #[test]
        fn prop_draw_is_deterministic((people, constraints) in draw_input(), seed in "[a-z0-9-]{1,16}") {
            let first = generate_assignments(&people, &seed, &constraints);
            let second = generate_assignments(&people, &seed, &constraints);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_must_pairs_honored(n in 3usize..10, seed in "[a-z]{1,8}") {
            let people: Vec<String> = (0..n).map(|i| format!("P{i}")).collect();
            let constraints = vec![
                Constraint::must(people[0].clone(), people[1].clone()),
                Constraint::must(people[1].clone(), people[2].clone()),
            ];
            let result = generate_assignments(&people, &seed, &constraints);
            prop_assert!(result.is_ok(), "must chain should always draw: {:?}", result);
            let result = result.unwrap();
            prop_assert_eq!(result[0].receiver.as_str(), people[1].as_str());
            prop_assert_eq!(result[1].receiver.as_str(), people[2].as_str());
        }
    }
}
