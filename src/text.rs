//! Organizer text formats.
//!
//! Participants are typed as a comma- or newline-separated list.
//! Constraints are typed one per line:
//!
//! ```text
//! Alice -> Bob     Alice must give to Bob
//! Alice !-> Carol  Alice may not give to Carol (also "Alice !> Carol")
//! ```

use crate::models::Constraint;

/// Splits participant input on commas and newlines, trimming each name and
/// dropping empty entries. Order is kept; duplicates are not removed.
pub fn parse_participants(input: &str) -> Vec<String> {
    input
        .split([',', '\n'])
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

/// Parses constraint lines.
///
/// Lines that don't match either form, or that name someone outside
/// `participants`, are skipped silently.
pub fn parse_constraints<S: AsRef<str>>(input: &str, participants: &[S]) -> Vec<Constraint> {
    let known = |name: &str| participants.iter().any(|p| p.as_ref() == name);

    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let parsed = if line.contains('!') {
                split_exclude(line).map(|(from, to)| Constraint::exclude(from, to))
            } else {
                split_must(line).map(|(from, to)| Constraint::must(from, to))
            };
            let constraint = parsed?;
            (known(&constraint.from) && known(&constraint.to)).then_some(constraint)
        })
        .collect()
}

/// Renders constraints back to the line format, one per line.
pub fn format_constraints(constraints: &[Constraint]) -> String {
    constraints
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `from -> to`, split at the first arrow that has a name before it.
fn split_must(line: &str) -> Option<(&str, &str)> {
    line.match_indices("->")
        .find(|&(pos, _)| pos > 0)
        .and_then(|(pos, arrow)| split_trimmed(line, pos, arrow.len()))
}

/// `from !-> to` or `from !> to`.
fn split_exclude(line: &str) -> Option<(&str, &str)> {
    line.match_indices('!')
        .filter(|&(pos, _)| pos > 0)
        .find_map(|(pos, _)| {
            let rest = &line[pos + 1..];
            let arrow = if rest.starts_with("->") {
                3
            } else if rest.starts_with('>') {
                2
            } else {
                return None;
            };
            split_trimmed(line, pos, arrow)
        })
}

fn split_trimmed(line: &str, pos: usize, arrow: usize) -> Option<(&str, &str)> {
    let from = line[..pos].trim();
    let to = line[pos + arrow..].trim();
    (!from.is_empty() && !to.is_empty()).then_some((from, to))
}
