//! Serialization round trips for the diagnostic model.
//!
//! Only built with `--features serde`.

#![cfg(feature = "serde")]
#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pinpoint_diagnostic::{Diagnostic, Note, Position, Report};
use pretty_assertions::assert_eq;

fn sample() -> Diagnostic<String> {
    let at = Position::new((1, 6), (1, 7), "nums.txt");
    Diagnostic::new()
        .with_report(
            Report::error(Some("E1001".to_string()), "Parse error on input".to_string())
                .with_primary(at.clone(), "unexpected 'a' in number")
                .with_suggestion(at, "0")
                .with_note(Note::Hint("digits only".to_string())),
        )
        .with_report(
            Report::warning(None, "trailing input".to_string())
                .with_secondary(Position::default(), "here"),
        )
        .with_file("nums.txt", "00000a2223266")
        .with_file("other.txt", "1 2 3")
}

#[test]
fn diagnostic_round_trips_through_bincode() {
    let diag = sample();
    let bytes = bincode::serialize(&diag).unwrap();
    let back: Diagnostic<String> = bincode::deserialize(&bytes).unwrap();

    assert_eq!(back, diag);
    assert_eq!(back.file("other.txt"), Some("1 2 3"));
}

#[test]
fn position_round_trips_through_bincode() {
    let pos = Position::new((2, 1), (3, 4), "multi.txt");
    let bytes = bincode::serialize(&pos).unwrap();
    let back: Position = bincode::deserialize(&bytes).unwrap();
    assert_eq!(back, pos);
}
