use super::*;
use pretty_assertions::assert_eq;
use std::collections::HashSet;

#[test]
fn test_position_display() {
    let pos = Position::new((3, 5), (3, 9), "src/main.num");
    assert_eq!(pos.to_string(), "src/main.num@3:5-3:9");
}

#[test]
fn test_default_position() {
    let pos = Position::default();
    assert_eq!(pos.begin, (1, 1));
    assert_eq!(pos.end, (1, 1));
    assert_eq!(pos.file, "<no-file>");
    assert!(!pos.has_file());
    assert_eq!(pos.to_string(), "<no-file>@1:1-1:1");
}

#[test]
fn test_point_spans_one_column() {
    let pos = Position::point(2, 7, "a.num");
    assert_eq!(pos.begin, (2, 7));
    assert_eq!(pos.end, (2, 8));
    assert!(!pos.is_multiline());
}

#[test]
fn test_compare_ignores_file() {
    let a = Position::new((1, 1), (1, 4), "a.num");
    let b = Position::new((1, 1), (1, 4), "b.num");
    assert_eq!(a.compare(&b), Ordering::Equal);
    // Equality still distinguishes files.
    assert_ne!(a, b);
}

#[test]
fn test_compare_is_lexicographic() {
    let early = Position::new((1, 9), (4, 1), "x");
    let late = Position::new((2, 1), (2, 2), "x");
    assert_eq!(early.compare(&late), Ordering::Less);

    let short = Position::new((2, 1), (2, 2), "x");
    let long = Position::new((2, 1), (2, 5), "x");
    assert_eq!(short.compare(&long), Ordering::Less);
    assert_eq!(long.compare(&short), Ordering::Greater);
}

#[test]
fn test_sort_by_compare() {
    let mut positions = vec![
        Position::point(3, 1, "c"),
        Position::point(1, 2, "a"),
        Position::point(1, 1, "b"),
    ];
    positions.sort_by(Position::compare);
    let begins: Vec<_> = positions.iter().map(|p| p.begin).collect();
    assert_eq!(begins, vec![(1, 1), (1, 2), (3, 1)]);
}

#[test]
fn test_position_hash() {
    let mut set = HashSet::new();
    set.insert(Position::point(1, 1, "a"));
    set.insert(Position::point(1, 1, "a")); // duplicate
    set.insert(Position::point(1, 1, "b"));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_multiline() {
    let pos = Position::new((1, 4), (3, 2), "m");
    assert!(pos.is_multiline());
}
