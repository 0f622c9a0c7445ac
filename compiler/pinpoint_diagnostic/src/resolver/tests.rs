use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_line_offset_table_build_single_line() {
    let table = LineOffsetTable::build("hello world");
    assert_eq!(table.line_count(), 1);
    assert_eq!(table.line_start_offset(1), Some(0));
    assert_eq!(table.line_start_offset(2), None);
}

#[test]
fn test_line_offset_table_build_multiple_lines() {
    let table = LineOffsetTable::build("line1\nline2\nline3");
    assert_eq!(table.line_count(), 3);
    assert_eq!(table.line_start_offset(1), Some(0));
    assert_eq!(table.line_start_offset(2), Some(6));
    assert_eq!(table.line_start_offset(3), Some(12));
    assert_eq!(table.line_start_offset(4), None);
}

#[test]
fn test_line_from_offset() {
    let table = LineOffsetTable::build("line1\nline2\nline3");
    assert_eq!(table.line_from_offset(0), 1); // 'l' of line1
    assert_eq!(table.line_from_offset(5), 1); // '\n' after line1
    assert_eq!(table.line_from_offset(6), 2); // 'l' of line2
    assert_eq!(table.line_from_offset(11), 2); // '\n' after line2
    assert_eq!(table.line_from_offset(12), 3); // 'l' of line3
}

#[test]
fn test_offset_to_line_col() {
    let source = "abc\ndefgh\nij";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 0), (1, 1)); // 'a'
    assert_eq!(table.offset_to_line_col(source, 2), (1, 3)); // 'c'
    assert_eq!(table.offset_to_line_col(source, 4), (2, 1)); // 'd'
    assert_eq!(table.offset_to_line_col(source, 7), (2, 4)); // 'g'
    assert_eq!(table.offset_to_line_col(source, 10), (3, 1)); // 'i'
}

#[test]
fn test_empty_source() {
    let table = LineOffsetTable::build("");
    assert_eq!(table.line_count(), 1);
    assert_eq!(table.offset_to_line_col("", 0), (1, 1));
}

#[test]
fn test_unicode_columns_count_chars() {
    let source = "αβγ\nδε";
    let table = LineOffsetTable::build(source);
    // Greek letters are 2 bytes each
    assert_eq!(table.offset_to_line_col(source, 0), (1, 1)); // 'α'
    assert_eq!(table.offset_to_line_col(source, 2), (1, 2)); // 'β'
    assert_eq!(table.offset_to_line_col(source, 4), (1, 3)); // 'γ'
    assert_eq!(table.offset_to_line_col(source, 7), (2, 1)); // 'δ'
}

#[test]
fn test_mid_character_offset_does_not_panic() {
    let source = "αβ";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 1), (1, 2));
}

#[test]
fn test_offset_past_end_is_clamped() {
    let source = "ab\ncd";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 5), (2, 3));
    assert_eq!(table.offset_to_line_col(source, 500), (2, 3));
}

#[test]
fn test_trailing_newline() {
    let table = LineOffsetTable::build("line1\nline2\n");
    assert_eq!(table.line_count(), 3);
    assert_eq!(table.line_from_offset(12), 3);
}

#[test]
fn test_line_start_offset_zero() {
    let table = LineOffsetTable::build("test");
    assert_eq!(table.line_start_offset(0), None);
}

#[test]
fn test_source_resolver() {
    let resolver = SourceResolver::new("nums.txt", "12 34\n5a");
    assert_eq!(resolver.file(), "nums.txt");
    assert_eq!(resolver.resolve(0), SourcePos::new(1, 1, "nums.txt"));
    assert_eq!(resolver.resolve(7), SourcePos::new(2, 2, "nums.txt"));
}

#[test]
fn test_closure_resolver() {
    let resolver = |offset: usize| SourcePos::new(1, u32::try_from(offset).unwrap_or(0) + 1, "x");
    assert_eq!(resolver.resolve(4), SourcePos::new(1, 5, "x"));
}
