use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_advance_and_peek() {
    let mut cursor = Cursor::new("12");
    assert_eq!(cursor.peek(), Some('1'));
    assert_eq!(cursor.advance(), Some('1'));
    assert_eq!(cursor.advance(), Some('2'));
    assert_eq!(cursor.advance(), None);
    assert!(cursor.is_at_end());
    assert_eq!(cursor.position(), 2);
}

#[test]
fn test_eat_while() {
    let mut cursor = Cursor::new("0042 7");
    assert_eq!(cursor.eat_while(|c| c.is_ascii_digit()), "0042");
    assert_eq!(cursor.position(), 4);
    assert!(cursor.skip_whitespace());
    assert!(!cursor.skip_whitespace());
    assert_eq!(cursor.peek(), Some('7'));
}

#[test]
fn test_multibyte_offsets() {
    let mut cursor = Cursor::new("é1");
    assert_eq!(cursor.advance(), Some('é'));
    assert_eq!(cursor.position(), 2);
}

#[test]
fn test_skip_to_whitespace() {
    let mut cursor = Cursor::new("1a2b 34");
    cursor.skip_to_whitespace();
    assert_eq!(cursor.position(), 4);
    cursor.skip_whitespace();
    cursor.skip_to_whitespace();
    assert!(cursor.is_at_end());
}
