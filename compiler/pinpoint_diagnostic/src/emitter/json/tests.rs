use super::*;
use crate::{Diagnostic, Note};

fn sample_report() -> Report<String> {
    Report::error(Some("E0002".to_string()), "invalid number".to_string())
        .with_primary(Position::point(1, 6, "nums.txt"), "unexpected 'a'")
        .with_secondary(Position::point(1, 1, "nums.txt"), "number starts \"here\"")
        .with_note(Note::Hint("remove the letter".to_string()))
}

#[test]
fn test_json_emitter() {
    let mut output = Vec::new();
    let mut emitter = JsonEmitter::new(&mut output);

    emitter.begin();
    emitter.emit(&sample_report());
    emitter.end();
    DiagnosticEmitter::<String>::flush(&mut emitter);

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("\"severity\": \"error\""));
    assert!(text.contains("\"code\": \"E0002\""));
    assert!(text.contains("\"headline\": \"invalid number\""));
    assert!(text.contains("\"kind\": \"primary\""));
    assert!(text.contains("\"kind\": \"secondary\""));
    assert!(text.contains("\"file\": \"nums.txt\""));
    assert!(text.contains("\"begin\": { \"line\": 1, \"column\": 6 }"));
    assert!(text.contains("\"end\": { \"line\": 1, \"column\": 7 }"));
    assert!(text.contains("number starts \\\"here\\\""));
    assert!(text.contains("{ \"kind\": \"hint\", \"message\": \"remove the letter\" }"));
}

#[test]
fn test_json_emitter_diagnostic() {
    let mut output = Vec::new();
    let mut emitter = JsonEmitter::new(&mut output);

    let diag = Diagnostic::new()
        .with_report(Report::error(None, "error 1".to_string()))
        .with_report(Report::warning(None, "warning 1".to_string()));

    emitter.begin();
    emitter.emit_diagnostic(&diag);
    emitter.end();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("\"code\": null"));
    assert!(text.contains("error 1"));
    assert!(text.contains("warning 1"));
    assert!(text.contains("\"severity\": \"warning\""));
    // Reports are separated by exactly one comma.
    assert_eq!(text.matches("  },\n").count(), 1);
}
