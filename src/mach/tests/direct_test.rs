use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_direct_does_not_touch_listing() {
    let mut p = program(&[(10, "PRINT 1")]);
    let mut t = Transcript::new();
    p.run_direct("LET Y = 5", &mut t).unwrap();
    p.run_direct("PRINT Y", &mut t).unwrap();
    assert_eq!(t.take_output(), "5\n");
    let listed: Vec<(LineNumber, &str)> = p.list().collect();
    assert_eq!(listed, vec![(10, "PRINT 1")]);
}

#[test]
fn test_direct_control_flow_is_rejected() {
    let mut p = program(&[(10, "PRINT 1")]);
    let mut t = Transcript::new();
    for text in &["GOTO 10", "END", "IF 1 = 1 THEN 10"] {
        let e = p.run_direct(text, &mut t).unwrap_err();
        assert_eq!(e.code(), ErrorCode::IllegalDirect);
    }
    assert_eq!(p.run_direct("REM", &mut t).unwrap_err().code(), ErrorCode::IllegalDirect);
    assert_eq!(t.output(), "");
}

#[test]
fn test_direct_syntax_error() {
    let mut p = Program::new();
    let mut t = Transcript::new();
    let e = p.run_direct("PRINT (", &mut t).unwrap_err();
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    assert!(e.is_direct());
}

#[test]
fn test_direct_keeps_cursor() {
    let mut p = program(&[(10, "PRINT 1"), (20, "PRINT Y"), (30, "PRINT 3")]);
    let mut t = Transcript::new();
    assert!(run(&mut p, &mut t).is_err());
    assert_eq!(p.state().cursor(), Some(20));
    p.run_direct("LET Y = 2", &mut t).unwrap();
    assert_eq!(p.state().cursor(), Some(20));
}

#[test]
fn test_direct_input() {
    let mut p = Program::new();
    let mut t = Transcript::new();
    t.push_input("x");
    t.push_input("9");
    p.run_direct("INPUT V", &mut t).unwrap();
    assert_eq!(p.state().value("V").unwrap(), 9);
    assert_eq!(t.output(), " ? x\n?REDO FROM START\n ? 9\n");
}
