mod common;
use common::*;
use pretty_assertions::assert_eq;

#[test]
fn test_let_print_end() {
    let mut r = Basic::new();
    r.enter("10 LET X = 3");
    r.enter("20 PRINT X");
    r.enter("30 END");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "3\n");
}

#[test]
fn test_rem_is_skipped() {
    let mut r = Basic::new();
    r.enter("10 REM PRINT 1");
    r.enter("20 PRINT 2");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "2\n");
}

#[test]
fn test_goto() {
    let mut r = Basic::new();
    r.enter("10 GOTO 30");
    r.enter("20 PRINT 20");
    r.enter("30 PRINT 30");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "30\n");
}

#[test]
fn test_goto_missing_line() {
    let mut r = Basic::new();
    r.enter("10 LET A = 1");
    r.enter("20 GOTO 999");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "?LINE NUMBER ERROR IN 20 (5..8)\n");
    r.enter("PRINT A");
    assert_eq!(exec(&mut r), "1\n");
}

#[test]
fn test_goto_line_deleted_later() {
    let mut r = Basic::new();
    r.enter("10 GOTO 30");
    r.enter("30 PRINT 30");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "30\n");
    r.enter("30");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "?LINE NUMBER ERROR IN 10 (5..7)\n");
}

#[test]
fn test_chained_assignment() {
    let mut r = Basic::new();
    r.enter("LET A = B = 4");
    r.enter("PRINT A + B");
    assert_eq!(exec(&mut r), "8\n");
}

#[test]
fn test_syntax_errors_are_reported_on_entry() {
    let mut r = Basic::new();
    r.enter("10 GOTO X");
    r.enter("20 LET X");
    r.enter("30 IF X THEN 10");
    assert_eq!(
        exec(&mut r),
        "?SYNTAX ERROR IN 10 (5..6); EXPECTED LINE NUMBER\n\
         ?SYNTAX ERROR IN 20 (4..5); EXPECTED ASSIGNMENT\n\
         ?SYNTAX ERROR IN 30; NO COMPARISON OPERATOR FOUND\n"
    );
    r.enter("LIST");
    assert_eq!(exec(&mut r), "");
}
