mod common;
use common::*;
use pretty_assertions::assert_eq;

#[test]
fn test_precedence() {
    let mut r = Basic::new();
    r.enter("PRINT 1+2*3");
    assert_eq!(exec(&mut r), "7\n");
    r.enter("PRINT (1+2)*3");
    assert_eq!(exec(&mut r), "9\n");
}

#[test]
fn test_left_assoc() {
    let mut r = Basic::new();
    r.enter("PRINT 100/10/5");
    assert_eq!(exec(&mut r), "2\n");
    r.enter("PRINT 10-4-3");
    assert_eq!(exec(&mut r), "3\n");
}

#[test]
fn test_int_division() {
    let mut r = Basic::new();
    r.enter("PRINT 10/4");
    assert_eq!(exec(&mut r), "2\n");
    r.enter("PRINT -7/2");
    assert_eq!(exec(&mut r), "-3\n");
}

#[test]
fn test_variables() {
    let mut r = Basic::new();
    r.enter("LET total = 1+2*3");
    r.enter("PRINT total*2");
    assert_eq!(exec(&mut r), "14\n");
    r.enter("PRINT TOTAL");
    assert_eq!(exec(&mut r), "?VARIABLE NOT DEFINED IN (6..11)\n");
}

#[test]
fn test_overflow_and_division_by_zero() {
    let mut r = Basic::new();
    r.enter("LET A = 100000 * 100000");
    assert_eq!(exec(&mut r), "?OVERFLOW IN (15..16)\n");
    r.enter("PRINT 1/0");
    assert_eq!(exec(&mut r), "?DIVISION BY ZERO IN (7..8)\n");
    r.enter("PRINT 99999999999");
    assert_eq!(exec(&mut r), "?SYNTAX ERROR IN (6..17); NUMBER TOO LARGE\n");
}
