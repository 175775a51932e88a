mod common;
use common::*;
use pretty_assertions::assert_eq;

#[test]
fn test_input_in_program() {
    let mut r = Basic::new();
    r.enter("10 INPUT A");
    r.enter("20 INPUT B");
    r.enter("30 PRINT A * B");
    r.input("6");
    r.input("7");
    r.enter("RUN");
    assert_eq!(exec(&mut r), " ? 6\n ? 7\n42\n");
}

#[test]
fn test_input_redo() {
    let mut r = Basic::new();
    r.input("seven");
    r.input("7");
    r.enter("INPUT A");
    r.enter("PRINT A");
    assert_eq!(exec(&mut r), " ? seven\n?REDO FROM START\n ? 7\n7\n");
}

#[test]
fn test_input_past_end() {
    let mut r = Basic::new();
    r.enter("10 INPUT A");
    r.enter("RUN");
    assert_eq!(exec(&mut r), " ? \n?INPUT PAST END IN 10\n");
}
