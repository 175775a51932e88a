use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_numbered() {
    let l = Line::new("10 LET X = 3").unwrap();
    assert_eq!(l.number(), Some(10));
    assert_eq!(l.text(), "LET X = 3");
    assert!(!l.is_direct());
    assert_eq!(l.to_string(), "10 LET X = 3");
}

#[test]
fn test_number_only() {
    let l = Line::new("  20   ").unwrap();
    assert_eq!(l.number(), Some(20));
    assert!(l.is_empty());
}

#[test]
fn test_no_space_after_number() {
    let l = Line::new("10LET X=1").unwrap();
    assert_eq!(l.number(), Some(10));
    assert_eq!(l.text(), "LET X=1");
}

#[test]
fn test_direct() {
    let l = Line::new("PRINT X\r\n").unwrap();
    assert!(l.is_direct());
    assert_eq!(l.text(), "PRINT X");
}

#[test]
fn test_bad_numbers() {
    assert_eq!(
        Line::new("0 END").unwrap_err().to_string(),
        "SYNTAX ERROR; INVALID LINE NUMBER"
    );
    assert!(Line::new("99999999999 END").is_err());
}
