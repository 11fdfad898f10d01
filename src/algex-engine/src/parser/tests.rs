// Copyright 2024 The Algex Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use super::*;
use crate::ast::{BinaryOp, Expr, Loc, UnaryOp};
use crate::common::ErrorCode;

fn parse_eq(input: &str) -> Result<Option<Expr>, Vec<EquationError>> {
    parse(input)
}

fn stripped(input: &str) -> Expr {
    parse_eq(input).unwrap().unwrap().strip_loc()
}

fn num(s: &str) -> Box<Expr> {
    Box::new(Expr::Const(
        s.to_string(),
        s.parse().unwrap(),
        Loc::default(),
    ))
}

fn var(s: &str) -> Box<Expr> {
    Box::new(Expr::Var(s.to_string(), Loc::default()))
}

#[test]
fn test_parse_number() {
    let ast = parse_eq("42").unwrap().unwrap();
    assert!(matches!(ast, Expr::Const(s, n, _) if s == "42" && n == 42.0));
}

#[test]
fn test_parse_float() {
    let ast = parse_eq("3.2").unwrap().unwrap();
    assert!(matches!(ast, Expr::Const(s, n, _) if s == "3.2" && (n - 3.2).abs() < 0.001));
}

#[test]
fn test_parse_scientific_notation() {
    let ast = parse_eq("1e10").unwrap().unwrap();
    assert!(matches!(ast, Expr::Const(s, n, _) if s == "1e10" && n == 1e10));
}

#[test]
fn test_parse_identifier() {
    let ast = parse_eq("S").unwrap().unwrap();
    assert!(matches!(ast, Expr::Var(id, _) if id == "S"));
}

#[test]
fn test_parse_empty() {
    assert_eq!(None, parse_eq("").unwrap());
    assert_eq!(None, parse_eq("   ").unwrap());
}

#[test]
fn test_precedence() {
    // multiplication binds tighter than addition
    let expected = Expr::Op2(
        BinaryOp::Add,
        num("1"),
        Box::new(Expr::Op2(BinaryOp::Mul, num("2"), num("3"), Loc::default())),
        Loc::default(),
    );
    assert_eq!(expected, stripped("1 + 2 * 3"));
}

#[test]
fn test_left_associativity() {
    // 1 - 2 - 3 is (1 - 2) - 3
    let expected = Expr::Op2(
        BinaryOp::Sub,
        Box::new(Expr::Op2(BinaryOp::Sub, num("1"), num("2"), Loc::default())),
        num("3"),
        Loc::default(),
    );
    assert_eq!(expected, stripped("1 - 2 - 3"));
}

#[test]
fn test_parens_override_precedence() {
    let expected = Expr::Op2(
        BinaryOp::Mul,
        Box::new(Expr::Op2(BinaryOp::Add, num("1"), num("2"), Loc::default())),
        num("3"),
        Loc::default(),
    );
    assert_eq!(expected, stripped("(1 + 2) * 3"));
}

#[test]
fn test_unary_negative() {
    let expected = Expr::Op2(
        BinaryOp::Mul,
        Box::new(Expr::Op1(UnaryOp::Negative, var("S"), Loc::default())),
        num("2"),
        Loc::default(),
    );
    assert_eq!(expected, stripped("-S * 2"));
}

#[test]
fn test_unary_positive() {
    let expected = Expr::Op1(UnaryOp::Positive, num("4"), Loc::default());
    assert_eq!(expected, stripped("+4"));
}

#[test]
fn test_mixed_vars_and_consts() {
    // the target equation shape from the worked example
    let expected = Expr::Op2(
        BinaryOp::Add,
        Box::new(Expr::Op2(BinaryOp::Mul, num("5"), num("6"), Loc::default())),
        Box::new(Expr::Op2(
            BinaryOp::Mul,
            var("B"),
            Box::new(Expr::Op2(BinaryOp::Add, var("C"), var("D"), Loc::default())),
            Loc::default(),
        )),
        Loc::default(),
    );
    assert_eq!(expected, stripped("5 * 6 + B * (C + D)"));
}

#[test]
fn test_division() {
    let expected = Expr::Op2(BinaryOp::Div, var("A"), var("B"), Loc::default());
    assert_eq!(expected, stripped("A / B"));
}

#[test]
fn test_loc_spans() {
    let ast = parse_eq("A + 12").unwrap().unwrap();
    assert_eq!(Loc::new(0, 6), ast.get_loc());
    if let Expr::Op2(_, l, r, _) = ast {
        assert_eq!(Loc::new(0, 1), l.get_loc());
        assert_eq!(Loc::new(4, 6), r.get_loc());
    } else {
        panic!("expected Op2");
    }
}

#[test]
fn test_error_trailing_operator() {
    let errs = parse_eq("1 +").unwrap_err();
    assert_eq!(1, errs.len());
    assert_eq!(ErrorCode::UnrecognizedEof, errs[0].code);
}

#[test]
fn test_error_unclosed_paren() {
    let errs = parse_eq("(1 + 2").unwrap_err();
    assert_eq!(ErrorCode::UnrecognizedEof, errs[0].code);
}

#[test]
fn test_error_extra_token() {
    let errs = parse_eq("1 2").unwrap_err();
    assert_eq!(ErrorCode::ExtraToken, errs[0].code);
    assert_eq!(2, errs[0].start);
}

#[test]
fn test_error_bad_character() {
    let errs = parse_eq("1 ; 2").unwrap_err();
    assert_eq!(ErrorCode::UnrecognizedToken, errs[0].code);
}

#[test]
fn test_error_double_operator() {
    let errs = parse_eq("1 * / 2").unwrap_err();
    assert_eq!(ErrorCode::UnrecognizedToken, errs[0].code);
}
