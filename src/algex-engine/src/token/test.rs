// Copyright 2024 The Algex Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use super::Token::*;
use super::{Lexer, Token};
use crate::common::ErrorCode;

// straight from LALRPOP
fn test(input: &str, expected: Vec<(&str, Token)>) {
    // use $ to signal EOL because it can be replaced with a single space
    // for spans, and because it applies also to r#XXX# style strings:
    let input = input.replace('$', "\n");

    let lexer = Lexer::new(&input);
    let len = expected.len();
    for (token, (expected_span, expected_tok)) in lexer.zip(expected.into_iter()) {
        println!("token: {:?}", token);
        let expected_start = expected_span.find('~').unwrap();
        let expected_end = expected_span.rfind('~').unwrap() + 1;
        assert_eq!(Ok((expected_start, expected_tok, expected_end)), token);
    }

    let lexer = Lexer::new(&input);
    assert_eq!(None, lexer.skip(len).next());
}

#[test]
fn negative_num() {
    test("-3", vec![("~ ", Minus), (" ~", Num("3"))]);
}

#[test]
fn pairs() {
    test(
        "((B) 1)",
        vec![
            ("~      ", LParen),
            (" ~     ", LParen),
            ("  ~    ", Ident("B")),
            ("   ~   ", RParen),
            ("     ~ ", Num("1")),
            ("      ~", RParen),
        ],
    );
}

#[test]
fn ops() {
    test(
        "1 + 2 * 3 / 4 - 5",
        vec![
            ("~                ", Num("1")),
            ("  ~              ", Plus),
            ("    ~            ", Num("2")),
            ("      ~          ", Mul),
            ("        ~        ", Num("3")),
            ("          ~      ", Div),
            ("            ~    ", Num("4")),
            ("              ~  ", Minus),
            ("                ~", Num("5")),
        ],
    );
}

#[test]
fn decimal() {
    test(
        "3.2 - D",
        vec![
            ("~~~    ", Num("3.2")),
            ("    ~  ", Minus),
            ("      ~", Ident("D")),
        ],
    );
}

#[test]
fn idents() {
    test(
        "_3 n3_ SX",
        vec![
            ("~~       ", Ident("_3")),
            ("   ~~~   ", Ident("n3_")),
            ("       ~~", Ident("SX")),
        ],
    );
}

#[test]
fn newline_is_whitespace() {
    test("1$2", vec![("~  ", Num("1")), ("  ~", Num("2"))]);
}

#[test]
fn unrecognized_token() {
    let mut lexer = Lexer::new("1 ? 2");
    assert_eq!(Some(Ok((0, Num("1"), 1))), lexer.next());
    let err = lexer.next().unwrap().unwrap_err();
    assert_eq!(ErrorCode::UnrecognizedToken, err.code);
    assert_eq!(2, err.start);
}

#[test]
fn empty_input() {
    let mut lexer = Lexer::new("   ");
    assert_eq!(None, lexer.next());
}
