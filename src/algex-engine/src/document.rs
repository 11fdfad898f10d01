// Copyright 2024 The Algex Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Extraction of equation statements and the query target from a raw
//! text document.

use regex::Regex;

use crate::common::{EquationResult, Ident, Result};
use crate::{document_err, eqn_err};

lazy_static! {
    // a statement is the run of allowed characters anchored at the start
    // of a line; the first disallowed character (e.g. the ';' terminator)
    // truncates the match
    static ref STATEMENT_RE: Regex = Regex::new(r"(?m)^[\w\d.+*/\-= ()]+").unwrap();
    static ref TARGET_RE: Regex = Regex::new(r"\?([A-Z]+)").unwrap();
}

/// Replace en/em dash variants (as pasted from word processors) with an
/// ASCII minus so the lexer sees a single subtraction operator.
fn normalize_dashes(text: &str) -> String {
    text.replace('\u{2013}', "-").replace('\u{2014}', "-")
}

/// Extract the ordered sequence of equation statements from a document.
/// Lines that don't begin with an allowed-character run (like the `?X`
/// query line) contribute nothing; whitespace-only matches are dropped.
pub fn extract_statements(text: &str) -> Vec<String> {
    let text = normalize_dashes(text);
    STATEMENT_RE
        .find_iter(&text)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Extract the target variable name from the first `?NAME` query marker.
/// Additional markers are ignored; a single document resolves a single
/// target.
pub fn extract_target(text: &str) -> Result<Ident> {
    match TARGET_RE.captures(text) {
        Some(captures) => Ok(captures[1].to_string()),
        None => document_err!(
            NoTargetVariable,
            "no ?TARGET query marker in document".to_string()
        ),
    }
}

/// Split a single equation statement into its variable name and
/// expression text.  The left-hand side is taken verbatim after
/// trimming; it is not validated here.
pub fn parse_statement(statement: &str) -> EquationResult<(Ident, String)> {
    match statement.split_once('=') {
        Some((lhs, rhs)) => {
            let lhs = lhs.trim();
            let rhs = rhs.trim();
            if rhs.is_empty() {
                return eqn_err!(EmptyEquation, statement.len(), statement.len());
            }
            Ok((lhs.to_string(), rhs.to_string()))
        }
        None => eqn_err!(MalformedEquation, 0, statement.len()),
    }
}

#[cfg(test)]
use crate::common::ErrorCode;

#[test]
fn test_extract_statements() {
    let doc = "
    X = 5 * 6 + B * (C + D);
    C = 3.2 - D;
    D = S + 8;
    B = S;
    S = 18;
    ?X
    ";

    let expected = vec![
        "X = 5 * 6 + B * (C + D)",
        "C = 3.2 - D",
        "D = S + 8",
        "B = S",
        "S = 18",
    ];
    assert_eq!(expected, extract_statements(doc));
}

#[test]
fn test_extract_statements_normalizes_dashes() {
    let doc = "C = 3.2 \u{2013} D;\n?C\n";
    assert_eq!(vec!["C = 3.2 - D"], extract_statements(doc));

    let doc = "C = 3.2 \u{2014} D;\n?C\n";
    assert_eq!(vec!["C = 3.2 - D"], extract_statements(doc));
}

#[test]
fn test_extract_statements_skips_query_and_blank_lines() {
    let doc = "?X\n\n   \nA = 1;\n";
    assert_eq!(vec!["A = 1"], extract_statements(doc));
}

#[test]
fn test_extract_statements_truncates_at_terminator() {
    // everything after the first disallowed character is dropped
    let stmts = extract_statements("A = 1 + 2; trailing garbage ?!\n");
    assert_eq!(vec!["A = 1 + 2"], stmts);
}

#[test]
fn test_extract_target() {
    assert_eq!("X", extract_target("S = 18;\n?X\n").unwrap());
    // only the first marker is used
    assert_eq!("FOO", extract_target("?FOO ?BAR").unwrap());
}

#[test]
fn test_extract_target_missing() {
    let err = extract_target("S = 18;\n").unwrap_err();
    assert_eq!(ErrorCode::NoTargetVariable, err.code);
}

#[test]
fn test_parse_statement() {
    assert_eq!(
        ("A".to_string(), "1 + 2".to_string()),
        parse_statement("A = 1 + 2").unwrap()
    );

    // re-joining and re-parsing yields the same pair
    let (var, expr) = parse_statement("A = 1 + 2").unwrap();
    let rejoined = format!("{} = {}", var, expr);
    assert_eq!((var, expr), parse_statement(&rejoined).unwrap());
}

#[test]
fn test_parse_statement_splits_on_first_equals() {
    // a second '=' lands in the expression text and fails later, at
    // parse time -- not here
    assert_eq!(
        ("A".to_string(), "1 = 2".to_string()),
        parse_statement("A = 1 = 2").unwrap()
    );
}

#[test]
fn test_parse_statement_malformed() {
    let err = parse_statement("A + 1").unwrap_err();
    assert_eq!(ErrorCode::MalformedEquation, err.code);

    let err = parse_statement("A =   ").unwrap_err();
    assert_eq!(ErrorCode::EmptyEquation, err.code);
}
