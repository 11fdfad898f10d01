// Copyright 2024 The Algex Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Standalone pre-validation gate for equation text.  Not invoked by the
//! resolution pipeline; callers can use it to reject statements before
//! parsing.

use regex::Regex;

lazy_static! {
    static ref VALID_RE: Regex = Regex::new(r"^[A-Z0-9+*/=()\s-]+$").unwrap();
}

/// True iff every character of `text` is an uppercase letter, digit, one
/// of `+ - * / = ( )`, or whitespace.  Empty input is not valid.
pub fn is_valid_equation_token(text: &str) -> bool {
    VALID_RE.is_match(text)
}

#[test]
fn test_valid_equation_tokens() {
    assert!(is_valid_equation_token("A = 5 * 6 + B * (C + D)"));
    assert!(is_valid_equation_token("S = 18"));
    assert!(is_valid_equation_token("X = S / 2 - 1"));
    assert!(is_valid_equation_token("X"));
}

#[test]
fn test_invalid_equation_tokens() {
    assert!(!is_valid_equation_token(""));
    assert!(!is_valid_equation_token("a = 5"));
    assert!(!is_valid_equation_token("C = 3.2 - D"));
    assert!(!is_valid_equation_token("C = 3 \u{2013} D"));
    assert!(!is_valid_equation_token("?X"));
    assert!(!is_valid_equation_token("A = 1;"));
}
