// Copyright 2024 The Algex Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use algex_engine::resolve;

const EXIT_FAILURE: i32 = 1;

macro_rules! die(
    ($($arg:tt)*) => { {
        eprintln!($($arg)*);
        std::process::exit(EXIT_FAILURE)
    } }
);

fn main() {
    let document = "
    X = 5 * 6 + B * (C + D);
    C = 3.2 - D;
    D = S + 8;
    B = S;
    S = 18;
    ?X
    ";

    match resolve(document) {
        Ok(value) => println!("{}", value),
        Err(err) => die!("error: {}", err),
    }
}
