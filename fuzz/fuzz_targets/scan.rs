#![no_main]

use gotestmain::frontend::{lexer, parser, scanner};
use libfuzzer_sys::fuzz_target;

// Whatever parses must scan, and whatever scans must render.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(tokens) = lexer::lex(s) else {
        return;
    };
    if let Ok(file) = parser::parse(&tokens) {
        let classification = scanner::scan(&[file], "example.com/fuzz", "testdata");
        let out = gotestmain::render(&classification);
        assert!(out.is_ok(), "{:?}", out.err());
    }
});
