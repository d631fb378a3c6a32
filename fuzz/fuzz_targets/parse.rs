#![no_main]

use gotestmain::frontend::{lexer, parser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Go sources are UTF-8; anything else is rejected before lexing
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(tokens) = lexer::lex(s) {
            let _ = parser::parse(&tokens);
        }
    }
});
