#![no_main]

use libfuzzer_sys::fuzz_target;
use vesper_compiler::lexer::Lexer;
use vesper_compiler::token::Token;

fuzz_target!(|data: &[u8]| {
    // The lexer must always make progress and never panic; errors are fine.
    let mut lexer = Lexer::new(data);
    loop {
        match lexer.advance() {
            Ok(st) if st.token == Token::Eof => break,
            _ => {}
        }
    }
});
