//! shardsql - лексический анализатор SQL (диалект MySQL) для шардирующего прокси
//!
//! Превращает текст SQL выражения в последовательность типизированных токенов,
//! которую потребляет грамматический парсер.

pub mod common;
pub mod parser;

pub use common::error::{Error, Result};
pub use common::LexerConfig;
pub use parser::{Keyword, Lexer, Token, TokenType};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Разбивает SQL текст на токены, включая завершающий EOF
pub fn tokenize(sql: &str) -> Vec<Token> {
    Lexer::new(sql).tokenize()
}
