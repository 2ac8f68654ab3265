//! Лексический анализатор SQL для shardsql

pub mod chars;
pub mod cursor;
pub mod escape;
pub mod keywords;
pub mod lexer;
mod lexer_methods;
mod lexer_readers;
pub mod token;

#[cfg(test)]
pub mod tests;

// Переэкспортируем основные типы
pub use keywords::{Keyword, KEYWORDS};
pub use lexer::Lexer;
pub use token::{Token, TokenType};
