//! Пример использования лексического анализатора shardsql

use shardsql::{Lexer, TokenType};

fn main() {
    println!("🔍 Демонстрация лексического анализатора shardsql\n");

    show_tokens("SELECT name, `order` FROM users WHERE id = :id AND age >= 18");
    show_tokens("INSERT INTO t VALUES (0x1F, 08.5, 'it''s', ?, ?)");
    show_error_report();
}

fn show_tokens(sql: &str) {
    println!("📝 {}", sql);
    let mut lexer = Lexer::new(sql);
    for token in lexer.by_ref() {
        println!("   {:<12} {:>6} '{}'", token.token_type, token.code(), token.text());
    }
    println!("   позиционных параметров: {}\n", lexer.positional_arg_count());
}

fn show_error_report() {
    println!("⚠️  Сообщение об ошибке парсера");
    let mut lexer = Lexer::new("SELECT FROM users");
    while let Some(token) = lexer.next() {
        if token.token_type == TokenType::Keyword(shardsql::Keyword::From) {
            lexer.record_error("syntax error");
            break;
        }
    }
    if let Some(message) = lexer.last_error() {
        println!("   {}", message);
    }
}
