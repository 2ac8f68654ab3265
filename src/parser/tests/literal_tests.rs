//! Тесты чисел, строк и параметров

use crate::parser::{Keyword, Lexer, TokenType};

fn first(sql: &str) -> (TokenType, Vec<u8>) {
    let token = Lexer::new(sql).lex();
    (token.token_type, token.value)
}

fn pairs(sql: &str) -> Vec<(TokenType, String)> {
    Lexer::new(sql)
        .map(|t| (t.token_type, t.text().into_owned()))
        .collect()
}

#[test]
fn test_decimal_numbers() {
    for sql in ["0", "7", "123", "999999", "1.5", "3.", "1.5e-3", "1E+10", "2e5", "1e"] {
        assert_eq!(first(sql), (TokenType::Number, sql.as_bytes().to_vec()), "{}", sql);
    }
}

#[test]
fn test_hex_numbers() {
    assert_eq!(first("0x1A"), (TokenType::Number, b"0x1A".to_vec()));
    assert_eq!(first("0XdeadBEEF"), (TokenType::Number, b"0XdeadBEEF".to_vec()));
    assert_eq!(first("0x"), (TokenType::Number, b"0x".to_vec()));

    // hex не имеет дробной части
    assert_eq!(
        pairs("0x1A.5"),
        vec![
            (TokenType::Number, "0x1A".to_string()),
            (TokenType::Number, ".5".to_string()),
        ]
    );
    assert_eq!(
        pairs("0xG"),
        vec![
            (TokenType::Number, "0x".to_string()),
            (TokenType::Identifier, "G".to_string()),
        ]
    );
}

#[test]
fn test_octal_numbers() {
    assert_eq!(first("0777"), (TokenType::Number, b"0777".to_vec()));
    assert_eq!(first("00"), (TokenType::Number, b"00".to_vec()));
}

#[test]
fn test_invalid_octal() {
    assert_eq!(first("08"), (TokenType::LexError, b"08".to_vec()));
    assert_eq!(first("078"), (TokenType::LexError, b"078".to_vec()));
    assert_eq!(first("0899"), (TokenType::LexError, b"0899".to_vec()));
}

#[test]
fn test_invalid_octal_rescued_by_fraction_or_exponent() {
    assert_eq!(first("08.5"), (TokenType::Number, b"08.5".to_vec()));
    assert_eq!(first("09e2"), (TokenType::Number, b"09e2".to_vec()));
    assert_eq!(first("0.5"), (TokenType::Number, b"0.5".to_vec()));
    assert_eq!(first("07E-1"), (TokenType::Number, b"07E-1".to_vec()));
}

#[test]
fn test_leading_decimal_point() {
    assert_eq!(first(".5"), (TokenType::Number, b".5".to_vec()));
    assert_eq!(first(".5e3"), (TokenType::Number, b".5e3".to_vec()));
    // после ведущей точки вторая дробная часть не читается
    assert_eq!(
        pairs(".5.5"),
        vec![
            (TokenType::Number, ".5".to_string()),
            (TokenType::Number, ".5".to_string()),
        ]
    );
}

#[test]
fn test_number_boundaries() {
    assert_eq!(
        pairs("123abc 1.2.3"),
        vec![
            (TokenType::Number, "123".to_string()),
            (TokenType::Identifier, "abc".to_string()),
            (TokenType::Number, "1.2".to_string()),
            (TokenType::Number, ".3".to_string()),
        ]
    );
}

#[test]
fn test_string_literals() {
    assert_eq!(first("'hello'"), (TokenType::StringLiteral, b"hello".to_vec()));
    assert_eq!(first("\"double\""), (TokenType::StringLiteral, b"double".to_vec()));
    assert_eq!(first("''"), (TokenType::StringLiteral, Vec::new()));
    assert_eq!(first("'a\"b'"), (TokenType::StringLiteral, b"a\"b".to_vec()));
}

#[test]
fn test_doubled_delimiter() {
    assert_eq!(first("'a''b'"), (TokenType::StringLiteral, b"a'b".to_vec()));
    assert_eq!(first("'a'''"), (TokenType::StringLiteral, b"a'".to_vec()));
    assert_eq!(first("\"say \"\"hi\"\"\""), (TokenType::StringLiteral, b"say \"hi\"".to_vec()));
}

#[test]
fn test_backslash_escapes() {
    assert_eq!(first(r"'it\'s'"), (TokenType::StringLiteral, b"it's".to_vec()));
    assert_eq!(first(r"'a\nb\tc'"), (TokenType::StringLiteral, b"a\nb\tc".to_vec()));
    assert_eq!(first(r"'\0\Z'"), (TokenType::StringLiteral, vec![0, 0x1A]));
    assert_eq!(first(r"'\\'"), (TokenType::StringLiteral, b"\\".to_vec()));
    // неизвестная последовательность сохраняет символ без обратной черты
    assert_eq!(first(r"'50\%'"), (TokenType::StringLiteral, b"50%".to_vec()));
}

#[test]
fn test_unterminated_strings() {
    assert_eq!(first("'abc"), (TokenType::LexError, b"abc".to_vec()));
    assert_eq!(first("'abc\\"), (TokenType::LexError, b"abc".to_vec()));
    assert_eq!(first("'a''"), (TokenType::LexError, b"a'".to_vec()));
    assert_eq!(first("\""), (TokenType::LexError, Vec::new()));
}

#[test]
fn test_string_keeps_raw_bytes() {
    let token = Lexer::new("'привет'").lex();
    assert_eq!(token.token_type, TokenType::StringLiteral);
    assert_eq!(token.text(), "привет");
}

#[test]
fn test_quoted_identifiers() {
    assert_eq!(first("`select`"), (TokenType::Identifier, b"select".to_vec()));
    assert_eq!(first("`My Table`"), (TokenType::Identifier, b"My Table".to_vec()));
    assert_eq!(first("`a``b`"), (TokenType::Identifier, b"a`b".to_vec()));
    assert_eq!(first("`abc"), (TokenType::LexError, b"abc".to_vec()));
}

#[test]
fn test_quoted_identifier_decodes_backslash() {
    // обратная черта в `...` обрабатывается так же, как в строках
    assert_eq!(first(r"`a\nb`"), (TokenType::Identifier, b"a\nb".to_vec()));
    assert_eq!(first(r"`a\`b`"), (TokenType::Identifier, b"a`b".to_vec()));
}

#[test]
fn test_bind_variables() {
    assert_eq!(first(":name1.sub"), (TokenType::ValueArg, b":name1.sub".to_vec()));
    assert_eq!(first(":1"), (TokenType::ValueArg, b":1".to_vec()));
    assert_eq!(first(":_a@b"), (TokenType::ValueArg, b":_a@b".to_vec()));
}

#[test]
fn test_bare_colon_is_error() {
    assert_eq!(first(":"), (TokenType::LexError, b":".to_vec()));
    assert_eq!(
        pairs(":: :a b"),
        vec![
            (TokenType::LexError, ":".to_string()),
            (TokenType::LexError, ":".to_string()),
            (TokenType::ValueArg, ":a".to_string()),
            (TokenType::Identifier, "b".to_string()),
        ]
    );
}

#[test]
fn test_literals_in_statement() {
    let tokens = pairs("insert into t values (0x0F, 'x', 1e3, :v)");
    let expected = vec![
        (TokenType::Keyword(Keyword::Insert), "insert".to_string()),
        (TokenType::Keyword(Keyword::Into), "into".to_string()),
        (TokenType::Identifier, "t".to_string()),
        (TokenType::Keyword(Keyword::Values), "values".to_string()),
        (TokenType::Punct(b'('), String::new()),
        (TokenType::Number, "0x0F".to_string()),
        (TokenType::Punct(b','), String::new()),
        (TokenType::StringLiteral, "x".to_string()),
        (TokenType::Punct(b','), String::new()),
        (TokenType::Number, "1e3".to_string()),
        (TokenType::Punct(b','), String::new()),
        (TokenType::ValueArg, ":v".to_string()),
        (TokenType::Punct(b')'), String::new()),
    ];
    assert_eq!(tokens, expected);
}
