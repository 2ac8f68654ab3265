//! Токены для SQL лексера shardsql
//!
//! Тип токена отображается в целочисленный код, которым пользуется
//! грамматический парсер: 0 для конца ввода, сам байт для односимвольных
//! токенов и отдельный диапазон для остальных видов и ключевых слов.

use crate::parser::keywords::Keyword;
use std::borrow::Cow;
use std::fmt;

/// Код конца ввода
pub const EOF: i32 = 0;
/// Некорректная лексема
pub const LEX_ERROR: i32 = 57346;
pub const ID: i32 = 57347;
pub const STRING: i32 = 57348;
pub const NUMBER: i32 = 57349;
pub const VALUE_ARG: i32 = 57350;
pub const COMMENTS: i32 = 57351;
/// `<>` и `!=`
pub const NE: i32 = 57352;
pub const LE: i32 = 57353;
pub const GE: i32 = 57354;
/// `<=>`
pub const NULL_SAFE_EQUAL: i32 = 57355;
/// Код первого ключевого слова; остальные идут подряд в порядке таблицы
pub const KEYWORD_BASE: i32 = 57356;

/// Односимвольные структурные токены
pub const PUNCTUATION: &[u8] = b"=,;()+*%&|^~./-<>";

/// Типы токенов SQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Конец ввода
    Eof,
    /// Односимвольный оператор или разделитель
    Punct(u8),
    /// Зарезервированное слово
    Keyword(Keyword),
    /// Идентификатор, в том числе в обратных кавычках
    Identifier,
    /// Строковый литерал
    StringLiteral,
    /// Числовой литерал в исходной записи
    Number,
    /// `:name` или `?`
    ValueArg,
    Comment,
    NotEqual,      // <> или !=
    LessEqual,     // <=
    GreaterEqual,  // >=
    NullSafeEqual, // <=>
    /// Некорректная лексема
    LexError,
}

impl TokenType {
    /// Целочисленный код для парсера
    pub fn code(&self) -> i32 {
        match self {
            TokenType::Eof => EOF,
            TokenType::Punct(ch) => *ch as i32,
            TokenType::Keyword(kw) => KEYWORD_BASE + kw.index() as i32,
            TokenType::Identifier => ID,
            TokenType::StringLiteral => STRING,
            TokenType::Number => NUMBER,
            TokenType::ValueArg => VALUE_ARG,
            TokenType::Comment => COMMENTS,
            TokenType::NotEqual => NE,
            TokenType::LessEqual => LE,
            TokenType::GreaterEqual => GE,
            TokenType::NullSafeEqual => NULL_SAFE_EQUAL,
            TokenType::LexError => LEX_ERROR,
        }
    }

    /// Восстанавливает тип токена по коду
    pub fn from_code(code: i32) -> Option<TokenType> {
        let token_type = match code {
            EOF => TokenType::Eof,
            1..=255 if PUNCTUATION.contains(&(code as u8)) => TokenType::Punct(code as u8),
            LEX_ERROR => TokenType::LexError,
            ID => TokenType::Identifier,
            STRING => TokenType::StringLiteral,
            NUMBER => TokenType::Number,
            VALUE_ARG => TokenType::ValueArg,
            COMMENTS => TokenType::Comment,
            NE => TokenType::NotEqual,
            LE => TokenType::LessEqual,
            GE => TokenType::GreaterEqual,
            NULL_SAFE_EQUAL => TokenType::NullSafeEqual,
            _ if code >= KEYWORD_BASE => {
                let kw = Keyword::ALL.get((code - KEYWORD_BASE) as usize)?;
                TokenType::Keyword(*kw)
            }
            _ => return None,
        };
        Some(token_type)
    }

    /// Проверяет, является ли токен ключевым словом
    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenType::Keyword(_))
    }

    /// Значение токена передается парсеру
    pub fn has_semantic_value(&self) -> bool {
        matches!(
            self,
            TokenType::Identifier
                | TokenType::StringLiteral
                | TokenType::Number
                | TokenType::ValueArg
                | TokenType::Comment
        )
    }

    /// Токен несет текст, пригодный для сообщений об ошибках
    pub fn carries_text(&self) -> bool {
        self.has_semantic_value() || matches!(self, TokenType::Keyword(_) | TokenType::LexError)
    }

    /// Проверяет, следует ли пропустить токен при парсинге
    pub fn should_skip(&self) -> bool {
        matches!(self, TokenType::Comment)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Eof => write!(f, "EOF"),
            TokenType::Punct(ch) => write!(f, "'{}'", *ch as char),
            TokenType::Keyword(kw) => write!(f, "{}", kw),
            TokenType::Identifier => write!(f, "ID"),
            TokenType::StringLiteral => write!(f, "STRING"),
            TokenType::Number => write!(f, "NUMBER"),
            TokenType::ValueArg => write!(f, "VALUE_ARG"),
            TokenType::Comment => write!(f, "COMMENTS"),
            TokenType::NotEqual => write!(f, "NE"),
            TokenType::LessEqual => write!(f, "LE"),
            TokenType::GreaterEqual => write!(f, "GE"),
            TokenType::NullSafeEqual => write!(f, "NULL_SAFE_EQUAL"),
            TokenType::LexError => write!(f, "LEX_ERROR"),
        }
    }
}

/// Токен со значением и смещением начала во входном тексте
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    pub value: Vec<u8>,
    pub offset: usize,
}

impl Token {
    pub fn new(token_type: TokenType, value: Vec<u8>, offset: usize) -> Self {
        Self {
            token_type,
            value,
            offset,
        }
    }

    /// Токен без значения
    pub fn bare(token_type: TokenType, offset: usize) -> Self {
        Self::new(token_type, Vec::new(), offset)
    }

    pub fn code(&self) -> i32 {
        self.token_type.code()
    }

    pub fn is_eof(&self) -> bool {
        self.token_type == TokenType::Eof
    }

    pub fn is_error(&self) -> bool {
        self.token_type == TokenType::LexError
    }

    /// Значение для ID, STRING, NUMBER, VALUE_ARG и COMMENTS
    pub fn semantic_value(&self) -> Option<&[u8]> {
        self.token_type
            .has_semantic_value()
            .then_some(self.value.as_slice())
    }

    /// Текст токена для контекста ошибки
    pub fn error_context(&self) -> Option<&[u8]> {
        self.token_type
            .carries_text()
            .then_some(self.value.as_slice())
    }

    /// Значение как строка (невалидный UTF-8 заменяется)
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.value)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}('{}') at {}", self.token_type, self.text(), self.offset)
    }
}
