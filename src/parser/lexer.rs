//! Лексический анализатор SQL для shardsql
//!
//! Преобразует входной SQL текст в последовательность токенов для грамматического
//! парсера. Один проход, просмотр на один символ вперед, без возвратов.
//!
//! Диспетчер и вспомогательные методы находятся в `lexer_methods.rs`,
//! чтение отдельных видов лексем в `lexer_readers.rs`.

use crate::common::{Error, LexerConfig, Result};
use crate::parser::cursor::Cursor;
use crate::parser::token::Token;
use std::any::Any;
use std::iter::FusedIterator;

/// Лексический анализатор SQL
///
/// Создается заново для каждого SQL выражения и принадлежит одному вызывающему.
pub struct Lexer<'a> {
    /// Входной текст и позиция чтения
    pub(super) cursor: Cursor<'a>,
    pub(super) config: LexerConfig,
    /// После установки любой вызов возвращает EOF
    pub(super) force_eof: bool,
    /// Количество встреченных `?`
    pub(super) positional_args: usize,
    /// Текст последнего выданного токена для сообщений об ошибках
    pub(super) error_token: Option<Vec<u8>>,
    pub(super) last_error: Option<String>,
    /// Результат разбора, который сохраняет парсер
    parse_tree: Option<Box<dyn Any + Send>>,
}

impl<'a> Lexer<'a> {
    /// Создает новый лексический анализатор
    pub fn new(sql: &'a str) -> Self {
        Self::from_bytes(sql.as_bytes())
    }

    /// Создает анализатор над произвольными байтами
    pub fn from_bytes(input: &'a [u8]) -> Self {
        Self::with_config(input, LexerConfig::default())
    }

    pub fn with_config(input: &'a [u8], config: LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(input),
            config,
            force_eof: false,
            positional_args: 0,
            error_token: None,
            last_error: None,
            parse_tree: None,
        }
    }

    pub fn set_allow_comments(&mut self, allow: bool) {
        self.config.allow_comments = allow;
    }

    /// Прекращает выдачу токенов: дальше всегда EOF
    pub fn force_eof(&mut self) {
        if !self.force_eof {
            log::debug!("force EOF at position {}", self.cursor.position());
        }
        self.force_eof = true;
    }

    pub fn is_force_eof(&self) -> bool {
        self.force_eof
    }

    /// Количество потребленных символов
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Количество позиционных параметров `?`, выданных до сих пор
    pub fn positional_arg_count(&self) -> usize {
        self.positional_args
    }

    /// Возвращает следующий токен для парсера
    ///
    /// Комментарии пропускаются, если они не разрешены конфигурацией.
    pub fn lex(&mut self) -> Token {
        let mut token = self.scan();
        while token.token_type.should_skip() && !self.config.allow_comments {
            token = self.scan();
        }

        if token.is_error() {
            log::debug!(
                "lexical error at position {}: '{}'",
                token.offset + 1,
                token.text()
            );
        } else if self.config.trace_tokens {
            log::trace!("token {}", token);
        }

        self.error_token = token.error_context().map(|text| text.to_vec());
        token
    }

    /// Записывает сообщение об ошибке с позицией и последним токеном
    pub fn record_error(&mut self, message: &str) {
        let position = self.error_position();
        let formatted = match &self.error_token {
            Some(token) => format!(
                "{} at position {} near {}",
                message,
                position,
                String::from_utf8_lossy(token)
            ),
            None => format!("{} at position {}", message, position),
        };
        log::debug!("{}", formatted);
        self.last_error = Some(formatted);
    }

    /// Последнее записанное сообщение об ошибке
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Позиция для диагностики, начиная с 1
    pub fn error_position(&self) -> usize {
        self.cursor.position() + 1
    }

    /// Возвращает все токены, включая завершающий EOF
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.lex();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Как `tokenize`, но первая некорректная лексема становится ошибкой
    pub fn tokenize_strict(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.lex();
            if token.is_error() {
                self.record_error("invalid token");
                return Err(Error::lexical(
                    format!("invalid token '{}'", token.text()),
                    token.offset + 1,
                ));
            }
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                return Ok(tokens);
            }
        }
    }

    /// Сохраняет результат разбора; анализатор его не читает
    pub fn set_parse_tree<T: Any + Send>(&mut self, tree: T) {
        self.parse_tree = Some(Box::new(tree));
    }

    /// Забирает сохраненный результат разбора, если тип совпадает
    pub fn take_parse_tree<T: Any + Send>(&mut self) -> Option<T> {
        match self.parse_tree.take()?.downcast::<T>() {
            Ok(tree) => Some(*tree),
            Err(other) => {
                self.parse_tree = Some(other);
                None
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.lex();
        (!token.is_eof()).then_some(token)
    }
}

impl FusedIterator for Lexer<'_> {}
