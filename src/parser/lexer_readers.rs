// Методы чтения отдельных видов лексем

use crate::parser::chars::{is_digit, is_letter};
use crate::parser::escape::decode_escape;
use crate::parser::keywords::Keyword;
use crate::parser::lexer::Lexer;
use crate::parser::token::{Token, TokenType};

/// Состояния разбора числового литерала
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberState {
    /// Необязательная дробная часть
    Fraction,
    /// Необязательная экспонента
    Exponent,
    Done,
    /// Восьмеричная запись с цифрами 8 или 9 без дробной части и экспоненты
    InvalidOctal,
}

impl<'a> Lexer<'a> {
    /// Читает идентификатор или ключевое слово
    ///
    /// Ключевые слова возвращаются в нижнем регистре, идентификаторы как есть.
    pub(crate) fn read_identifier(&mut self, start: usize) -> Token {
        let mut buffer = Vec::with_capacity(8);
        self.cursor.bump_into(&mut buffer);
        while self.cursor.peek_is(|ch| is_letter(ch) || is_digit(ch)) {
            self.cursor.bump_into(&mut buffer);
        }

        let lowered = buffer.to_ascii_lowercase();
        match Keyword::lookup(&lowered) {
            Some(keyword) => Token::new(TokenType::Keyword(keyword), lowered, start),
            None => Token::new(TokenType::Identifier, buffer, start),
        }
    }

    /// Читает именованный параметр `:name`, допускаются точки (`:a.b`)
    pub(crate) fn read_bind_variable(&mut self, start: usize) -> Token {
        let mut buffer = Vec::with_capacity(8);
        self.cursor.bump_into(&mut buffer);
        while self.cursor.peek_is(|ch| is_letter(ch) || is_digit(ch) || ch == b'.') {
            self.cursor.bump_into(&mut buffer);
        }

        if buffer.len() == 1 {
            return Token::new(TokenType::LexError, buffer, start);
        }
        Token::new(TokenType::ValueArg, buffer, start)
    }

    /// Читает числовой литерал
    ///
    /// `seen_decimal_point` означает, что ведущая точка уже потреблена.
    /// Значение всегда совпадает с исходной записью числа.
    pub(crate) fn read_number(&mut self, seen_decimal_point: bool, start: usize) -> Token {
        let mut buffer = Vec::with_capacity(8);

        let mut state = if seen_decimal_point {
            buffer.push(b'.');
            self.read_mantissa(10, &mut buffer);
            NumberState::Exponent
        } else if self.cursor.peek() == Some(b'0') {
            self.cursor.bump_into(&mut buffer);
            self.read_zero_prefixed(&mut buffer)
        } else {
            self.read_mantissa(10, &mut buffer);
            NumberState::Fraction
        };

        loop {
            state = match state {
                NumberState::Fraction => {
                    if self.cursor.peek() == Some(b'.') {
                        self.cursor.bump_into(&mut buffer);
                        self.read_mantissa(10, &mut buffer);
                    }
                    NumberState::Exponent
                }
                NumberState::Exponent => {
                    if matches!(self.cursor.peek(), Some(b'e' | b'E')) {
                        self.cursor.bump_into(&mut buffer);
                        if matches!(self.cursor.peek(), Some(b'+' | b'-')) {
                            self.cursor.bump_into(&mut buffer);
                        }
                        self.read_mantissa(10, &mut buffer);
                    }
                    NumberState::Done
                }
                NumberState::Done => return Token::new(TokenType::Number, buffer, start),
                NumberState::InvalidOctal => return Token::new(TokenType::LexError, buffer, start),
            };
        }
    }

    /// Продолжение числа после ведущего `0`: hex, восьмеричное или дробное
    fn read_zero_prefixed(&mut self, buffer: &mut Vec<u8>) -> NumberState {
        if matches!(self.cursor.peek(), Some(b'x' | b'X')) {
            self.cursor.bump_into(buffer);
            self.read_mantissa(16, buffer);
            return NumberState::Done;
        }

        let mut seen_decimal_digit = false;
        self.read_mantissa(8, buffer);
        if matches!(self.cursor.peek(), Some(b'8' | b'9')) {
            seen_decimal_digit = true;
            self.read_mantissa(10, buffer);
        }

        // дробная часть или экспонента делают запись корректной
        if matches!(self.cursor.peek(), Some(b'.' | b'e' | b'E')) {
            return NumberState::Fraction;
        }
        if seen_decimal_digit {
            NumberState::InvalidOctal
        } else {
            NumberState::Done
        }
    }

    /// Читает строку или идентификатор в кавычках до закрывающего `delim`
    ///
    /// Удвоенный разделитель дает один символ, `\x` декодируется по таблице экранирования.
    /// Открывающий разделитель уже потреблен.
    pub(crate) fn read_string(&mut self, delim: u8, token_type: TokenType, start: usize) -> Token {
        let mut buffer = Vec::with_capacity(8);
        loop {
            let ch = match self.cursor.peek() {
                Some(ch) => ch,
                None => return Token::new(TokenType::LexError, buffer, start),
            };
            self.cursor.bump();

            let decoded = if ch == delim {
                if self.cursor.peek() != Some(delim) {
                    break;
                }
                self.cursor.bump();
                delim
            } else if ch == b'\\' {
                let escaped = match self.cursor.peek() {
                    Some(escaped) => escaped,
                    None => return Token::new(TokenType::LexError, buffer, start),
                };
                self.cursor.bump();
                decode_escape(escaped).unwrap_or(escaped)
            } else {
                ch
            };
            buffer.push(decoded);
        }
        Token::new(token_type, buffer, start)
    }

    /// Читает однострочный комментарий вместе с завершающим переводом строки
    pub(crate) fn read_line_comment(&mut self, prefix: &[u8], start: usize) -> Token {
        let mut buffer = prefix.to_vec();
        while let Some(ch) = self.cursor.peek() {
            self.cursor.bump_into(&mut buffer);
            if ch == b'\n' {
                break;
            }
        }
        Token::new(TokenType::Comment, buffer, start)
    }

    /// Читает многострочный комментарий `/* ... */`; `/*` уже потреблен
    pub(crate) fn read_block_comment(&mut self, start: usize) -> Token {
        let mut buffer = b"/*".to_vec();
        loop {
            match self.cursor.peek() {
                Some(b'*') => {
                    self.cursor.bump_into(&mut buffer);
                    if self.cursor.peek() == Some(b'/') {
                        self.cursor.bump_into(&mut buffer);
                        break;
                    }
                }
                Some(_) => self.cursor.bump_into(&mut buffer),
                None => return Token::new(TokenType::LexError, buffer, start),
            }
        }
        Token::new(TokenType::Comment, buffer, start)
    }
}
