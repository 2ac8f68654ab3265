// Диспетчер лексического анализатора

use crate::parser::chars::{digit_value, is_blank, is_digit, is_letter};
use crate::parser::lexer::Lexer;
use crate::parser::token::{Token, TokenType};

impl<'a> Lexer<'a> {
    /// Читает следующую лексему, включая комментарии
    pub fn scan(&mut self) -> Token {
        if self.force_eof {
            return Token::bare(TokenType::Eof, self.cursor.position());
        }

        self.skip_blank();

        let start = self.cursor.position();
        let ch = match self.cursor.peek() {
            Some(ch) => ch,
            None => return Token::bare(TokenType::Eof, start),
        };

        if is_letter(ch) {
            return self.read_identifier(start);
        }
        if is_digit(ch) {
            return self.read_number(false, start);
        }
        if ch == b':' {
            return self.read_bind_variable(start);
        }

        self.cursor.bump();
        match ch {
            b'=' | b',' | b';' | b'(' | b')' | b'+' | b'*' | b'%' | b'&' | b'|' | b'^' | b'~' => {
                Token::bare(TokenType::Punct(ch), start)
            }
            b'?' => {
                self.positional_args += 1;
                Token::new(TokenType::ValueArg, b"?".to_vec(), start)
            }
            b'.' => {
                if self.cursor.peek_is(is_digit) {
                    self.read_number(true, start)
                } else {
                    Token::bare(TokenType::Punct(ch), start)
                }
            }
            b'/' => match self.cursor.peek() {
                Some(b'/') => {
                    self.cursor.bump();
                    self.read_line_comment(b"//", start)
                }
                Some(b'*') => {
                    self.cursor.bump();
                    self.read_block_comment(start)
                }
                _ => Token::bare(TokenType::Punct(ch), start),
            },
            b'-' => {
                if self.cursor.peek() == Some(b'-') {
                    self.cursor.bump();
                    self.read_line_comment(b"--", start)
                } else {
                    Token::bare(TokenType::Punct(ch), start)
                }
            }
            b'<' => self.read_less_than(start),
            b'>' => {
                if self.cursor.peek() == Some(b'=') {
                    self.cursor.bump();
                    Token::bare(TokenType::GreaterEqual, start)
                } else {
                    Token::bare(TokenType::Punct(ch), start)
                }
            }
            b'!' => {
                if self.cursor.peek() == Some(b'=') {
                    self.cursor.bump();
                    Token::bare(TokenType::NotEqual, start)
                } else {
                    Token::new(TokenType::LexError, b"!".to_vec(), start)
                }
            }
            b'\'' | b'"' => self.read_string(ch, TokenType::StringLiteral, start),
            b'`' => self.read_string(ch, TokenType::Identifier, start),
            _ => Token::new(TokenType::LexError, vec![ch], start),
        }
    }

    // === Вспомогательные методы ===

    /// `<`, `<>`, `<=` или `<=>`; первый символ уже потреблен
    fn read_less_than(&mut self, start: usize) -> Token {
        match self.cursor.peek() {
            Some(b'>') => {
                self.cursor.bump();
                Token::bare(TokenType::NotEqual, start)
            }
            Some(b'=') => {
                self.cursor.bump();
                if self.cursor.peek() == Some(b'>') {
                    self.cursor.bump();
                    Token::bare(TokenType::NullSafeEqual, start)
                } else {
                    Token::bare(TokenType::LessEqual, start)
                }
            }
            _ => Token::bare(TokenType::Punct(b'<'), start),
        }
    }

    /// Пропускает пробельные символы
    pub(crate) fn skip_blank(&mut self) {
        while self.cursor.peek_is(is_blank) {
            self.cursor.bump();
        }
    }

    /// Потребляет цифры с основанием меньше `base`
    pub(crate) fn read_mantissa(&mut self, base: u32, buffer: &mut Vec<u8>) {
        while self.cursor.peek_is(|ch| digit_value(ch) < base) {
            self.cursor.bump_into(buffer);
        }
    }
}
