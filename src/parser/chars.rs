//! Классификация символов для лексического анализатора

/// Значение, превышающее любую допустимую цифру
pub const NO_DIGIT: u32 = 16;

/// Начало идентификатора: буква, `_` или `@`
#[inline]
pub fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_' || ch == b'@'
}

#[inline]
pub fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

/// Пробел, табуляция, CR или LF
#[inline]
pub fn is_blank(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\r' | b'\n')
}

/// Значение шестнадцатеричной цифры или `NO_DIGIT`
#[inline]
pub fn digit_value(ch: u8) -> u32 {
    match ch {
        b'0'..=b'9' => (ch - b'0') as u32,
        b'a'..=b'f' => (ch - b'a' + 10) as u32,
        b'A'..=b'F' => (ch - b'A' + 10) as u32,
        _ => NO_DIGIT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters() {
        for ch in [b'a', b'z', b'A', b'Z', b'_', b'@'] {
            assert!(is_letter(ch), "{}", ch as char);
        }
        for ch in [b'0', b'$', b'`', b' ', 0xC3] {
            assert!(!is_letter(ch));
        }
    }

    #[test]
    fn test_blanks() {
        assert!(is_blank(b' '));
        assert!(is_blank(b'\t'));
        assert!(is_blank(b'\r'));
        assert!(is_blank(b'\n'));
        assert!(!is_blank(0x0B));
        assert!(!is_blank(0x0C));
    }

    #[test]
    fn test_digit_value() {
        assert_eq!(digit_value(b'7'), 7);
        assert_eq!(digit_value(b'a'), 10);
        assert_eq!(digit_value(b'F'), 15);
        assert_eq!(digit_value(b'g'), NO_DIGIT);
        assert_eq!(digit_value(b'.'), NO_DIGIT);
    }
}
