//! Таблицы экранирования символов в SQL строках (диалект MySQL)
//!
//! Декодирующая таблица переводит символ после `\` в итоговый байт.
//! `None` означает "не экранируется": сохраняется сам символ после `\`.

/// Пары (байт значения, символ после `\`)
const ESCAPES: [(u8, u8); 9] = [
    (0x00, b'0'),
    (b'\'', b'\''),
    (b'"', b'"'),
    (0x08, b'b'),
    (b'\n', b'n'),
    (b'\r', b'r'),
    (b'\t', b't'),
    (0x1A, b'Z'),
    (b'\\', b'\\'),
];

const fn build_decode_map() -> [Option<u8>; 256] {
    let mut map = [None; 256];
    let mut i = 0;
    while i < ESCAPES.len() {
        let (value, escaped) = ESCAPES[i];
        map[escaped as usize] = Some(value);
        i += 1;
    }
    map
}

const fn build_encode_map() -> [Option<u8>; 256] {
    let mut map = [None; 256];
    let mut i = 0;
    while i < ESCAPES.len() {
        let (value, escaped) = ESCAPES[i];
        map[value as usize] = Some(escaped);
        i += 1;
    }
    map
}

static SQL_DECODE_MAP: [Option<u8>; 256] = build_decode_map();
static SQL_ENCODE_MAP: [Option<u8>; 256] = build_encode_map();

/// Декодирует символ, стоящий после обратной косой черты
#[inline]
pub fn decode_escape(ch: u8) -> Option<u8> {
    SQL_DECODE_MAP[ch as usize]
}

/// Символ, который нужно поставить после `\` для данного байта
#[inline]
pub fn encode_escape(ch: u8) -> Option<u8> {
    SQL_ENCODE_MAP[ch as usize]
}

/// Записывает значение как строковый литерал в одинарных кавычках
pub fn encode_sql_string(value: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(value.len() + 2);
    out.push(b'\'');
    for &ch in value {
        match encode_escape(ch) {
            Some(escaped) => {
                out.push(b'\\');
                out.push(escaped);
            }
            None => out.push(ch),
        }
    }
    out.push(b'\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_known_escapes() {
        assert_eq!(decode_escape(b'n'), Some(b'\n'));
        assert_eq!(decode_escape(b't'), Some(b'\t'));
        assert_eq!(decode_escape(b'0'), Some(0));
        assert_eq!(decode_escape(b'Z'), Some(0x1A));
        assert_eq!(decode_escape(b'\\'), Some(b'\\'));
        assert_eq!(decode_escape(b'\''), Some(b'\''));
    }

    #[test]
    fn test_decode_dont_escape() {
        assert_eq!(decode_escape(b'%'), None);
        assert_eq!(decode_escape(b'_'), None);
        assert_eq!(decode_escape(b'x'), None);
        assert_eq!(decode_escape(0xFF), None);
    }

    #[test]
    fn test_encode_sql_string() {
        assert_eq!(encode_sql_string(b"it's"), b"'it\\'s'".to_vec());
        assert_eq!(encode_sql_string(b"a\nb"), b"'a\\nb'".to_vec());
        assert_eq!(encode_sql_string(b"plain"), b"'plain'".to_vec());
    }
}
