//! Курсор по входному буферу с просмотром на один символ вперед

/// Курсор по SQL тексту
///
/// Конец ввода представлен как `None` и не пересекается ни с одним байтом.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a [u8],
    /// Количество потребленных символов
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, offset: 0 }
    }

    /// Текущий непотребленный символ
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.offset).copied()
    }

    /// Проверяет текущий символ предикатом; на конце ввода всегда `false`
    #[inline]
    pub fn peek_is(&self, pred: impl Fn(u8) -> bool) -> bool {
        self.peek().map_or(false, pred)
    }

    /// Потребляет текущий символ и возвращает его
    ///
    /// # Panics
    ///
    /// Если ввод уже исчерпан. Сканеры проверяют конец ввода до вызова.
    #[inline]
    pub fn bump(&mut self) -> u8 {
        match self.peek() {
            Some(ch) => {
                self.offset += 1;
                ch
            }
            None => panic!("unexpected end of input at position {}", self.offset),
        }
    }

    /// Потребляет текущий символ, дописывая его в буфер
    #[inline]
    pub fn bump_into(&mut self, buffer: &mut Vec<u8>) {
        let ch = self.bump();
        buffer.push(ch);
    }

    /// Количество потребленных символов
    #[inline]
    pub fn position(&self) -> usize {
        self.offset
    }
}
