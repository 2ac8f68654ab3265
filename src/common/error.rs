//! Обработка ошибок для shardsql

use thiserror::Error;

/// Основной тип ошибки для shardsql
#[derive(Error, Debug)]
pub enum Error {
    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации/десериализации
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Некорректная лексема во входном SQL
    #[error("Lexical error: {message} at position {position}")]
    Lexical { message: String, position: usize },

    /// Ошибка конфигурации
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Тип результата для shardsql
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает лексическую ошибку
    pub fn lexical(message: impl Into<String>, position: usize) -> Self {
        Self::Lexical {
            message: message.into(),
            position,
        }
    }

    /// Создает ошибку конфигурации
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Позиция ошибки во входном тексте, если она известна
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::Lexical { position, .. } => Some(*position),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexical_error_display() {
        let err = Error::lexical("unterminated string", 7);
        assert_eq!(err.to_string(), "Lexical error: unterminated string at position 7");
        assert_eq!(err.position(), Some(7));
    }

    #[test]
    fn test_configuration_error_has_no_position() {
        let err = Error::configuration("bad flag");
        assert_eq!(err.to_string(), "Configuration error: bad flag");
        assert_eq!(err.position(), None);
    }
}
