//! Конфигурация для shardsql
//!
//! Настройки лексического анализатора: загрузка из TOML файла и переменных окружения

use crate::common::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Переменная окружения для `allow_comments`
pub const ENV_ALLOW_COMMENTS: &str = "SHARDSQL_ALLOW_COMMENTS";
/// Переменная окружения для `trace_tokens`
pub const ENV_TRACE_TOKENS: &str = "SHARDSQL_TRACE_TOKENS";

/// Конфигурация лексического анализатора
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Возвращать токены комментариев вызывающему коду
    pub allow_comments: bool,
    /// Логировать каждый выданный токен на уровне trace
    pub trace_tokens: bool,
}

impl LexerConfig {
    /// Загружает конфигурацию из TOML файла
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Разбирает конфигурацию из TOML строки
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::configuration(e.to_string()))
    }

    /// Сохраняет конфигурацию в TOML файл
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| Error::configuration(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Загружает конфигурацию из переменных окружения
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Применяет переопределения поверх текущей конфигурации
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_ALLOW_COMMENTS) {
            self.allow_comments = parse_flag(ENV_ALLOW_COMMENTS, &value)?;
        }
        if let Some(value) = lookup(ENV_TRACE_TOKENS) {
            self.trace_tokens = parse_flag(ENV_TRACE_TOKENS, &value)?;
        }
        Ok(self)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::configuration(format!(
            "{} expects a boolean, got '{}'",
            key, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = LexerConfig::default();
        assert!(!config.allow_comments);
        assert!(!config.trace_tokens);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = LexerConfig::from_toml("allow_comments = true").unwrap();
        assert!(config.allow_comments);
        assert!(!config.trace_tokens);
    }

    #[test]
    fn test_from_toml_invalid() {
        let err = LexerConfig::from_toml("allow_comments = \"maybe\"").unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexer.toml");
        let config = LexerConfig {
            allow_comments: true,
            trace_tokens: true,
        };
        config.to_file(&path).unwrap();
        assert_eq!(LexerConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> =
            [(ENV_ALLOW_COMMENTS, "yes"), (ENV_TRACE_TOKENS, "0")].into_iter().collect();
        let config = LexerConfig::default()
            .with_env_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();
        assert!(config.allow_comments);
        assert!(!config.trace_tokens);
    }

    #[test]
    fn test_env_override_rejects_garbage() {
        let result = LexerConfig::default().with_env_overrides(|key| {
            (key == ENV_TRACE_TOKENS).then(|| "sometimes".to_string())
        });
        assert!(result.is_err());
    }
}
