//! Общие типы и утилиты для shardsql

pub mod config;
pub mod error;

pub use config::LexerConfig;
pub use error::{Error, Result};
