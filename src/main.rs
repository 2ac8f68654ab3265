//! Главный исполняемый файл shardsql: печатает токены SQL выражения

use anyhow::{bail, Context};
use clap::Parser;
use serde::Serialize;
use shardsql::parser::escape::encode_sql_string;
use shardsql::{Lexer, LexerConfig, Token, TokenType, VERSION};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shardsql")]
#[command(about = "Лексический анализатор SQL (диалект MySQL)")]
#[command(version = VERSION)]
struct Cli {
    /// SQL выражение; если не задано, читается из stdin
    sql: Option<String>,

    /// Конфигурационный файл (TOML)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Выводить комментарии
    #[arg(long)]
    allow_comments: bool,

    /// Вывод в формате JSON
    #[arg(long)]
    json: bool,

    /// Печатать строковые литералы в кавычках с экранированием
    #[arg(long)]
    requote: bool,

    /// Уровень детализации логирования
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

/// Представление токена для вывода
#[derive(Serialize)]
struct TokenView {
    kind: String,
    code: i32,
    offset: usize,
    value: String,
}

impl TokenView {
    fn new(token: &Token, requote: bool) -> Self {
        let value = if requote && token.token_type == TokenType::StringLiteral {
            String::from_utf8_lossy(&encode_sql_string(&token.value)).into_owned()
        } else {
            token.text().into_owned()
        };
        Self {
            kind: token.token_type.to_string(),
            code: token.code(),
            offset: token.offset,
            value,
        }
    }
}

fn init_logging(level: Option<&str>) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level {
        builder.parse_filters(level);
    }
    builder.init();
}

fn load_config(cli: &Cli) -> anyhow::Result<LexerConfig> {
    let mut config = match &cli.config {
        Some(path) => LexerConfig::from_file(path)
            .with_context(|| format!("cannot load config {}", path.display()))?
            .with_env_overrides(|key| std::env::var(key).ok())?,
        None => LexerConfig::from_env()?,
    };
    if cli.allow_comments {
        config.allow_comments = true;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let config = load_config(&cli)?;
    log::debug!("lexer config: {:?}", config);

    let sql = match &cli.sql {
        Some(sql) => sql.clone().into_bytes(),
        None => {
            let mut buffer = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buffer)
                .context("cannot read SQL from stdin")?;
            buffer
        }
    };

    let mut lexer = Lexer::with_config(&sql, config);
    let tokens = lexer.tokenize();
    let views: Vec<TokenView> = tokens.iter().map(|t| TokenView::new(t, cli.requote)).collect();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&views)?);
    } else {
        for view in &views {
            println!("{:>6} {:<16} {:>6} {}", view.offset, view.kind, view.code, view.value);
        }
    }

    if let Some(bad) = tokens.iter().find(|t| t.is_error()) {
        bail!("invalid token '{}' at position {}", bad.text(), bad.offset + 1);
    }
    Ok(())
}
