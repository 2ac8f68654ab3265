//! Ключевые слова диалекта MySQL
//!
//! Таблица строится один раз при первом обращении и дальше только читается,
//! поэтому ее можно использовать из любого числа лексеров одновременно.

use std::collections::HashMap;
use std::fmt;

macro_rules! keywords {
    ($($variant:ident => $text:literal,)*) => {
        /// Зарезервированное слово SQL
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Keyword {
            $($variant,)*
        }

        impl Keyword {
            /// Все ключевые слова в порядке объявления
            pub const ALL: &'static [Keyword] = &[$(Keyword::$variant,)*];

            /// Каноническое написание в нижнем регистре
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Keyword::$variant => $text,)*
                }
            }
        }
    };
}

keywords! {
    // DML
    Select => "select",
    Insert => "insert",
    Update => "update",
    Delete => "delete",
    From => "from",
    Where => "where",
    Group => "group",
    Having => "having",
    Order => "order",
    By => "by",
    Limit => "limit",
    For => "for",

    // Операции над множествами
    Union => "union",
    All => "all",
    Minus => "minus",
    Except => "except",
    Intersect => "intersect",

    // JOIN
    Join => "join",
    Full => "full",
    StraightJoin => "straight_join",
    Left => "left",
    Right => "right",
    Inner => "inner",
    Outer => "outer",
    Cross => "cross",
    Natural => "natural",
    Use => "use",
    Force => "force",
    On => "on",
    Into => "into",

    // Выражения и предикаты
    Distinct => "distinct",
    Case => "case",
    When => "when",
    Then => "then",
    Else => "else",
    End => "end",
    As => "as",
    And => "and",
    Or => "or",
    Not => "not",
    Exists => "exists",
    In => "in",
    Is => "is",
    Like => "like",
    Between => "between",
    Null => "null",
    Asc => "asc",
    Desc => "desc",
    Values => "values",
    Duplicate => "duplicate",
    Key => "key",
    Default => "default",
    Set => "set",
    Lock => "lock",

    // DDL
    Create => "create",
    Alter => "alter",
    Rename => "rename",
    Drop => "drop",
    Table => "table",
    Index => "index",
    View => "view",
    To => "to",
    Ignore => "ignore",
    If => "if",
    Unique => "unique",
    Fulltext => "fulltext",
    Btree => "btree",
    Hash => "hash",

    // Типы данных
    Bit => "bit",
    Tinyint => "tinyint",
    Bool => "bool",
    Boolean => "boolean",
    Smallint => "smallint",
    Mediumint => "mediumint",
    Int => "int",
    Integer => "integer",
    Bigint => "bigint",
    Real => "real",
    Double => "double",
    Float => "float",
    Decimal => "decimal",
    Date => "date",
    Time => "time",
    Timestamp => "timestamp",
    Datetime => "datetime",
    Year => "year",
    Char => "char",
    Nchar => "nchar",
    Varchar => "varchar",
    Nvarchar => "nvarchar",
    Tinytext => "tinytext",
    Text => "text",
    Mediumtext => "mediumtext",
    Longtext => "longtext",
    Varbinary => "varbinary",
    Tinyblob => "tinyblob",
    Blob => "blob",
    Mediumblob => "mediumblob",
    Longblob => "longblob",

    // Атрибуты колонок и таблиц
    Enum => "enum",
    AutoIncrement => "auto_increment",
    Engine => "engine",
    Primary => "primary",
    References => "references",
    Comment => "comment",
    ColumnFormat => "column_format",
    Fixed => "fixed",
    Dynamic => "dynamic",
    Disk => "disk",
    Memory => "memory",
    Match => "match",
    Partial => "partial",
    Simple => "simple",
    Restrict => "restrict",
    Cascade => "cascade",
    No => "no",
    Action => "action",
    Unsigned => "unsigned",
    Zerofill => "zerofill",
    Constraint => "constraint",
    Foreign => "foreign",
    First => "first",
    After => "after",
    Add => "add",
    Column => "column",
    Change => "change",
    Modify => "modify",
    Enable => "enable",
    Disable => "disable",

    // Транзакции и сессии
    Using => "using",
    Begin => "begin",
    Rollback => "rollback",
    Commit => "commit",
    Names => "names",
    Replace => "replace",
    Start => "start",
    Transaction => "transaction",
    Isolation => "isolation",
    Level => "level",
    Repeatable => "repeatable",
    Read => "read",
    Committed => "committed",
    Uncommitted => "uncommitted",
    Serializable => "serializable",
    Collate => "collate",
    Offset => "offset",
    Charset => "charset",
    Character => "character",
    Collation => "collation",

    // SHOW и администрирование
    Show => "show",
    Describe => "describe",
    Explain => "explain",
    Variables => "variables",
    Status => "status",
    Databases => "databases",
    Database => "database",
    Tables => "tables",
    Columns => "columns",
    Fields => "fields",
    Procedure => "procedure",
    Function => "function",
    Engines => "engines",
    Storage => "storage",
    Plugins => "plugins",
    Processlist => "processlist",
    Indexes => "indexes",
    Keys => "keys",
    Triggers => "triggers",
    Trigger => "trigger",
    Slave => "slave",
    Session => "session",
    Global => "global",
    Profiles => "profiles",

    // Функции
    Position => "position",
    Kill => "kill",
    Query => "query",
    Connection => "connection",

    // Кодировки
    Armscii8 => "armscii8",
    Ascii => "ascii",
    Big5 => "big5",
    Binary => "binary",
    Cp1250 => "cp1250",
    Cp1251 => "cp1251",
    Cp1256 => "cp1256",
    Cp1257 => "cp1257",
    Cp850 => "cp850",
    Cp852 => "cp852",
    Cp866 => "cp866",
    Cp932 => "cp932",
    Dec8 => "dec8",
    Eucjpms => "eucjpms",
    Euckr => "euckr",
    Gb2312 => "gb2312",
    Gbk => "gbk",
    Geostd8 => "geostd8",
    Greek => "greek",
    Hebrew => "hebrew",
    Hp8 => "hp8",
    Keybcs2 => "keybcs2",
    Koi8r => "koi8r",
    Koi8u => "koi8u",
    Latin1 => "latin1",
    Latin2 => "latin2",
    Latin5 => "latin5",
    Latin7 => "latin7",
    Macce => "macce",
    Macroman => "macroman",
    Sjis => "sjis",
    Swe7 => "swe7",
    Tis620 => "tis620",
    Ucs2 => "ucs2",
    Ujis => "ujis",
    Utf16 => "utf16",
    Utf16le => "utf16le",
    Utf32 => "utf32",
    Utf8 => "utf8",
    Utf8mb4 => "utf8mb4",

    // Сопоставления
    Armscii8GeneralCi => "armscii8_general_ci",
    Armscii8Bin => "armscii8_bin",
    AsciiGeneralCi => "ascii_general_ci",
    AsciiBin => "ascii_bin",
    Big5ChineseCi => "big5_chinese_ci",
    Big5Bin => "big5_bin",
    Cp1250GeneralCi => "cp1250_general_ci",
    Cp1250Bin => "cp1250_bin",
    Cp1251GeneralCi => "cp1251_general_ci",
    Cp1251GeneralCs => "cp1251_general_cs",
    Cp1251Bin => "cp1251_bin",
    Cp1256GeneralCi => "cp1256_general_ci",
    Cp1256Bin => "cp1256_bin",
    Cp1257GeneralCi => "cp1257_general_ci",
    Cp1257Bin => "cp1257_bin",
    Cp850GeneralCi => "cp850_general_ci",
    Cp850Bin => "cp850_bin",
    Cp852GeneralCi => "cp852_general_ci",
    Cp852Bin => "cp852_bin",
    Cp866GeneralCi => "cp866_general_ci",
    Cp866Bin => "cp866_bin",
    Cp932JapaneseCi => "cp932_japanese_ci",
    Cp932Bin => "cp932_bin",
    Dec8SwedishCi => "dec8_swedish_ci",
    Dec8Bin => "dec8_bin",
    EucjpmsJapaneseCi => "eucjpms_japanese_ci",
    EucjpmsBin => "eucjpms_bin",
    EuckrKoreanCi => "euckr_korean_ci",
    EuckrBin => "euckr_bin",
    Gb2312ChineseCi => "gb2312_chinese_ci",
    Gb2312Bin => "gb2312_bin",
    GbkChineseCi => "gbk_chinese_ci",
    GbkBin => "gbk_bin",
    Geostd8GeneralCi => "geostd8_general_ci",
    Geostd8Bin => "geostd8_bin",
    GreekGeneralCi => "greek_general_ci",
    GreekBin => "greek_bin",
    HebrewGeneralCi => "hebrew_general_ci",
    HebrewBin => "hebrew_bin",
    Hp8EnglishCi => "hp8_english_ci",
    Hp8Bin => "hp8_bin",
    Keybcs2GeneralCi => "keybcs2_general_ci",
    Keybcs2Bin => "keybcs2_bin",
    Koi8rGeneralCi => "koi8r_general_ci",
    Koi8rBin => "koi8r_bin",
    Koi8uGeneralCi => "koi8u_general_ci",
    Koi8uBin => "koi8u_bin",
    Latin1GeneralCi => "latin1_general_ci",
    Latin1GeneralCs => "latin1_general_cs",
    Latin1Bin => "latin1_bin",
    Latin2GeneralCi => "latin2_general_ci",
    Latin2Bin => "latin2_bin",
    Latin5TurkishCi => "latin5_turkish_ci",
    Latin5Bin => "latin5_bin",
    Latin7GeneralCi => "latin7_general_ci",
    Latin7GeneralCs => "latin7_general_cs",
    Latin7Bin => "latin7_bin",
    MacceGeneralCi => "macce_general_ci",
    MacceBin => "macce_bin",
    MacromanGeneralCi => "macroman_general_ci",
    MacromanBin => "macroman_bin",
    SjisJapaneseCi => "sjis_japanese_ci",
    SjisBin => "sjis_bin",
    Swe7SwedishCi => "swe7_swedish_ci",
    Swe7Bin => "swe7_bin",
    Tis620ThaiCi => "tis620_thai_ci",
    Tis620Bin => "tis620_bin",
    Ucs2GeneralCi => "ucs2_general_ci",
    Ucs2UnicodeCi => "ucs2_unicode_ci",
    Ucs2Bin => "ucs2_bin",
    UjisJapaneseCi => "ujis_japanese_ci",
    UjisBin => "ujis_bin",
    Utf16GeneralCi => "utf16_general_ci",
    Utf16UnicodeCi => "utf16_unicode_ci",
    Utf16Bin => "utf16_bin",
    Utf16leGeneralCi => "utf16le_general_ci",
    Utf16leBin => "utf16le_bin",
    Utf32GeneralCi => "utf32_general_ci",
    Utf32UnicodeCi => "utf32_unicode_ci",
    Utf32Bin => "utf32_bin",
    Utf8GeneralCi => "utf8_general_ci",
    Utf8UnicodeCi => "utf8_unicode_ci",
    Utf8Bin => "utf8_bin",
    Utf8mb4GeneralCi => "utf8mb4_general_ci",
    Utf8mb4UnicodeCi => "utf8mb4_unicode_ci",
    Utf8mb4Bin => "utf8mb4_bin",
}

impl Keyword {
    /// Порядковый номер в таблице
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Ищет ключевое слово по написанию в нижнем регистре
    pub fn lookup(lowered: &[u8]) -> Option<Keyword> {
        std::str::from_utf8(lowered)
            .ok()
            .and_then(|text| KEYWORDS.get(text).copied())
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Дополнительные написания, которые исторически принимались прокси
pub const ALIASES: &[(&str, Keyword)] = &[
    ("cp1251_chinese_ci", Keyword::Cp1251GeneralCi),
    ("cp1251_chinese_cs", Keyword::Cp1251GeneralCs),
    ("cp1256_chinese_ci", Keyword::Cp1256GeneralCi),
    ("cp1257_chinese_ci", Keyword::Cp1257GeneralCi),
    ("cp850_chinese_ci", Keyword::Cp850GeneralCi),
    ("cp852_chinese_ci", Keyword::Cp852GeneralCi),
    ("cp866_chinese_ci", Keyword::Cp866GeneralCi),
];

lazy_static::lazy_static! {
    /// Глобальная таблица ключевых слов, включая дополнительные написания
    pub static ref KEYWORDS: HashMap<&'static str, Keyword> = Keyword::ALL
        .iter()
        .map(|kw| (kw.as_str(), *kw))
        .chain(ALIASES.iter().copied())
        .collect();
}
