use std::{fmt, str::FromStr};

use crate::error::Error;

/// Placeholder and identifier conventions of a target database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Postgres,
    MySql,
    Sqlite,
    SqlServer,
}

impl Dialect {
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::MySql => "mysql",
            Dialect::Sqlite => "sqlite3",
            Dialect::SqlServer => "sqlserver",
        }
    }

    /// Write the positional token for the `index`-th bind, starting at 1.
    pub(crate) fn write_placeholder<W: fmt::Write>(self, writer: &mut W, index: usize) -> fmt::Result {
        match self {
            Dialect::Postgres => write!(writer, "${index}"),
            Dialect::MySql | Dialect::Sqlite => writer.write_char('?'),
            Dialect::SqlServer => write!(writer, "@p{index}"),
        }
    }

    /// Opening and closing identifier quotes.
    pub(crate) fn quotes(self) -> (char, char) {
        match self {
            Dialect::Postgres => ('"', '"'),
            Dialect::MySql | Dialect::Sqlite => ('`', '`'),
            Dialect::SqlServer => ('[', ']'),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pgx" => Ok(Dialect::Postgres),
            "mysql" => Ok(Dialect::MySql),
            "sqlite" | "sqlite3" => Ok(Dialect::Sqlite),
            "sqlserver" | "mssql" => Ok(Dialect::SqlServer),
            _ => Err(Error::UnsupportedDialect(s.to_owned())),
        }
    }
}

pub trait HasDialect {
    const DIALECT: Dialect;
}

pub struct Postgres;

impl HasDialect for Postgres {
    const DIALECT: Dialect = Dialect::Postgres;
}

pub struct MySql;

impl HasDialect for MySql {
    const DIALECT: Dialect = Dialect::MySql;
}

pub struct Sqlite;

impl HasDialect for Sqlite {
    const DIALECT: Dialect = Dialect::Sqlite;
}

pub struct SqlServer;

impl HasDialect for SqlServer {
    const DIALECT: Dialect = Dialect::SqlServer;
}

#[cfg(feature = "postgres")]
impl HasDialect for sqlx::Postgres {
    const DIALECT: Dialect = Dialect::Postgres;
}

#[cfg(feature = "mysql")]
impl HasDialect for sqlx::MySql {
    const DIALECT: Dialect = Dialect::MySql;
}

#[cfg(feature = "sqlite")]
impl HasDialect for sqlx::Sqlite {
    const DIALECT: Dialect = Dialect::Sqlite;
}
