use std::fmt::Write;

use crate::{
    bind::{Bind, Binds},
    dialect::{Dialect, HasDialect},
    error::{Error, Result},
    query::Query,
    writer::{FormatContext, FormatWriter},
};

/// Renders [`Query`] values into SQL for one dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Builder {
    dialect: Dialect,
}

impl Builder {
    /// Create a builder from a dialect name such as `"postgres"` or `"sqlite3"`.
    pub fn new(dialect: &str) -> Result<Self> {
        let dialect = dialect.parse::<Dialect>().inspect_err(|err| {
            tracing::debug!(error = %err, "rejected dialect");
        })?;
        Ok(Self::with_dialect(dialect))
    }

    pub fn with_dialect(dialect: Dialect) -> Self {
        Self { dialect }
    }

    pub fn of<D: HasDialect>() -> Self {
        Self::with_dialect(D::DIALECT)
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Render `query` and collect its binds in placeholder order.
    ///
    /// Fails with [`Error::MissingTable`] when `query.from` is empty; every
    /// other part of the query is optional.
    pub fn build(&self, query: Query) -> Result<BuiltQuery> {
        if query.from.is_empty() {
            return Err(Error::MissingTable);
        }

        let size_hint = 64;
        let mut sql = String::with_capacity(size_hint);
        let mut context = FormatContext::new(&mut sql, self.dialect);
        query.format_writer(&mut context)?;

        let params = query.filter.map(|filter| filter.into_binds()).unwrap_or_default();

        tracing::trace!(dialect = %self.dialect, sql = %sql, params = params.len(), "built query");

        Ok(BuiltQuery { sql, params })
    }
}

impl FormatWriter for Query {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> std::fmt::Result {
        context.writer.write_str("SELECT ")?;
        self.select.format_writer(context)?;
        context.writer.write_str(" FROM ")?;
        self.from.format_writer(context)?;

        if let Some(ref filter) = self.filter {
            if !filter.is_empty() {
                context.writer.write_str(" WHERE ")?;
                filter.format_writer(context)?;
            }
        }

        if let Some(ref order_by) = self.order_by {
            context.writer.write_char(' ')?;
            order_by.format_writer(context)?;
        }

        if self.limit > 0 {
            write!(context.writer, " LIMIT {}", self.limit)?;
        }

        if self.offset > 0 {
            write!(context.writer, " OFFSET {}", self.offset)?;
        }

        Ok(())
    }
}

/// Rendered SQL and the values for its placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    sql: String,
    params: Binds,
}

impl BuiltQuery {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Bind] {
        &self.params
    }

    pub fn into_parts(self) -> (String, Binds) {
        (self.sql, self.params)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        col::{ColumnSchema, Columns, Projection},
        cond::Where,
        dialect::{Postgres, SqlServer},
        order::OrderBy,
    };

    use super::*;

    struct User;

    impl ColumnSchema for User {
        fn columns() -> Columns {
            Columns::from_static(&["name", "age"])
        }
    }

    fn filter() -> Where {
        Where::new()
            .and_where("foo < %s", 42)
            .and_where("bar LIKE %s", "%ending")
            .and_where_opt("foobar = %s", None::<i32>)
    }

    fn full_query() -> Query {
        Query {
            select: Projection::of::<User>(),
            from: "users".into(),
            filter: Some(filter()),
            order_by: Some(OrderBy::new("id").desc()),
            limit: 10,
            offset: 100,
        }
    }

    fn postgres() -> Builder {
        Builder::new("postgres").unwrap()
    }

    #[test]
    fn test_full_query() {
        let built = postgres().build(full_query()).unwrap();
        assert_eq!(
            "SELECT \"name\", \"age\" FROM users WHERE foo < $1 AND bar LIKE $2 ORDER BY id DESC LIMIT 10 OFFSET 100",
            built.sql()
        );
        assert_eq!(&[Bind::I32(42), Bind::from("%ending")], built.params());
    }

    #[test]
    fn test_omit_offset() {
        let query = Query {
            offset: 0,
            ..full_query()
        };
        let built = postgres().build(query).unwrap();
        assert_eq!(
            "SELECT \"name\", \"age\" FROM users WHERE foo < $1 AND bar LIKE $2 ORDER BY id DESC LIMIT 10",
            built.sql()
        );
    }

    #[test]
    fn test_omit_limit() {
        let query = Query {
            limit: 0,
            ..full_query()
        };
        let built = postgres().build(query).unwrap();
        assert_eq!(
            "SELECT \"name\", \"age\" FROM users WHERE foo < $1 AND bar LIKE $2 ORDER BY id DESC OFFSET 100",
            built.sql()
        );
    }

    #[test]
    fn test_omit_order_by() {
        let query = Query {
            order_by: None,
            ..full_query()
        };
        let built = postgres().build(query).unwrap();
        assert_eq!(
            "SELECT \"name\", \"age\" FROM users WHERE foo < $1 AND bar LIKE $2 LIMIT 10 OFFSET 100",
            built.sql()
        );
    }

    #[test]
    fn test_omit_where() {
        let query = Query {
            filter: None,
            ..full_query()
        };
        let built = postgres().build(query).unwrap();
        assert_eq!(
            "SELECT \"name\", \"age\" FROM users ORDER BY id DESC LIMIT 10 OFFSET 100",
            built.sql()
        );
        assert!(built.params().is_empty());
    }

    #[test]
    fn test_all_filters_skipped() {
        let query = Query {
            filter: Some(Where::new().and_where_opt("a = %s", None::<i32>)),
            order_by: None,
            limit: 0,
            offset: 0,
            ..full_query()
        };
        let built = postgres().build(query).unwrap();
        assert_eq!("SELECT \"name\", \"age\" FROM users", built.sql());
        assert!(built.params().is_empty());
    }

    #[test]
    fn test_missing_table() {
        let query = Query {
            from: "".into(),
            ..full_query()
        };
        let err = postgres().build(query).unwrap_err();
        assert!(err.is_missing_table());
    }

    #[test]
    fn test_unsupported_dialect() {
        let err = Builder::new("oracle").unwrap_err();
        assert!(err.is_unsupported_dialect());
    }

    #[test]
    fn test_fluent_query() {
        let query = Query::new()
            .select_as::<User>()
            .from("users")
            .filter(Where::new().and_where("age >= %s", 18))
            .order_by(OrderBy::new("name"))
            .limit(5);
        let (sql, params) = Builder::of::<Postgres>().build(query).unwrap().into_parts();
        assert_eq!(
            "SELECT \"name\", \"age\" FROM users WHERE age >= $1 ORDER BY name ASC LIMIT 5",
            sql
        );
        assert_eq!(vec![Bind::I32(18)], params);
    }

    #[test]
    fn test_wildcard_and_raw_projection() {
        let built = postgres().build(Query::new().from("users")).unwrap();
        assert_eq!("SELECT * FROM users", built.sql());

        let query = Query::new()
            .select(Projection::raw("count(*)"))
            .from("users");
        let built = postgres().build(query).unwrap();
        assert_eq!("SELECT count(*) FROM users", built.sql());
    }

    #[test]
    fn test_other_dialects() {
        let built = Builder::new("sqlite3").unwrap().build(full_query()).unwrap();
        assert_eq!(
            "SELECT `name`, `age` FROM users WHERE foo < ? AND bar LIKE ? ORDER BY id DESC LIMIT 10 OFFSET 100",
            built.sql()
        );

        let built = Builder::of::<SqlServer>().build(full_query()).unwrap();
        assert_eq!(
            "SELECT [name], [age] FROM users WHERE foo < @p1 AND bar LIKE @p2 ORDER BY id DESC LIMIT 10 OFFSET 100",
            built.sql()
        );
    }

    #[test]
    fn test_shared_base_filter() {
        let base = Where::new().and_where("tenant_id = %s", 1);
        let active = base.clone().and_raw("active");
        let named = base.and_where("name = %s", "bob");

        let built = postgres()
            .build(Query::new().from("users").filter(active))
            .unwrap();
        assert_eq!("SELECT * FROM users WHERE tenant_id = $1 AND active", built.sql());

        let built = postgres()
            .build(Query::new().from("users").filter(named))
            .unwrap();
        assert_eq!(
            "SELECT * FROM users WHERE tenant_id = $1 AND name = $2",
            built.sql()
        );
        assert_eq!(&[Bind::I32(1), Bind::from("bob")], built.params());
    }
}
