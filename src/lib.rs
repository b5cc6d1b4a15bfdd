//! Build parameterized SELECT statements from composable SQL fragments.
//!
//! ```
//! use qfrag::{Builder, Bind, Columns, ColumnSchema, OrderBy, Query, Where};
//!
//! struct User;
//!
//! impl ColumnSchema for User {
//!     fn columns() -> Columns {
//!         Columns::from_static(&["name", "age"])
//!     }
//! }
//!
//! let query = Query::new()
//!     .select_as::<User>()
//!     .from("users")
//!     .filter(Where::new().and_where("age > %s", 18))
//!     .order_by(OrderBy::new("id").desc())
//!     .limit(10);
//!
//! let built = Builder::new("postgres")?.build(query)?;
//! assert_eq!(
//!     r#"SELECT "name", "age" FROM users WHERE age > $1 ORDER BY id DESC LIMIT 10"#,
//!     built.sql()
//! );
//! assert_eq!(&[Bind::I32(18)], built.params());
//! # Ok::<(), qfrag::Error>(())
//! ```

extern crate self as qfrag;

mod bind;
mod builder;
mod col;
mod cond;
mod dialect;
mod error;
mod ident;
mod order;
mod query;
mod raw;
mod writer;

pub use bind::{Bind, Binds, IntoBind};
pub use builder::{Builder, BuiltQuery};
pub use col::{ColumnSchema, Columns, Projection};
pub use cond::{Fragment, Where};
pub use dialect::{Dialect, HasDialect, MySql, Postgres, SqlServer, Sqlite};
pub use error::{Error, Result};
pub use ident::{Ident, IntoIdent};
pub use order::{OrderBy, Ordering};
pub use query::Query;
pub use raw::Raw;

#[cfg(feature = "derive")]
pub use qfrag_derive::ColumnSchema;

/// Start a predicate chain with an unconditional fragment.
pub fn filter<T, V>(template: T, value: V) -> Where
where
    T: Into<smol_str::SmolStr>,
    V: IntoBind,
{
    Where::new().and_where(template, value)
}

/// Start a predicate chain with a fragment kept only when `value` is `Some`.
pub fn filter_opt<T, V>(template: T, value: Option<V>) -> Where
where
    T: Into<smol_str::SmolStr>,
    V: IntoBind,
{
    Where::new().and_where_opt(template, value)
}

pub fn order_by<T: Into<Raw>>(column: T) -> OrderBy {
    OrderBy::new(column)
}
