use std::fmt;

use crate::{
    ident::{Ident, IntoIdent},
    raw::Raw,
    writer::{self, FormatWriter},
};

/// Ordered column names of a projection. Empty renders as `*`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Columns(Vec<Ident>);

impl Columns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_static(names: &[&'static str]) -> Self {
        Self(names.iter().copied().map(Ident::new_static).collect())
    }

    pub fn push<T: IntoIdent>(&mut self, column: T) {
        self.0.push(column.into_ident());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ident> {
        self.0.iter()
    }
}

impl<T: IntoIdent> FromIterator<T> for Columns {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(IntoIdent::into_ident).collect())
    }
}

impl FormatWriter for Columns {
    fn format_writer<W: fmt::Write>(
        &self,
        context: &mut writer::FormatContext<'_, W>,
    ) -> fmt::Result {
        if self.0.is_empty() {
            return context.writer.write_char('*');
        }
        for (index, elem) in self.0.iter().enumerate() {
            if index > 0 {
                context.writer.write_str(", ")?;
            }
            elem.format_writer(context)?;
        }
        Ok(())
    }
}

/// Column metadata of a struct, in field declaration order.
///
/// Usually derived with `#[derive(ColumnSchema)]`, mapping each field
/// tagged `#[qfrag(column = "...")]` to its column name.
pub trait ColumnSchema {
    fn columns() -> Columns;
}

/// What a SELECT projects.
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    Columns(Columns),
    Raw(Raw),
}

impl Default for Projection {
    fn default() -> Self {
        Projection::Columns(Columns::default())
    }
}

impl Projection {
    /// Project the columns declared by `T`.
    pub fn of<T: ColumnSchema>() -> Self {
        Projection::Columns(T::columns())
    }

    /// Project a caller-written select list, e.g. `count(*) as total`.
    pub fn raw<T: Into<Raw>>(value: T) -> Self {
        Projection::Raw(value.into())
    }
}

impl From<Columns> for Projection {
    fn from(columns: Columns) -> Self {
        Projection::Columns(columns)
    }
}

impl From<Raw> for Projection {
    fn from(raw: Raw) -> Self {
        Projection::Raw(raw)
    }
}

impl FormatWriter for Projection {
    fn format_writer<W: fmt::Write>(
        &self,
        context: &mut writer::FormatContext<'_, W>,
    ) -> fmt::Result {
        match self {
            Projection::Columns(columns) => columns.format_writer(context),
            Projection::Raw(raw) => raw.format_writer(context),
        }
    }
}
