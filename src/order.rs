use std::fmt;

use crate::{
    raw::Raw,
    writer::{self, FormatWriter},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Ordering {
    #[default]
    Asc,
    Desc,
}

impl FormatWriter for Ordering {
    fn format_writer<W: fmt::Write>(
        &self,
        context: &mut writer::FormatContext<'_, W>,
    ) -> fmt::Result {
        match self {
            Ordering::Asc => context.writer.write_str("ASC"),
            Ordering::Desc => context.writer.write_str("DESC"),
        }
    }
}

/// Sort key of a query, ascending unless [`OrderBy::desc`] is called.
///
/// The column is written verbatim, so `"id, name"` sorts by both fields in
/// the same direction.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    column: Raw,
    ordering: Ordering,
}

impl OrderBy {
    pub fn new<T>(column: T) -> Self
    where
        T: Into<Raw>,
    {
        Self {
            column: column.into(),
            ordering: Ordering::Asc,
        }
    }

    pub fn desc(mut self) -> Self {
        self.ordering = Ordering::Desc;
        self
    }

    pub fn asc(mut self) -> Self {
        self.ordering = Ordering::Asc;
        self
    }

    pub fn column(&self) -> &str {
        self.column.as_str()
    }

    pub fn ordering(&self) -> Ordering {
        self.ordering
    }
}

impl FormatWriter for OrderBy {
    fn format_writer<W: fmt::Write>(
        &self,
        context: &mut writer::FormatContext<'_, W>,
    ) -> fmt::Result {
        context.writer.write_str("ORDER BY ")?;
        self.column.format_writer(context)?;
        context.writer.write_char(' ')?;
        self.ordering.format_writer(context)
    }
}
