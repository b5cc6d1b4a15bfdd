use std::{fmt::Write, ops::Deref};

use crate::dialect::Dialect;

pub(crate) trait FormatWriter {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> std::fmt::Result;
}

pub(crate) struct FormatContext<'a, W: Write> {
    pub(crate) writer: &'a mut W,
    pub(crate) dialect: Dialect,
    pub(crate) placeholder: usize,
}

impl<'a, W: Write> FormatContext<'a, W> {
    pub fn new(writer: &'a mut W, dialect: Dialect) -> Self {
        Self {
            writer,
            dialect,
            placeholder: 0,
        }
    }

    pub(crate) fn write_ident(&mut self, part: &str) -> std::fmt::Result {
        if part == "*" {
            return self.writer.write_char('*');
        }

        let (open, close) = self.dialect.quotes();
        self.writer.write_char(open)?;

        // duplicate the closing quote if present
        let mut last = 0;
        for (index, char) in part.char_indices() {
            if char == close {
                self.writer.write_str(&part[last..index])?;
                self.writer.write_char(close)?;
                self.writer.write_char(close)?;
                last = index + char.len_utf8();
            }
        }

        // write trailing slice
        if last < part.len() {
            self.writer.write_str(&part[last..])?;
        }

        self.writer.write_char(close)
    }

    pub(crate) fn write_placeholder(&mut self) -> std::fmt::Result {
        self.placeholder += 1;
        self.dialect.write_placeholder(&mut *self.writer, self.placeholder)
    }
}

impl<D> FormatWriter for D
where
    D: Deref,
    D::Target: FormatWriter,
{
    fn format_writer<W: std::fmt::Write>(
        &self,
        ctx: &mut FormatContext<'_, W>,
    ) -> std::fmt::Result {
        self.deref().format_writer(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(part: &str, dialect: Dialect) -> String {
        let mut str = String::new();
        let mut context = FormatContext::new(&mut str, dialect);
        context.write_ident(part).unwrap();
        str
    }

    #[test]
    fn test_ident_quotes() {
        assert_eq!("\"name\"", ident("name", Dialect::Postgres));
        assert_eq!("`name`", ident("name", Dialect::MySql));
        assert_eq!("`name`", ident("name", Dialect::Sqlite));
        assert_eq!("[name]", ident("name", Dialect::SqlServer));
    }

    #[test]
    fn test_ident_escape() {
        assert_eq!("\"i\"\"d\"", ident("i\"d", Dialect::Postgres));
        assert_eq!("\"i`d\"", ident("i`d", Dialect::Postgres));
        assert_eq!("`i``d`", ident("i`d", Dialect::MySql));
        assert_eq!("[i]]d]", ident("i]d", Dialect::SqlServer));
    }

    #[test]
    fn test_ident_wildcard() {
        assert_eq!("*", ident("*", Dialect::Postgres));
    }

    #[test]
    fn test_placeholder_counter() {
        let mut str = String::new();
        let mut context = FormatContext::new(&mut str, Dialect::Postgres);
        context.write_placeholder().unwrap();
        context.writer.write_str(", ").unwrap();
        context.write_placeholder().unwrap();
        assert_eq!(2, context.placeholder);
        assert_eq!("$1, $2", str);
    }
}
