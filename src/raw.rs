use std::fmt;

use smol_str::SmolStr;

use crate::writer::FormatWriter;

/// A caller-trusted SQL snippet written to the output unchanged.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Raw(SmolStr);

impl Raw {
    pub fn new<T>(value: T) -> Self
    where
        T: Into<SmolStr>,
    {
        Self(value.into())
    }

    pub fn new_static(value: &'static str) -> Self {
        Self(SmolStr::new_static(value))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Raw {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Raw {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<SmolStr> for Raw {
    fn from(value: SmolStr) -> Self {
        Self(value)
    }
}

impl fmt::Display for Raw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FormatWriter for Raw {
    fn format_writer<W: fmt::Write>(
        &self,
        context: &mut crate::writer::FormatContext<'_, W>,
    ) -> fmt::Result {
        context.writer.write_str(self.0.as_str())
    }
}

#[cfg(test)]
mod tests {
    use crate::{dialect::Dialect, tests::format_writer};

    use super::*;

    #[test]
    fn test_raw_verbatim() {
        let raw = Raw::new_static("count(*) as total, \"id\"");
        assert_eq!("count(*) as total, \"id\"", format_writer(raw, Dialect::MySql));
    }

    #[test]
    fn test_raw_empty() {
        assert!(Raw::default().is_empty());
        assert!(!Raw::from("users").is_empty());
    }
}
