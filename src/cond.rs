//! Conjunctive WHERE predicates.
//!
//! A [`Where`] is an ordered list of fragments. Each fragment is a template
//! in which `%s` marks a bind slot, together with the values for those
//! slots. Rendering joins the fragments with `AND` and replaces every `%s`
//! with the dialect's positional token, numbered across the whole clause.

use std::fmt;

use smol_str::SmolStr;

use crate::{
    bind::{Bind, Binds, IntoBind},
    writer::{FormatContext, FormatWriter},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    template: SmolStr,
    binds: Binds,
}

impl Fragment {
    pub fn new<T>(template: T, binds: Binds) -> Self
    where
        T: Into<SmolStr>,
    {
        Self {
            template: template.into(),
            binds,
        }
    }

    pub fn template(&self) -> &str {
        self.template.as_str()
    }

    pub fn binds(&self) -> &[Bind] {
        &self.binds
    }
}

impl FormatWriter for Fragment {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        let sql = self.template.as_str();
        let mut span_start = 0;

        let mut chars = sql.char_indices().peekable();
        while let Some((index, char)) = chars.next() {
            if char != '%' {
                continue;
            }
            match chars.peek() {
                Some(&(_, 's')) => {
                    context.writer.write_str(&sql[span_start..index])?;
                    context.write_placeholder()?;
                    chars.next();
                    span_start = index + 2;
                }
                // %% is a literal percent sign
                Some(&(_, '%')) => {
                    context.writer.write_str(&sql[span_start..=index])?;
                    chars.next();
                    span_start = index + 2;
                }
                _ => {}
            }
        }

        if span_start < sql.len() {
            context.writer.write_str(&sql[span_start..])?;
        }

        Ok(())
    }
}

/// An AND-joined list of predicate fragments.
///
/// Every append consumes the accumulator and returns the extended one, so a
/// whole filter can be written as a single expression:
///
/// ```
/// use qfrag::Where;
///
/// let name: Option<&str> = None;
/// let filter = Where::new()
///     .and_where("age > %s", 18)
///     .and_where_opt("name = %s", name);
/// assert_eq!(1, filter.len());
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Where {
    fragments: Vec<Fragment>,
}

impl Where {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment holding a single bind slot.
    pub fn and_where<T, V>(mut self, template: T, value: V) -> Self
    where
        T: Into<SmolStr>,
        V: IntoBind,
    {
        self.fragments
            .push(Fragment::new(template, vec![value.into_bind()]));
        self
    }

    /// Append a fragment only when `value` is present.
    ///
    /// A `None` leaves the accumulator untouched: no fragment and no bind.
    pub fn and_where_opt<T, V>(self, template: T, value: Option<V>) -> Self
    where
        T: Into<SmolStr>,
        V: IntoBind,
    {
        match value {
            Some(value) => self.and_where(template, value),
            None => self,
        }
    }

    /// Append a fragment without binds.
    pub fn and_raw<T>(mut self, template: T) -> Self
    where
        T: Into<SmolStr>,
    {
        self.fragments.push(Fragment::new(template, Binds::new()));
        self
    }

    pub fn push(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Bind values in the order their slots appear in the rendered clause.
    pub fn binds(&self) -> impl Iterator<Item = &Bind> {
        self.fragments.iter().flat_map(|fragment| fragment.binds.iter())
    }

    pub(crate) fn into_binds(self) -> Binds {
        self.fragments
            .into_iter()
            .flat_map(|fragment| fragment.binds)
            .collect()
    }
}

impl FormatWriter for Where {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        for (index, fragment) in self.fragments.iter().enumerate() {
            if index > 0 {
                context.writer.write_str(" AND ")?;
            }
            fragment.format_writer(context)?;
        }
        Ok(())
    }
}
