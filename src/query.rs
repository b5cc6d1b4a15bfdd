use crate::{
    col::{ColumnSchema, Projection},
    cond::Where,
    order::OrderBy,
    raw::Raw,
};

/// Declarative description of a SELECT statement.
///
/// A `limit` or `offset` of `0` leaves the clause out.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Query {
    pub select: Projection,
    pub from: Raw,
    pub filter: Option<Where>,
    pub order_by: Option<OrderBy>,
    pub limit: u64,
    pub offset: u64,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_as<T: ColumnSchema>(mut self) -> Self {
        self.select = Projection::of::<T>();
        self
    }

    pub fn select<T: Into<Projection>>(mut self, projection: T) -> Self {
        self.select = projection.into();
        self
    }

    pub fn from<T: Into<Raw>>(mut self, table: T) -> Self {
        self.from = table.into();
        self
    }

    pub fn filter(mut self, filter: Where) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }
}
