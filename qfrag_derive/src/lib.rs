use proc_macro::TokenStream;

mod columns;

/// Implement `qfrag::ColumnSchema` from field attributes.
///
/// Only fields tagged `#[qfrag(column)]` or `#[qfrag(column = "name")]`
/// become columns, in declaration order.
#[proc_macro_derive(ColumnSchema, attributes(qfrag))]
pub fn column_schema(input: TokenStream) -> TokenStream {
    columns::column_schema_impl(input)
}
