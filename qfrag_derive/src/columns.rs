use darling::{FromDeriveInput, FromField, ast, util::Override};
use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, ext::IdentExt, parse_macro_input};

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(qfrag), supports(struct_named))]
struct ColumnsInput {
    ident: syn::Ident,
    generics: syn::Generics,
    data: ast::Data<(), ColumnField>,
}

#[derive(Debug, FromField)]
#[darling(attributes(qfrag))]
struct ColumnField {
    ident: Option<syn::Ident>,
    /// `column` uses the field name, `column = "..."` renames it.
    #[darling(default)]
    column: Option<Override<String>>,
}

impl ColumnField {
    fn column_name(&self) -> Option<String> {
        match self.column.as_ref()? {
            Override::Explicit(name) => Some(name.clone()),
            Override::Inherit => self.ident.as_ref().map(|ident| ident.unraw().to_string()),
        }
    }
}

pub fn column_schema_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let info = match ColumnsInput::from_derive_input(&input) {
        Ok(v) => v,
        Err(e) => return e.write_errors().into(),
    };

    let struct_name = &info.ident;
    let (impl_gen, ty_gen, where_clause) = info.generics.split_for_impl();

    let names = info
        .data
        .take_struct()
        .map(|fields| {
            fields
                .fields
                .iter()
                .filter_map(ColumnField::column_name)
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    quote! {
        impl #impl_gen ::qfrag::ColumnSchema for #struct_name #ty_gen #where_clause {
            fn columns() -> ::qfrag::Columns {
                ::qfrag::Columns::from_static(&[#(#names),*])
            }
        }
    }
    .into()
}
