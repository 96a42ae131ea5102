use proc_macro::TokenStream;
use quote::{quote, quote_spanned};
use syn::{spanned::Spanned, Data, DeriveInput, Expr, ExprLit, Fields, Lit, Meta};

/// Implements `Snapshot` for a struct with named fields. Every field is read
/// from the registered setting of the same name, which can be overridden with
/// `#[setting = "name"]`. The field's type needs to implement `FromValue`.
#[proc_macro_derive(Snapshot, attributes(setting))]
pub fn snapshot(input: TokenStream) -> TokenStream {
    let ast = syn::parse_macro_input!(input as DeriveInput);
    match expand(ast) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(ast: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let fields = match ast.data {
        Data::Struct(s) => match s.fields {
            Fields::Named(fields) => fields.named,
            other => {
                return Err(syn::Error::new(
                    other.span(),
                    "Only structs with named fields are supported",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new(
                ast.ident.span(),
                "Only structs are supported",
            ))
        }
    };

    let struct_name = ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let mut field_reads = Vec::new();
    for field in fields {
        let Some(field_name) = field.ident else {
            continue;
        };
        let span = field_name.span();
        let mut setting_name = field_name.to_string();
        for attr in &field.attrs {
            let Meta::NameValue(name_value) = &attr.meta else {
                continue;
            };
            if !name_value.path.is_ident("setting") {
                continue;
            }
            let Expr::Lit(ExprLit {
                lit: Lit::Str(name),
                ..
            }) = &name_value.value
            else {
                return Err(syn::Error::new(
                    name_value.value.span(),
                    "expected a string literal naming the setting",
                ));
            };
            setting_name = name.value();
        }
        field_reads.push(quote_spanned! { span =>
            #field_name: registry.get(#setting_name)?.get_as(container)?
        });
    }

    Ok(quote! {
        impl #impl_generics ::settings_schema::settings::Snapshot for #struct_name #ty_generics #where_clause {
            fn load<C: ::settings_schema::settings::Container + ?::core::marker::Sized>(
                registry: &::settings_schema::settings::Registry,
                container: &C,
            ) -> ::core::result::Result<Self, ::settings_schema::Error> {
                ::core::result::Result::Ok(Self {
                    #(#field_reads,)*
                })
            }
        }
    })
}
