//! Derive macro implementation for envbind

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

mod attrs;

use attrs::{FieldAttrs, StructAttrs};

/// `EnvConfig` derive macro
///
/// Implements `envbind::EnvConfig` by listing every field that carries an
/// `#[env]` attribute. Fields without one are never looked at.
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[env(prefix = "PREFIX_")]`: Add prefix to all env var names
///
/// **Field-level**:
/// - `#[env]`: Bind to the field name in upper case
/// - `#[env(name = "CUSTOM_NAME")]`: Bind to a custom environment variable name
/// - `#[env(default = "value")]`: Literal used when the variable is unset
///
/// Deriving on an enum, union or tuple struct compiles, but binding it fails
/// with `EnvError::BadTarget`.
///
/// # Example
///
/// See the `envbind` crate documentation for usage examples.
#[proc_macro_derive(EnvConfig, attributes(env))]
pub fn derive_env_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let struct_attrs = StructAttrs::from_attrs(&input.attrs)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Some(&fields.named),
            Fields::Unit => None,
            Fields::Unnamed(_) => return Ok(bad_target(input, "tuple structs have no named fields")),
        },
        Data::Enum(_) => return Ok(bad_target(input, "target must be a struct, not an enum")),
        Data::Union(_) => return Ok(bad_target(input, "target must be a struct, not a union")),
    };

    // Build one Field per bound struct field, in declaration order
    let mut bindings = Vec::new();
    for field in fields.into_iter().flatten() {
        let attrs = FieldAttrs::from_field(field)?;
        let Some(env_var_name) = attrs.variable_name(field, &struct_attrs.prefix) else {
            continue;
        };
        let field_name = &field.ident;

        let with_default = attrs.default.map(|default_value| {
            quote! { .with_default(#default_value) }
        });

        bindings.push(quote! {
            ::envbind::Field::bind(#env_var_name, &mut self.#field_name) #with_default
        });
    }

    Ok(quote! {
        impl #impl_generics ::envbind::EnvConfig for #struct_name #ty_generics #where_clause {
            fn fields(
                &mut self,
            ) -> ::core::result::Result<::std::vec::Vec<::envbind::Field<'_>>, ::envbind::EnvError> {
                ::core::result::Result::Ok(::std::vec![#(#bindings),*])
            }
        }
    })
}

/// Implementation that rejects the target at bind time.
fn bad_target(input: &DeriveInput, reason: &str) -> proc_macro2::TokenStream {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::envbind::EnvConfig for #struct_name #ty_generics #where_clause {
            fn fields(
                &mut self,
            ) -> ::core::result::Result<::std::vec::Vec<::envbind::Field<'_>>, ::envbind::EnvError> {
                ::core::result::Result::Err(::envbind::EnvError::bad_target::<Self>(#reason))
            }
        }
    }
}
