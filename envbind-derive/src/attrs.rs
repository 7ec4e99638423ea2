//! Attribute parsing for `#[env(...)]` annotations.
//!
//! This module extracts and validates binding attributes from the struct and
//! its fields during macro expansion.

use syn::ext::IdentExt;
use syn::{Attribute, Field, LitStr, Meta};

/// Parsed struct-level `#[env(...)]` attributes.
#[derive(Debug, Default)]
pub struct StructAttrs {
    /// Prefix prepended to every variable name in the struct.
    pub prefix: String,
}

impl StructAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("env")) {
            attr.parse_nested_meta(|meta| {
                // prefix = "..."
                if meta.path.is_ident("prefix") {
                    let lit: LitStr = meta.value()?.parse()?;
                    parsed.prefix = lit.value();
                    return Ok(());
                }

                Err(meta.error("unsupported struct-level env attribute"))
            })?;
        }

        Ok(parsed)
    }
}

/// Parsed field-level `#[env(...)]` attributes.
///
/// A field without any `#[env]` attribute is not bound at all.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Whether the field carries an `#[env]` attribute.
    pub bound: bool,

    /// Environment variable name.
    ///
    /// If `None`, the field name in upper case is used.
    pub name: Option<String>,

    /// Literal default, parsed like an environment value.
    pub default: Option<String>,
}

impl FieldAttrs {
    /// Extract and parse `#[env(...)]` attributes from a struct field.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("env")) {
            attrs.bound = true;

            // Bare #[env]
            if let Meta::Path(_) = attr.meta {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                // name = "..."
                if meta.path.is_ident("name") {
                    let lit: LitStr = meta.value()?.parse()?;
                    if lit.value().is_empty() {
                        return Err(syn::Error::new(
                            lit.span(),
                            "env name must not be empty",
                        ));
                    }
                    attrs.name = Some(lit.value());
                    return Ok(());
                }

                // default = "..."
                if meta.path.is_ident("default") {
                    let value = meta.value()?;
                    let lit: LitStr = value.parse().map_err(|e| {
                        syn::Error::new(e.span(), "env default must be a string literal")
                    })?;
                    attrs.default = Some(lit.value());
                    return Ok(());
                }

                Err(meta.error("unsupported env attribute"))
            })?;
        }

        Ok(attrs)
    }

    /// Variable name for `field`, with `prefix` applied.
    ///
    /// Returns `None` for fields that are not bound.
    pub fn variable_name(&self, field: &Field, prefix: &str) -> Option<String> {
        if !self.bound {
            return None;
        }

        let base = match &self.name {
            Some(name) => name.clone(),
            None => field.ident.as_ref()?.unraw().to_string().to_uppercase(),
        };

        Some(format!("{}{}", prefix, base))
    }
}
