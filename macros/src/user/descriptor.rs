//! `#[derive(Descriptor)]`
//!
//! ```ignore
//! #[derive(Descriptor)]
//! #[descriptor(terminal(Sqrt), inherit(Remainder, Pow))]
//! struct Accel {
//!     #[ancestor]
//!     host: Host,
//! }
//! ```
//!
//! expands to `Descriptor`, `Refinement` (from the `#[ancestor]` field) and
//! one `Route` impl per listed operation.

use proc_macro2::TokenStream as TokenStream2;
use quote::{ToTokens, quote};
use syn::{Data, DeriveInput, Field, Fields, Member, Type, parse_quote, spanned::Spanned};

use crate::common::{RouteArgs, has_marker};

pub fn expand_derive_descriptor(input: DeriveInput) -> TokenStream2 {
    match derive_descriptor(input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn derive_descriptor(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let routes = RouteArgs::from_attrs(&input.attrs, "descriptor")?;
    check_duplicates(&routes)?;

    let ancestor = find_ancestor(&input)?;

    if ancestor.is_none() {
        if let Some(op) = routes.inherit.first() {
            return Err(syn::Error::new(
                op.span(),
                format!("`{ident}` inherits operations but has no `#[ancestor]` field"),
            ));
        }
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let refinement = match &ancestor {
        Some((member, ty)) => {
            let mut generics = input.generics.clone();
            generics
                .make_where_clause()
                .predicates
                .push(parse_quote!(#ty: ::capmath::Descriptor));
            let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
            quote! {
                impl #impl_generics ::capmath::Refinement for #ident #ty_generics #where_clause {
                    type Ancestor = #ty;

                    #[inline(always)]
                    fn ancestor(&self) -> &Self::Ancestor {
                        &self.#member
                    }
                }
            }
        }
        None => quote! {},
    };

    let terminal = routes.terminal.iter().map(|op| {
        quote! {
            impl #impl_generics ::capmath::Route<#op> for #ident #ty_generics #where_clause {
                type Via = ::capmath::Terminal;
            }
        }
    });

    let inherit = routes.inherit.iter().map(|op| {
        quote! {
            impl #impl_generics ::capmath::Route<#op> for #ident #ty_generics #where_clause {
                type Via = ::capmath::Inherit;
            }
        }
    });

    Ok(quote! {
        impl #impl_generics ::capmath::Descriptor for #ident #ty_generics #where_clause {}

        #refinement

        #(#terminal)*
        #(#inherit)*
    })
}

/// The single `#[ancestor]` field, as (member, type).
fn find_ancestor(input: &DeriveInput) -> syn::Result<Option<(Member, Type)>> {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span(),
                "Descriptor can only be derived for structs",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span(),
                "Descriptor can only be derived for structs",
            ));
        }
    };

    let marked: Vec<(usize, &Field)> = match fields {
        Fields::Named(named) => named.named.iter().enumerate().collect(),
        Fields::Unnamed(unnamed) => unnamed.unnamed.iter().enumerate().collect(),
        Fields::Unit => Vec::new(),
    }
    .into_iter()
    .filter(|(_, field)| has_marker(&field.attrs, "ancestor"))
    .collect();

    let (index, field) = match marked.as_slice() {
        [] => return Ok(None),
        [one] => *one,
        [_, second, ..] => {
            return Err(syn::Error::new(
                second.1.span(),
                "a descriptor has exactly one ancestor; found a second `#[ancestor]` field",
            ));
        }
    };

    if names_self(&field.ty, &input.ident) {
        return Err(syn::Error::new(
            field.ty.span(),
            format!("`{}` cannot be its own ancestor", input.ident),
        ));
    }

    let member = match &field.ident {
        Some(name) => Member::Named(name.clone()),
        None => Member::Unnamed(index.into()),
    };

    Ok(Some((member, field.ty.clone())))
}

/// Only a bare `Self` or the struct's own name counts. Qualified paths may
/// name a different type, and wrappers are caught by the resolver instead.
fn names_self(ty: &Type, ident: &syn::Ident) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };
    if path.qself.is_some() || path.path.leading_colon.is_some() {
        return false;
    }
    match path.path.segments.first() {
        Some(seg) if path.path.segments.len() == 1 => seg.ident == "Self" || seg.ident == *ident,
        _ => false,
    }
}

fn check_duplicates(routes: &RouteArgs) -> syn::Result<()> {
    let mut seen: Vec<String> = Vec::new();
    for op in routes.terminal.iter().chain(routes.inherit.iter()) {
        let key = op.to_token_stream().to_string();
        if seen.contains(&key) {
            return Err(syn::Error::new(
                op.span(),
                format!("operation `{key}` is routed more than once"),
            ));
        }
        seen.push(key);
    }
    Ok(())
}
