//! Delegation depth alias generation.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Ident, LitInt, parse::Parse, parse::ParseStream};

pub struct DepthInput {
    pub max: usize,
}

impl Parse for DepthInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        if max == 0 {
            return Err(syn::Error::new(lit.span(), "depth_aliases! needs at least one level"));
        }
        Ok(DepthInput { max })
    }
}

/// `D0 = Z`, then `Dn = S<D(n-1)>` up to `max`, each with a doc line.
pub fn expand_depth_aliases(input: DepthInput) -> TokenStream {
    let aliases = (0..=input.max).map(|n| {
        let name = Ident::new(&format!("D{n}"), Span::call_site());
        let doc = format!("Delegation depth {n}.");
        let body = if n == 0 {
            quote! { Z }
        } else {
            let prev = Ident::new(&format!("D{}", n - 1), Span::call_site());
            quote! { S<#prev> }
        };
        quote! {
            #[doc = #doc]
            pub type #name = #body;
        }
    });

    quote! { #(#aliases)* }
}
