//! Common parsing utilities
//!
//! Shared parsing helpers for consistent attribute syntax.

use syn::{
    Attribute, Ident, Path, Token,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

// =============================================================================
// Route Lists: `terminal(A, B), inherit(C)`
// =============================================================================

/// Operations listed in `#[descriptor(...)]`.
#[derive(Default)]
pub struct RouteArgs {
    pub terminal: Vec<Path>,
    pub inherit: Vec<Path>,
}

impl Parse for RouteArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut args = RouteArgs::default();

        while !input.is_empty() {
            let keyword: Ident = input.parse()?;
            let content;
            syn::parenthesized!(content in input);
            let ops = parse_comma_separated::<Path>(&content)?;

            if keyword == "terminal" {
                args.terminal.extend(ops);
            } else if keyword == "inherit" {
                args.inherit.extend(ops);
            } else {
                return Err(syn::Error::new(
                    keyword.span(),
                    format!("unknown route `{keyword}`, expected `terminal(..)` or `inherit(..)`"),
                ));
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(args)
    }
}

impl RouteArgs {
    /// Merge every `#[<name>(...)]` attribute into one list.
    pub fn from_attrs(attrs: &[Attribute], name: &str) -> syn::Result<Self> {
        let mut merged = RouteArgs::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident(name)) {
            let args: RouteArgs = attr.parse_args()?;
            merged.terminal.extend(args.terminal);
            merged.inherit.extend(args.inherit);
        }
        Ok(merged)
    }
}

// =============================================================================
// Comma-separated List Parsing
// =============================================================================

/// Parse a comma-separated list of items
pub fn parse_comma_separated<T: Parse>(input: ParseStream) -> syn::Result<Vec<T>> {
    let items = Punctuated::<T, Token![,]>::parse_terminated(input)?;
    Ok(items.into_iter().collect())
}

// =============================================================================
// Attribute Detection
// =============================================================================

/// Check if a marker attribute like `#[ancestor]` is present
pub fn has_marker(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|a| a.path().is_ident(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    #[test]
    fn test_parse_route_lists() {
        let args: RouteArgs =
            syn::parse2(quote!(terminal(Remainder, ops::Sqrt), inherit(Pow,))).unwrap();
        assert_eq!(args.terminal.len(), 2);
        assert_eq!(args.inherit.len(), 1);
        assert!(args.terminal[1].segments.len() == 2);
    }

    #[test]
    fn test_repeated_keyword_extends() {
        let args: RouteArgs = syn::parse2(quote!(inherit(A), inherit(B))).unwrap();
        assert_eq!(args.inherit.len(), 2);
        assert!(args.terminal.is_empty());
    }

    #[test]
    fn test_unknown_keyword_rejected() {
        let err = syn::parse2::<RouteArgs>(quote!(delegate(A))).err().unwrap();
        assert!(err.to_string().contains("unknown route `delegate`"));
    }
}
