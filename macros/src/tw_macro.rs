//! tw! macro: validate a utility-class style string at compile time.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Error, LitStr, Result};

// ---------------------------------------------------------------------------
// Keyword tables
// ---------------------------------------------------------------------------

const PALETTE_FAMILIES: &[&str] = &[
    "red", "orange", "blue", "green", "yellow", "purple", "pink", "gray",
];

const LITERAL_FAMILIES: &[&str] = &["black", "white", "transparent"];

const THEME_ROLES: &[&str] = &[
    "primary",
    "secondary",
    "tertiary",
    "surface",
    "onSurface",
    "onPrimary",
    "onSecondary",
    "onTertiary",
    "onError",
];

const RADIUS_SCALES: &[&str] = &[
    "none", "sm", "md", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
    "10xl", "full",
];

const CORNERS: &[&str] = &["tl", "tr", "bl", "br"];

const SIZE_VALUES: &[&str] = &["full", "1/2", "1/3", "1/4", "1/5"];

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check one token. Returns a message describing the problem, if any.
pub(crate) fn check_token(token: &str) -> Option<String> {
    if let Some(rest) = token.strip_prefix("bg-") {
        // Only the `bg-<family>-<shade>` shape is a background token.
        let (family, shade) = rest.split_once('-')?;
        if shade.is_empty() || shade.contains('-') {
            return None;
        }
        let known = PALETTE_FAMILIES.contains(&family)
            || LITERAL_FAMILIES.contains(&family)
            || THEME_ROLES.contains(&family);
        return (!known).then(|| format!("unknown color family `{family}` in `{token}`"));
    }

    if let Some(rest) = token.strip_prefix("rounded-") {
        return match rest.split_once('-') {
            Some((corner, _)) if !CORNERS.contains(&corner) => {
                Some(format!("unknown corner `{corner}` in `{token}`"))
            }
            Some((_, scale)) if !RADIUS_SCALES.contains(&scale) => {
                Some(format!("unknown radius scale `{scale}` in `{token}`"))
            }
            Some(_) => None,
            None if !RADIUS_SCALES.contains(&rest) => {
                Some(format!("unknown radius scale `{rest}` in `{token}`"))
            }
            None => None,
        };
    }

    let size_value = token
        .strip_prefix("w-")
        .or_else(|| token.strip_prefix("h-"))?;
    (!SIZE_VALUES.contains(&size_value))
        .then(|| format!("unknown size value `{size_value}` in `{token}`"))
}

/// Entry point: validate the literal and re-emit it.
pub(crate) fn tw_impl(input: TokenStream) -> Result<TokenStream> {
    let lit: LitStr = syn::parse2(input)?;
    let value = lit.value();

    for token in value.split(' ').filter(|t| !t.is_empty()) {
        if let Some(message) = check_token(token) {
            return Err(Error::new(lit.span(), message));
        }
    }

    Ok(quote! { #lit })
}

// ===========================================================================
// Tests
// ===========================================================================
