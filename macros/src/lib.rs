//! Proc macros for tailwind-style: `tw!` compile-time style string validation.
//!
//! This crate is not meant to be used directly — enable the `macros` feature on `tailwind-style`.

use proc_macro::TokenStream;

mod tw_macro;

/// Compile-time style string validation.
///
/// Checks a string literal against the utility-class grammar and expands to
/// the same literal, so it can be passed anywhere a `&'static str` style is
/// expected.
///
/// Rejected at compile time:
///
/// - `bg-<family>-<shade>` with an unknown family
/// - `rounded-<corner>-<scale>` with an unknown corner or scale
/// - `rounded-<scale>` with an unknown scale
/// - `w-<value>` / `h-<value>` with an unknown value
///
/// Other unknown tokens are accepted, matching the runtime resolver which
/// ignores them.
///
/// # Example
///
/// ```ignore
/// let style: &'static str = tw!("min main-center bg-blue-500 rounded-tl-lg");
/// let resolved = tailwind(style, &StyleContext::new())?;
/// ```
#[proc_macro]
pub fn tw(input: TokenStream) -> TokenStream {
    tw_macro::tw_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
