//! # tailwind-style
//!
//! Resolve compact utility-class style strings into typed layout and paint
//! parameters.
//!
//! ```
//! use tailwind_style::style::{tailwind, StyleContext};
//!
//! let ctx = StyleContext::new().with_ambient(300.0, 400.0);
//! let resolved = tailwind("min main-center w-full h-1/2 bg-blue-500 rounded-md", &ctx).unwrap();
//! assert!(resolved.size.width.is_infinite());
//! assert!(resolved.radius.is_uniform());
//! ```
//!
//! ## Core Systems
//!
//! - **[`style`]** — Tokenizer and resolvers for axis, size, color and corner radius
//! - **[`layout`]** — Taffy flex-box styles built from a resolved style
//! - **[`effects`]** — Blur, opacity, fixed size, scroll and frosted-panel descriptors

// Core systems
pub mod style;

// Bridges to the host toolkit
pub mod effects;
pub mod layout;

pub use style::{tailwind, ResolvedStyle, StyleContext, StyleError};

// Proc macros (feature-gated)
#[cfg(feature = "macros")]
pub use tailwind_style_macros::tw;
