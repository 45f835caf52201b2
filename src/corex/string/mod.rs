//! A module containing [`DynamicString`] and its conversions.
//!
//! [`DynamicString`] is also re-exported under the parent module.

mod convert;
mod string;
mod tests;

pub use string::*;
