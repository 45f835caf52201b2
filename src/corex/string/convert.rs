use std::convert::Infallible;
use std::str::{self, FromStr, Utf8Error};

use super::DynamicString;
use crate::corex::error::ParseError;

macro_rules! impl_parse {
    ($($(#[$meta:meta])* $name:ident => $target:ty),+ $(,)?) => {
        impl DynamicString {
            $(
                $(#[$meta])*
                ///
                /// # Errors
                /// Returns [`ParseError`] unless the entire string is a valid numeral of the target
                /// type. Surrounding whitespace or trailing characters are not accepted.
                pub fn $name(&self) -> Result<$target, ParseError> {
                    str::from_utf8(self.as_bytes())
                        .ok()
                        .and_then(|s| s.parse::<$target>().ok())
                        .ok_or(ParseError { target: stringify!($target) })
                }
            )+
        }
    };
}

impl_parse! {
    /// Parses the string as a base-10 [`i16`].
    to_i16 => i16,
    /// Parses the string as a base-10 [`i32`].
    ///
    /// # Examples
    /// ```
    /// # use zen::corex::DynamicString;
    /// assert_eq!(DynamicString::from("42").to_i32(), Ok(42));
    /// assert!(DynamicString::from("abc").to_i32().is_err());
    /// assert!(DynamicString::from("42abc").to_i32().is_err());
    /// ```
    to_i32 => i32,
    /// Parses the string as a base-10 [`i64`].
    to_i64 => i64,
    /// Parses the string as an [`f32`].
    to_f32 => f32,
    /// Parses the string as an [`f64`].
    to_f64 => f64,
}

impl From<&[u8]> for DynamicString {
    fn from(value: &[u8]) -> Self {
        DynamicString::from_bytes(value)
    }
}

impl From<&str> for DynamicString {
    fn from(value: &str) -> Self {
        DynamicString::from_bytes(value.as_bytes())
    }
}

impl From<&String> for DynamicString {
    fn from(value: &String) -> Self {
        DynamicString::from_bytes(value.as_bytes())
    }
}

impl From<String> for DynamicString {
    fn from(value: String) -> Self {
        DynamicString::from_bytes(value.as_bytes())
    }
}

impl FromStr for DynamicString {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DynamicString::from(s))
    }
}

impl TryFrom<&DynamicString> for String {
    type Error = Utf8Error;

    fn try_from(value: &DynamicString) -> Result<Self, Self::Error> {
        str::from_utf8(value.as_bytes()).map(str::to_owned)
    }
}
