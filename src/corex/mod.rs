//! Core containers: [`DynamicString`], a null-terminated byte string with a fixed growth
//! granularity, and [`Array`], a heap array that is always exactly as large as its contents.
//!
//! Both types own a single contiguous buffer and deep copy on [`Clone`]. Fallible operations
//! return the small error types from [`error`], while the indexing operators panic with the same
//! messages.
#![warn(missing_docs)]

pub mod array;
pub mod error;
pub mod string;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use string::DynamicString;
