//! Error types shared by the [`corex`](super) containers.

use derive_more::{Display, Error, From, IsVariant};

/// An index was not less than the length of the collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The length of the collection at the time of the request.
    pub len: usize,
}

/// More items were requested from a collection than it holds.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("cannot copy {requested} items from a collection with {len} items")]
pub struct CopyLengthError {
    /// The number of items requested.
    pub requested: usize,
    /// The number of items available.
    pub len: usize,
}

/// The destination buffer can't hold the requested number of items.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("destination holds {available} items but {requested} were requested")]
pub struct DestinationSizeError {
    /// The number of items requested.
    pub requested: usize,
    /// The size of the destination.
    pub available: usize,
}

/// Errors from copying the front of a collection into a caller-provided buffer.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, IsVariant)]
pub enum CopyError {
    /// See [`CopyLengthError`].
    Length(CopyLengthError),
    /// See [`DestinationSizeError`].
    Destination(DestinationSizeError),
}

/// The contents of a string are not a complete numeral of the target type.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("number conversion to {target} failed")]
pub struct ParseError {
    /// The name of the numeric type that was requested.
    pub target: &'static str,
}

/// A collection was constructed from items of a different type than it stores.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("expected items of type {expected} but found {found}")]
pub struct TypeMismatchError {
    /// The item type of the collection.
    pub expected: &'static str,
    /// The item type that was provided.
    pub found: &'static str,
}

/// The requested item isn't in the collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("the key is not in the array")]
pub struct NotFoundError;
