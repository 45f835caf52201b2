use std::error::Error;

/// Unwrapping for operations that are infallible by contract, such as indexing with `[]`.
pub(crate) trait Throw<T> {
    /// Returns the contained value. Unlike [`Result::unwrap`], the panic message is just the
    /// error's own [`Display`](std::fmt::Display) output and points at the caller.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    #[track_caller]
    fn throw(self) -> T;
}

impl<T, E: Error> Throw<T> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
