//! A module containing [`Array`].
//!
//! Owned iteration uses [`std::vec::IntoIter`], while [`Iter`](std::slice::Iter) and
//! [`IterMut`](std::slice::IterMut) from [`std::slice`] are used for borrowed iteration.
//!
//! [`Array`] is also re-exported under the parent module.

mod array;
mod tests;

pub use array::*;
