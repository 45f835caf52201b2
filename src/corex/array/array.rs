use std::any::{self, Any};
use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Add, AddAssign, Deref, DerefMut, Index, IndexMut};
use std::slice;
use std::vec;

use crate::corex::error::{
    CopyError, CopyLengthError, DestinationSizeError, IndexOutOfBounds, NotFoundError,
    TypeMismatchError,
};
use crate::util::result::Throw;

/// A heap allocated array whose allocation always holds exactly [`size`](Array::size) elements.
///
/// There is no spare capacity: [`add`](Array::add) reallocates on every call, which keeps the
/// type simple at the cost of `O(n)` insertion. Cloning performs a deep copy.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
/// - `m`: The number of items in the second Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `size` | `O(1)` |
/// | `add` | `O(n)` |
/// | `remove` | `O(n)` |
/// | `append` | `O(n+m)` |
/// | `concat` | `O(n+m)` |
/// | `contains` | `O(n)` |
/// | `count` | `O(n)` |
/// | `reverse` | `O(n)` |
///
/// # Examples
/// ```
/// # use zen::corex::Array;
/// let mut numbers = Array::new();
/// numbers.add(10);
/// numbers.add(20);
/// assert_eq!(numbers[0], 10);
/// assert_eq!(numbers.size(), 2);
/// ```
pub struct Array<T> {
    pub(crate) data: Box<[T]>,
}

impl<T> Array<T> {
    /// Creates a new Array with size 0. Nothing is allocated until an element is added.
    pub fn new() -> Array<T> {
        Array {
            data: Box::default(),
        }
    }

    /// Creates an Array from a fixed-size array of any `'static` item type, checking at runtime
    /// that the item type is `T`.
    ///
    /// # Errors
    /// Returns [`TypeMismatchError`] if `A` and `T` are different types.
    ///
    /// # Examples
    /// ```
    /// # use zen::corex::Array;
    /// let arr = Array::<u32>::try_from_array([1_u32, 2, 3]).unwrap();
    /// assert_eq!(&*arr, &[1, 2, 3]);
    ///
    /// assert!(Array::<u32>::try_from_array([1_u8, 2, 3]).is_err());
    /// ```
    pub fn try_from_array<A: 'static, const N: usize>(
        items: [A; N],
    ) -> Result<Array<T>, TypeMismatchError>
    where
        T: 'static,
    {
        let items: Box<dyn Any> = Box::new(items);

        match items.downcast::<[T; N]>() {
            Ok(items) => Ok(Array { data: items }),
            Err(_) => Err(TypeMismatchError {
                expected: any::type_name::<T>(),
                found: any::type_name::<A>(),
            }),
        }
    }

    /// Returns the number of elements in the Array.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the Array contains no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index` isn't less than [`size`](Array::size).
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&self.data[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index` isn't less than [`size`](Array::size).
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&mut self.data[index])
    }

    /// Adds `item` to the end of the Array, reallocating to fit exactly one more element.
    pub fn add(&mut self, item: T) {
        let mut items = self.take_vec(1);
        items.push(item);
        self.data = items.into_boxed_slice();
    }

    /// Removes all elements, dropping them and releasing the allocation.
    pub fn clear(&mut self) {
        self.data = Box::default();
    }

    /// Reverses the order of the elements in place.
    pub fn reverse(&mut self) {
        self.data.reverse();
    }

    /// Consumes the Array, returning its elements as a [`Vec`] without copying.
    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }

    /// Takes the elements out of self as a Vec with room for exactly `extra` more.
    fn take_vec(&mut self, extra: usize) -> Vec<T> {
        let mut items = mem::take(&mut self.data).into_vec();
        items.reserve_exact(extra);
        items
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.data.len() {
            Err(IndexOutOfBounds {
                index,
                len: self.data.len(),
            })
        } else {
            Ok(())
        }
    }
}

impl<T: PartialEq> Array<T> {
    /// Removes the first element equal to `item`, shifting all following elements left, and
    /// returns it.
    ///
    /// # Errors
    /// Returns [`NotFoundError`] if no element is equal to `item`. The Array is left unchanged.
    ///
    /// # Examples
    /// ```
    /// # use zen::corex::Array;
    /// let mut arr = Array::from(vec![1, 2, 3, 2]);
    /// assert_eq!(arr.remove(&2), Ok(2));
    /// assert_eq!(&*arr, &[1, 3, 2]);
    /// assert!(arr.remove(&5).is_err());
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<T, NotFoundError> {
        let index = self.data
            .iter()
            .position(|value| value == item)
            .ok_or(NotFoundError)?;

        let mut items = self.take_vec(0);
        let removed = items.remove(index);
        self.data = items.into_boxed_slice();

        Ok(removed)
    }

    /// Returns true if any element is equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.data.iter().any(|value| value == item)
    }

    /// Returns the number of elements equal to `item`.
    pub fn count(&self, item: &T) -> usize {
        self.data.iter().filter(|value| *value == item).count()
    }
}

impl<T: Clone> Array<T> {
    /// Creates a new Array containing the elements of self followed by the elements of `other`.
    pub fn concat(&self, other: &Array<T>) -> Array<T> {
        self.data.iter().chain(other.data.iter()).cloned().collect()
    }

    /// Appends clones of all elements in `other` to the end of self.
    pub fn append(&mut self, other: &Array<T>) {
        if other.is_empty() {
            return;
        }

        let mut items = self.take_vec(other.size());
        items.extend_from_slice(&other.data);
        self.data = items.into_boxed_slice();
    }

    /// Clones the first `n` elements into the front of `dest`.
    ///
    /// # Errors
    /// Returns [`CopyError::Length`] if `n` exceeds the size of the Array, or
    /// [`CopyError::Destination`] if `dest` is shorter than `n`.
    pub fn copy_into(&self, dest: &mut [T], n: usize) -> Result<(), CopyError> {
        if n > self.size() {
            Err(CopyLengthError { requested: n, len: self.size() })?
        }
        if n > dest.len() {
            Err(DestinationSizeError { requested: n, available: dest.len() })?
        }

        dest[..n].clone_from_slice(&self.data[..n]);
        Ok(())
    }

    /// Returns a [`Vec`] containing clones of all elements.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.to_vec()
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(value: Vec<T>) -> Self {
        Array {
            data: value.into_boxed_slice(),
        }
    }
}

impl<T: Clone> From<&[T]> for Array<T> {
    fn from(value: &[T]) -> Self {
        Array {
            data: Box::from(value),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    fn from(value: [T; N]) -> Self {
        Array {
            data: Box::new(value),
        }
    }
}

impl<T> From<Array<T>> for Vec<T> {
    fn from(value: Array<T>) -> Self {
        value.into_vec()
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Array<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T> Index<usize> for Array<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).throw()
    }
}

impl<T> IndexMut<usize> for Array<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).throw()
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl<T> AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Array<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Array<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Array<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        Array {
            data: self.data.clone(),
        }
    }
}

impl<T: Clone> Add<&Array<T>> for &Array<T> {
    type Output = Array<T>;

    fn add(self, rhs: &Array<T>) -> Self::Output {
        self.concat(rhs)
    }
}

impl<T: Clone> AddAssign<&Array<T>> for Array<T> {
    fn add_assign(&mut self, rhs: &Array<T>) {
        self.append(rhs);
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.data == *other.data
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: Hash> Hash for Array<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &&*self.data)
            .field("size", &self.size())
            .finish()
    }
}
