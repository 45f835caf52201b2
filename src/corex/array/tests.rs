#![cfg(test)]

use std::borrow::Borrow;
use std::cell::RefCell;
use std::hash::{BuildHasher, RandomState};
use std::iter;

use super::*;
use crate::corex::error::{CopyError, IndexOutOfBounds, NotFoundError, TypeMismatchError};
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

fn drops(counter: &CountedDrop) -> usize {
    *RefCell::borrow(counter)
}

#[test]
fn test_construction() {
    let empty: Array<u8> = Array::new();
    assert_eq!(empty.size(), 0);
    assert!(empty.is_empty());
    assert_eq!(&*empty, &[] as &[u8]);

    assert_eq!(
        Array::from(vec![1, 2, 3]),
        Array::from([1, 2, 3]),
        "Different construction methods should produce equal results."
    );
    assert_eq!(Array::from([1, 2, 3].as_slice()), (1..=3).collect::<Array<_>>());

    assert_eq!(
        Array::<u32>::try_from_array([4_u32, 5]).map(|arr| arr.to_vec()),
        Ok(vec![4, 5])
    );
    assert_eq!(
        Array::<u32>::try_from_array([4_i64, 5]),
        Err(TypeMismatchError { expected: "u32", found: "i64" }),
        "Mismatched item types should be rejected."
    );
}

#[test]
fn test_indexing() {
    let mut arr = Array::from([10, 20, 30]);
    assert_eq!(arr.get(2), Ok(&30));
    assert_eq!(arr.get(3), Err(IndexOutOfBounds { index: 3, len: 3 }));

    *arr.get_mut(0).unwrap() += 1;
    arr[1] += 2;
    assert_eq!(&*arr, &[11, 22, 30]);

    assert_panics!({
        let arr = Array::from([1, 2, 3]);
        arr[3]
    }, "Index 3 out of bounds");
    assert_panics!({
        let mut arr = Array::<u8>::new();
        arr[0] = 1;
    }, "Index 0 out of bounds");
}

#[test]
fn test_add_and_remove() {
    let mut arr = Array::new();
    for i in 0..5 {
        arr.add(i);
        assert_eq!(arr.size(), i + 1);
    }
    assert_eq!(&*arr, &[0, 1, 2, 3, 4]);

    arr.add(2);
    assert_eq!(arr.remove(&2), Ok(2));
    assert_eq!(&*arr, &[0, 1, 3, 4, 2], "Only the first equal element should be removed.");

    assert_eq!(arr.remove(&7), Err(NotFoundError));
    assert_eq!(&*arr, &[0, 1, 3, 4, 2], "A failed removal shouldn't change the Array.");

    assert_eq!(arr.remove(&2), Ok(2));
    assert_eq!(arr.remove(&0), Ok(0));
    assert_eq!(&*arr, &[1, 3, 4]);
}

#[test]
fn test_concat_and_append() {
    let left = Array::from(["a", "b"]);
    let right = Array::from(["c"]);

    assert_eq!(&*(&left + &right), &["a", "b", "c"]);
    assert_eq!(left.size(), 2, "Concatenation shouldn't modify its operands.");

    let mut arr = Array::new();
    arr += &left;
    assert_eq!(arr, left, "Appending to an empty Array should copy the other.");
    arr += &Array::new();
    arr.append(&right);
    assert_eq!(&*arr, &["a", "b", "c"]);
}

#[test]
fn test_queries() {
    let mut arr = Array::from([3, 1, 3, 2, 3]);
    assert!(arr.contains(&2));
    assert!(!arr.contains(&4));
    assert_eq!(arr.count(&3), 3);
    assert_eq!(arr.count(&4), 0);

    arr.reverse();
    assert_eq!(&*arr, &[3, 2, 3, 1, 3]);
    assert_eq!(arr.to_vec(), vec![3, 2, 3, 1, 3]);

    arr.clear();
    assert!(arr.is_empty());
    arr.clear();
    assert!(arr.is_empty());
}

#[test]
fn test_copy_into() {
    let arr = Array::from([1, 2, 3]);
    let mut dest = [0; 3];

    assert_eq!(arr.copy_into(&mut dest, 2), Ok(()));
    assert_eq!(dest, [1, 2, 0]);
    assert!(matches!(arr.copy_into(&mut dest, 4), Err(CopyError::Length(_))));
    assert!(matches!(arr.copy_into(&mut [0; 1], 2), Err(CopyError::Destination(_))));
}

#[test]
fn test_zst_support() {
    let mut arr = Array::from([ZeroSizedType; 5]);
    assert_eq!(arr[4], ZeroSizedType);

    arr.add(ZeroSizedType);
    assert_eq!(arr.size(), 6);
    assert_eq!(arr.remove(&ZeroSizedType), Ok(ZeroSizedType));
    assert_eq!(arr.iter().count(), 5, "Should iterate over the right number of ZST instances.");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut arr: Array<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    arr.add(counter.clone());
    assert_eq!(drops(&counter), 0, "Reallocating shouldn't drop any elements.");

    let other = arr.clone();
    assert!(arr.remove(&counter).is_ok());
    assert_eq!(drops(&counter), 1, "The removed element should be dropped once.");

    drop(arr);
    assert_eq!(drops(&counter), 11, "All remaining elements should have been dropped.");

    drop(other.into_iter());
    assert_eq!(counter.take(), 22, "Dropping an owned iterator should drop all elements.");
}

#[test]
fn test_equality_and_hash() {
    let arr = Array::from(vec![0_usize, 1, 2, 3, 4]);

    assert_eq!(arr, (0..5).collect::<Array<_>>());
    assert_ne!(arr, Array::from([0, 1, 2, 5, 4]));
    let borrowed: &[usize] = arr.borrow();
    assert_eq!(borrowed, &[0, 1, 2, 3, 4], "Borrow equality should be upheld.");

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one(arr.clone()),
        "Equal arrays should produce the same hash."
    );
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one([0_usize, 1, 2, 3, 4]),
        "Borrow hash equality should be upheld."
    );
}

#[test]
fn test_iterators() {
    let mut arr = Array::from([0_usize, 1, 2, 3, 4]);
    for i in &mut arr {
        *i *= 2;
    }
    assert_eq!(*arr, [0, 2, 4, 6, 8]);
    assert_eq!((&arr).into_iter().sum::<usize>(), 20);

    let mut iter = arr.into_iter();
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next(), Some(2));

    assert_eq!(
        format!("{:?}", Array::from([1, 2])),
        "Array { contents: [1, 2], size: 2 }"
    );
}
