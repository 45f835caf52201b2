#![cfg(test)]

use std::borrow::Cow;
use std::collections::hash_map::RandomState;
use std::hash::BuildHasher;

use proptest::prelude::*;

use super::*;
use crate::corex::error::{CopyError, IndexOutOfBounds, ParseError};
use crate::util::panic::assert_panics;

fn assert_invariants(string: &DynamicString) {
    assert_eq!(
        string.as_bytes_with_nul()[string.len()],
        0,
        "The byte after the contents should be the terminator."
    );
    assert!(
        string.capacity() > string.len(),
        "Capacity should leave room for the terminator."
    );
    assert_eq!(
        string.capacity() % CAP_GRANULARITY,
        0,
        "Capacity should be a multiple of the granularity."
    );
}

#[test]
fn test_construction() {
    let empty = DynamicString::new();
    assert_eq!(empty.len(), 0);
    assert_eq!(empty.capacity(), DEFAULT_CAP);
    assert_eq!(empty.as_bytes_with_nul(), &[0]);

    assert_eq!(
        DynamicString::from(""),
        empty,
        "An empty sequence should produce the default string."
    );
    assert_eq!(DynamicString::from("").capacity(), DEFAULT_CAP);

    let cases = [(1, 32), (30, 32), (31, 32), (32, 64), (63, 64), (64, 96)];
    for (len, cap) in cases {
        let string = DynamicString::from_bytes(&vec![b'x'; len]);
        assert_eq!(string.len(), len);
        assert_eq!(
            string.capacity(),
            cap,
            "A string of {len} bytes should have a capacity of {cap}."
        );
        assert_invariants(&string);
    }
}

#[test]
fn test_scenarios() {
    let mut string = DynamicString::from("Hello");
    string.append(&DynamicString::from(" World"));
    assert_eq!(string, "Hello World");
    assert_eq!(string.len(), 11);

    let mut string = DynamicString::from("HELLO world");
    string.to_lowercase_in_place();
    assert_eq!(string, "hello world");

    let mut string = DynamicString::from("aXbXc");
    let needle = DynamicString::from("X");
    string.remove_first(&needle);
    assert_eq!(string, "abXc", "Only the first occurrence should be removed.");
    string.remove_first(&needle);
    assert_eq!(string, "abc");

    assert_eq!(DynamicString::from("42").to_i32(), Ok(42));
    assert_eq!(
        DynamicString::from("abc").to_i32(),
        Err(ParseError { target: "i32" })
    );

    assert_eq!(
        DynamicString::from("Hello").at(5),
        Err(IndexOutOfBounds { index: 5, len: 5 })
    );
}

#[test]
fn test_indexing() {
    let mut string = DynamicString::from("abc");
    assert_eq!(string.at(0), Ok(b'a'));
    assert_eq!(string.at(2), Ok(b'c'));
    assert!(string.at(3).is_err(), "The terminator shouldn't be accessible.");

    *string.at_mut(1).unwrap() = b'X';
    string[2] = b'Y';
    assert_eq!(string, "aXY");
    assert_eq!(string[0], b'a');

    assert_panics!({
        let string = DynamicString::from("abc");
        string[3]
    }, "Index 3 out of bounds");
    assert_panics!({
        let string = DynamicString::new();
        string[0]
    }, "Index 0 out of bounds");
}

#[test]
fn test_equality_and_hash() {
    let a = DynamicString::from("same");
    let b = DynamicString::from_bytes(b"same");

    assert_eq!(a, b);
    assert_ne!(a, DynamicString::from("same "), "Different lengths should be unequal.");
    assert_ne!(a, DynamicString::from("sane"));
    assert_eq!(a, *"same");
    assert_eq!(a, String::from("same"));
    assert_eq!("same", a);
    assert_eq!(a, *b"same".as_slice());

    let none: Option<&DynamicString> = None;
    assert_eq!(none, None, "Two absent strings should compare equal.");
    assert_ne!(Some(&a), none);

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&a),
        state.hash_one(&b),
        "Equal strings should produce the same hash."
    );
}

#[test]
fn test_clone_and_assign() {
    let original = DynamicString::from("original");
    let mut copy = original.clone();
    copy.push(b'!');

    assert_eq!(original, "original", "Clones shouldn't share a buffer.");
    assert_eq!(copy, "original!");
    assert_ne!(
        original.as_bytes().as_ptr(),
        copy.as_bytes().as_ptr(),
        "Clones should own separate allocations."
    );

    let mut target = DynamicString::from("something long enough to need a second block");
    target.assign(&original);
    assert_eq!(target, "original");
    assert_eq!(target.capacity(), 32, "Assignment should apply the sizing rule.");

    target.clone_from(&DynamicString::new());
    assert!(target.is_empty(), "Assigning an empty string should clear the target.");
    assert_invariants(&target);

    let mut moved_from = DynamicString::from("moved");
    let moved = std::mem::take(&mut moved_from);
    assert_eq!(moved, "moved");
    assert!(moved_from.is_empty(), "Taking a string should leave the empty state behind.");
    assert_eq!(moved_from.capacity(), DEFAULT_CAP);
}

#[test]
fn test_concat_and_append() {
    let left = DynamicString::from("left");
    let right = DynamicString::from("right");

    let joined = &left + &right;
    assert_eq!(joined, "leftright");
    assert_eq!(left, "left", "Concatenation shouldn't modify its operands.");
    assert_eq!(right, "right", "Concatenation shouldn't modify its operands.");
    assert_eq!(left.concat(&DynamicString::new()), left);

    let mut string = DynamicString::new();
    string += &DynamicString::new();
    assert_eq!(string.capacity(), DEFAULT_CAP, "Appending nothing should be a no-op.");

    for _ in 0..10 {
        string += "0123456789";
        assert_invariants(&string);
    }
    assert_eq!(string.len(), 100);
    assert_eq!(string.capacity(), 128);
    assert_eq!(&string.as_bytes()[90..], b"0123456789".as_slice());
}

#[test]
fn test_push_and_pop() {
    let mut string = DynamicString::new();
    for byte in 0..31 {
        string.push(b'a' + byte % 26);
    }
    assert_eq!(string.capacity(), 32);

    string.push(b'z');
    assert_eq!(string.len(), 32);
    assert_eq!(string.capacity(), 64, "Crossing a block boundary should grow the buffer.");

    assert_eq!(string.pop(), Some(b'z'));
    assert_eq!(string.capacity(), 32, "Shrinking below a block boundary should shrink.");
    assert_invariants(&string);

    while string.pop().is_some() {}
    assert_eq!(string, DynamicString::new());
}

#[test]
fn test_remove() {
    let mut string = DynamicString::from("abc");
    assert!(!string.remove_first(&DynamicString::new()), "Empty needles should be ignored.");
    assert!(!string.remove_first(&DynamicString::from("abcd")));
    assert!(!string.remove_first(&DynamicString::from("x")));
    assert_eq!(string, "abc");

    let mut string = DynamicString::from("a--b--c--");
    string -= "--";
    assert_eq!(string, "ab--c--");
    assert_eq!(string.remove_all(&DynamicString::from("--")), 2);
    assert_eq!(string, "abc");

    let mut string = DynamicString::from("aabb");
    assert_eq!(
        string.remove_all(&DynamicString::from("ab")),
        2,
        "Occurrences formed by a removal should also be removed."
    );
    assert!(string.is_empty());

    let mut string = DynamicString::from_bytes(&[b'y'; 40]);
    string -= &DynamicString::from_bytes(&[b'y'; 10]);
    assert_eq!(string.len(), 30);
    assert_eq!(string.capacity(), 32);
    assert_invariants(&string);
}

#[test]
fn test_replace() {
    let mut string = DynamicString::from("the cat sat on the mat");
    let the = DynamicString::from("the");

    assert!(string.replace_first(&the, &DynamicString::from("a")));
    assert_eq!(string, "a cat sat on the mat");

    assert!(string.replace_first(&the, &DynamicString::from("every single")));
    assert_eq!(string, "a cat sat on every single mat");
    assert_eq!(string.capacity(), 32);

    assert!(string.replace_first(
        &DynamicString::from("mat"),
        &DynamicString::from("mat in the house"),
    ));
    assert_eq!(string, "a cat sat on every single mat in the house");
    assert_eq!(string.capacity(), 64);
    assert_invariants(&string);

    assert!(!string.replace_first(&DynamicString::from("dog"), &the));
    assert!(!string.replace_first(&DynamicString::new(), &the));
    assert!(string.replace_first(&DynamicString::from(" in the house"), &DynamicString::new()));
    assert_eq!(string, "a cat sat on every single mat");
    assert_eq!(string.capacity(), 32);
}

#[test]
fn test_case_and_reverse() {
    let mut string = DynamicString::from("MiXeD 123 !?");
    string.to_uppercase_in_place();
    assert_eq!(string, "MIXED 123 !?");
    string.to_lowercase_in_place();
    assert_eq!(string, "mixed 123 !?");

    string.reverse();
    assert_eq!(string, "?! 321 dexim", "The terminator shouldn't be part of the reversal.");
    assert_invariants(&string);

    let mut empty = DynamicString::new();
    empty.reverse();
    assert!(empty.is_empty());
}

#[test]
fn test_find() {
    let string = DynamicString::from("abracadabra");
    assert_eq!(string.find(&DynamicString::from("abra")), Some(0));
    assert_eq!(string.find(&DynamicString::from("cad")), Some(4));
    assert_eq!(string.find(&DynamicString::from("bra")), Some(1));
    assert_eq!(string.find(&DynamicString::from("abracadabra")), Some(0));
    assert_eq!(string.find(&DynamicString::from("abracadabras")), None);
    assert_eq!(string.find(&DynamicString::from("zzz")), None);
    assert_eq!(string.find(&DynamicString::new()), None);
}

#[test]
fn test_predicates() {
    assert!(DynamicString::new().is_empty());
    assert!(DynamicString::new().is_blank());
    assert!(DynamicString::from(" \t\n").is_blank());
    assert!(!DynamicString::from(" a ").is_blank());

    assert!(DynamicString::new().is_all_digits());
    assert!(DynamicString::from("0123").is_all_digits());
    assert!(!DynamicString::from("-1").is_all_digits());

    assert!(DynamicString::from("text only").is_all_non_digits());
    assert!(!DynamicString::from("r2d2").is_all_non_digits());
}

#[test]
fn test_numeric_parsing() {
    assert_eq!(DynamicString::from("-32768").to_i16(), Ok(i16::MIN));
    assert!(DynamicString::from("32768").to_i16().is_err(), "Overflow should fail.");
    assert_eq!(DynamicString::from("-7").to_i32(), Ok(-7));
    assert_eq!(DynamicString::from("9000000000").to_i64(), Ok(9_000_000_000));
    assert_eq!(DynamicString::from("2.5").to_f32(), Ok(2.5));
    assert_eq!(DynamicString::from("-0.125").to_f64(), Ok(-0.125));

    for bad in ["", " 1", "1 ", "12abc", "1.5", "0x10"] {
        assert_eq!(
            DynamicString::from(bad).to_i64(),
            Err(ParseError { target: "i64" }),
            "{bad:?} shouldn't parse as an integer."
        );
    }
    assert!(DynamicString::from("1.5.2").to_f64().is_err());
}

#[test]
fn test_conversions() {
    let string = DynamicString::from("bytes");
    assert_eq!(&*string.to_owned_bytes(), b"bytes");
    assert_eq!(&*string.to_raw_copy(), b"bytes\0");
    let (first, second) = (string.to_raw_copy(), string.to_raw_copy());
    assert_ne!(first.as_ptr(), second.as_ptr(), "Every raw copy should be a new allocation.");
    assert_eq!(String::try_from(&string).as_deref(), Ok("bytes"));
    assert!(String::try_from(&DynamicString::from_bytes(&[0xff])).is_err());

    assert_eq!(string.to_string(), "bytes");
    assert!(matches!(string.to_string_lossy(), Cow::Borrowed("bytes")));
    let invalid = DynamicString::from_bytes(&[b'a', 0xff]);
    assert_eq!(invalid.to_string_lossy().into_owned(), "a\u{fffd}");
    assert_eq!(
        format!("{string:?}"),
        "DynamicString { contents: \"bytes\", len: 5, cap: 32 }"
    );

    let collected: DynamicString = b"abc".iter().copied().collect();
    assert_eq!(collected, "abc");
    assert_eq!("parsed".parse::<DynamicString>(), Ok(DynamicString::from("parsed")));

    let mut written = DynamicString::new();
    std::fmt::Write::write_fmt(&mut written, format_args!("{}-{}", 1, 2)).unwrap();
    assert_eq!(written, "1-2");
}

#[test]
fn test_copy_into() {
    let string = DynamicString::from("abcdef");
    let mut dest = [0_u8; 4];

    assert_eq!(string.copy_into(&mut dest, 3), Ok(()));
    assert_eq!(&dest, b"abc\0");

    assert!(
        string.copy_into(&mut [0; 10], 7).is_err_and(|e| e.is_length()),
        "Copying more than the length should fail."
    );
    assert!(matches!(
        string.copy_into(&mut dest, 5),
        Err(CopyError::Destination(_))
    ));
    assert_eq!(&dest, b"abc\0", "A failed copy shouldn't touch the destination.");
}

#[test]
fn test_clear() {
    let mut string = DynamicString::from_bytes(&[b'c'; 100]);
    string.clear();
    assert_eq!(string, DynamicString::new());
    assert_eq!(string.capacity(), DEFAULT_CAP);

    string.clear();
    assert_eq!(string, DynamicString::new(), "Clearing twice should equal clearing once.");
    assert_invariants(&string);
}

fn no_nul_bytes() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(1_u8..=255, 0..200)
}

proptest! {
    #[test]
    fn prop_round_trip(bytes in no_nul_bytes()) {
        let string = DynamicString::from_bytes(&bytes);
        prop_assert_eq!(&*string.to_owned_bytes(), bytes.as_slice());
        prop_assert_eq!(string.capacity(), 32 * (bytes.len() + 1).div_ceil(32));
    }

    #[test]
    fn prop_reverse_involution(bytes in no_nul_bytes()) {
        let mut string = DynamicString::from_bytes(&bytes);
        string.reverse();
        string.reverse();
        prop_assert_eq!(string.as_bytes(), bytes.as_slice());
    }

    #[test]
    fn prop_find_is_smallest_match(
        haystack in proptest::collection::vec(b'a'..=b'c', 0..40),
        needle in proptest::collection::vec(b'a'..=b'c', 0..4),
    ) {
        let expected = if needle.is_empty() || needle.len() > haystack.len() {
            None
        } else {
            (0..=haystack.len() - needle.len())
                .find(|&i| haystack[i..i + needle.len()] == needle[..])
        };
        let found = DynamicString::from_bytes(&haystack).find(&DynamicString::from_bytes(&needle));
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn prop_mutations_keep_invariants(
        start in no_nul_bytes(),
        ops in proptest::collection::vec((0_u8..6, no_nul_bytes()), 0..20),
    ) {
        let mut string = DynamicString::from_bytes(&start);
        for (op, bytes) in ops {
            let operand = DynamicString::from_bytes(&bytes);
            match op {
                0 => string.append(&operand),
                1 => { string.remove_first(&operand); },
                2 => { string.replace_first(&operand, &DynamicString::from_bytes(&start)); },
                3 => string.reverse(),
                4 => { string.pop(); },
                _ => string = string.concat(&operand),
            }
            assert_invariants(&string);
            prop_assert_eq!(string.capacity(), DynamicString::cap_for(string.len()));
        }
    }
}
