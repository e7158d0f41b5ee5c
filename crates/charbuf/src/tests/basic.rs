use alloc::string::{String, ToString};
use core::str::FromStr;

use rstest::rstest;

use crate::{CharBuf, concat, with_prefix, with_suffix};

#[test]
fn new_is_empty_without_allocation() {
    let buf = CharBuf::new();
    assert_eq!(buf.len(), 0);
    assert_eq!(buf.capacity(), 0);
    assert!(buf.is_empty());
}

#[test]
fn from_str_sizes_storage_exactly() {
    let buf = CharBuf::from_str("hi").unwrap();
    assert_eq!(buf.len(), 2);
    assert_eq!(buf.capacity(), 2);
    assert_eq!(buf.at(0), 'h');
    assert_eq!(buf.at(1), 'i');
}

/// The full lifecycle in one sitting: construction, copy, assignment,
/// append, inequality.
#[test]
fn string_lifecycle_scenario() {
    let mut s1 = CharBuf::new();
    assert_eq!(s1.len(), 0);

    let s2 = CharBuf::from_str("hi").unwrap();
    assert_eq!(s2.len(), 2);
    assert_eq!(s2.at(0), 'h');
    assert_eq!(s2.at(1), 'i');

    let mut s3 = s2.clone();
    assert_eq!(s3, s2);

    s1.clone_from(&s2);
    assert_eq!(s1, s2);

    s3.clone_from(&CharBuf::from_str("bye").unwrap());
    assert_eq!(s3.len(), 3);
    assert_eq!(s3, "bye");

    s1.append(&CharBuf::from_str("re").unwrap()).unwrap();
    assert_eq!(s1, "hire");

    s1.append(&CharBuf::from_str("d").unwrap()).unwrap();
    assert_eq!(s1, "hired");
    assert!(s1 != "hire");
}

#[test]
fn clone_is_a_deep_copy() {
    let mut original = CharBuf::from_str("hi").unwrap();
    let copy = original.clone();
    original.push('!').unwrap();
    assert_eq!(copy, "hi");
    assert_eq!(original, "hi!");
}

#[test]
fn take_moves_content_and_empties_source() {
    let mut src = CharBuf::from_str("hi").unwrap();
    let dst = src.take();
    assert_eq!(dst, "hi");
    assert_eq!(src.len(), 0);
    assert_eq!(src.capacity(), 0);
    assert!(src.is_empty());
}

#[test]
fn at_mut_rewrites_in_place() {
    let mut buf = CharBuf::from_str("cat").unwrap();
    *buf.at_mut(0) = 'b';
    assert_eq!(buf, "bat");
    buf[2] = 'd';
    assert_eq!(buf, "bad");
    assert_eq!(buf[0], 'b');
}

#[test]
fn get_is_checked() {
    let buf = CharBuf::from_str("bye").unwrap();
    assert_eq!(buf.get(2), Some('e'));
    assert_eq!(buf.get(3), None);
}

#[test]
#[should_panic(expected = "index 3 out of bounds for buffer of length 3")]
fn indexing_past_length_is_fatal() {
    let buf = CharBuf::from_str("bye").unwrap();
    let _ = buf.at(3);
}

#[test]
#[should_panic(expected = "index 5 out of bounds for buffer of length 3")]
fn index_sugar_past_length_is_fatal() {
    let buf = CharBuf::from_str("bye").unwrap();
    let _ = buf[5];
}

#[test]
#[should_panic(expected = "out of bounds")]
fn mutable_indexing_past_length_is_fatal() {
    let mut buf = CharBuf::from_str("bye").unwrap();
    *buf.at_mut(3) = 'x';
}

#[rstest]
#[case("", "", "")]
#[case("hi", "", "hi")]
#[case("", "re", "re")]
#[case("hi", "re", "hire")]
fn concat_joins_in_order(#[case] lhs: &str, #[case] rhs: &str, #[case] expected: &str) {
    let a = CharBuf::from_str(lhs).unwrap();
    let b = CharBuf::from_str(rhs).unwrap();
    let joined = concat(&a, &b).unwrap();
    assert_eq!(joined, expected);
    assert_eq!(joined.len(), a.len() + b.len());
    assert_eq!(joined.capacity(), joined.len());
    // Inputs are borrowed read-only.
    assert_eq!(a, lhs);
    assert_eq!(b, rhs);
}

#[test]
fn with_suffix_appends_to_a_copy() {
    let base = CharBuf::from_str("hire").unwrap();
    let out = with_suffix(&base, 'd').unwrap();
    assert_eq!(out, "hired");
    assert_eq!(base, "hire");
}

#[test]
fn with_prefix_places_character_first() {
    let tail = CharBuf::from_str("bc").unwrap();
    let out = with_prefix('a', &tail).unwrap();
    assert_eq!(out.at(0), 'a');
    assert_eq!(out, "abc");
    assert_eq!(tail, "bc");
}

#[test]
fn display_emits_live_range_only() {
    let mut buf = CharBuf::with_capacity(8).unwrap();
    buf.push('o').unwrap();
    buf.push('k').unwrap();
    assert_eq!(buf.to_string(), "ok");
}

#[test]
fn write_to_streams_each_character() {
    let buf = CharBuf::from_str("abc").unwrap();
    let mut sink = String::new();
    buf.write_to(&mut sink).unwrap();
    assert_eq!(sink, "abc");
}

#[test]
fn fill_from_discards_prior_content() {
    let mut buf = CharBuf::from_str("something long").unwrap();
    buf.fill_from("new".chars()).unwrap();
    assert_eq!(buf, "new");
}

#[test]
fn from_chars_matches_the_source_sequence() {
    let buf = CharBuf::from_chars(['a', 'b', 'c']).unwrap();
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.capacity(), 3);
    assert_eq!(buf, "abc");
    assert_eq!(buf.as_slice(), &['a', 'b', 'c'][..]);
}

#[test]
fn try_clone_matches_clone() {
    let buf = CharBuf::from_str("hi").unwrap();
    let copy = buf.try_clone().unwrap();
    assert_eq!(copy, buf);
    assert_eq!(copy.capacity(), copy.len());
}

#[test]
fn equality_ignores_capacity() {
    let mut roomy = CharBuf::with_capacity(64).unwrap();
    roomy.push('x').unwrap();
    let tight = CharBuf::from_str("x").unwrap();
    assert_eq!(roomy, tight);
    assert_ne!(roomy.capacity(), tight.capacity());
}
