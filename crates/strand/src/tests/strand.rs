use alloc::format;
use core::cmp::Ordering;

use super::s;
use crate::{Error, Strand};

#[test]
fn new_copies_the_input() {
    let strand = s(b"Hello");
    assert_eq!(strand.len(), 5);
    assert_eq!(strand.as_bytes(), b"Hello");
}

#[test]
fn embedded_nul_is_ordinary_payload() {
    let strand = s(b"a\0b");
    assert_eq!(strand.len(), 3);
    assert_eq!(strand.byte(1), Some(0));
}

#[test]
fn empty_has_no_bytes() {
    let strand = Strand::empty();
    assert!(strand.is_empty());
    assert_eq!(strand.len(), 0);
    assert_eq!(strand, Strand::default());
}

#[test]
fn from_nul_terminated_stops_at_the_terminator() {
    let strand = Strand::from_nul_terminated(b"Hello\0World").unwrap();
    assert_eq!(strand.as_bytes(), b"Hello");
}

#[test]
fn from_nul_terminated_takes_everything_without_one() {
    let strand = Strand::from_nul_terminated(b"Hello").unwrap();
    assert_eq!(strand.as_bytes(), b"Hello");
}

#[test]
fn to_nul_terminated_appends_one_byte() {
    let strand = s(b"abc");
    assert_eq!(strand.to_nul_terminated().unwrap(), b"abc\0");
}

#[test]
fn try_clone_is_equal_and_independent() {
    let strand = s(b"Hello World!");
    let copy = strand.try_clone().unwrap();
    assert_eq!(strand, copy);
    drop(strand);
    assert_eq!(copy.as_bytes(), b"Hello World!");
}

#[test]
fn concat_joins_bytes_in_order() {
    let joined = s(b"Hello ").concat(&s(b"World")).unwrap();
    assert_eq!(joined, s(b"Hello World"));
}

#[test]
fn concat_treats_multibyte_characters_as_byte_runs() {
    let joined = s("🤔🙏".as_bytes()).concat(&s("👍".as_bytes())).unwrap();
    assert_eq!(joined, s("🤔🙏👍".as_bytes()));
}

#[test]
fn byte_is_none_past_the_end() {
    let strand = s(b"ab");
    assert_eq!(strand.byte(0), Some(b'a'));
    assert_eq!(strand.byte(2), None);
}

#[test]
fn equality_requires_length_and_bytes() {
    assert_eq!(s(b"Hello World!"), s(b"Hello World!"));
    assert_ne!(s(b"Hello World!"), s(b"Hallo Welt!"));
    assert_ne!(s(b"Hello World! "), s(b"Hello World!"));
    assert_eq!(s(b""), s(b""));
}

#[test]
fn ordering_is_lexicographic_then_by_length() {
    assert_eq!(s(b"ABC").cmp(&s(b"ABC")), Ordering::Equal);
    assert_eq!(s(b"Hello").cmp(&s(b"Hallo")), Ordering::Greater);
    assert_eq!(s(b"ABCD").cmp(&s(b"ABCDE")), Ordering::Less);
    assert_eq!(s(b"").cmp(&s(b"")), Ordering::Equal);
    assert_eq!(s(b"a\0").cmp(&s(b"ab")), Ordering::Less);
}

#[test]
fn substring_out_of_range_is_reported() {
    let strand = s(b"Hello World!");
    assert_eq!(
        strand.substring(5, 2).unwrap_err(),
        Error::Range {
            start: 5,
            end: 2,
            len: 12
        }
    );
    assert_eq!(
        strand.substring(0, 13).unwrap_err(),
        Error::Range {
            start: 0,
            end: 13,
            len: 12
        }
    );
}

#[test]
fn display_renders_utf8_as_is() {
    assert_eq!(format!("{}", s(b"Hello")), "Hello");
}

#[test]
fn display_is_lossy_for_invalid_utf8() {
    let rendered = format!("{}", s(b"a\xffb"));
    assert!(rendered.starts_with('a') && rendered.ends_with('b'));
}

#[test]
fn version_matches_the_manifest() {
    assert_eq!(crate::version(), env!("CARGO_PKG_VERSION"));
}
