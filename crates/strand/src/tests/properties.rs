use alloc::vec::Vec;
use core::cmp::Ordering;

use quickcheck::{QuickCheck, TestResult};
use quickcheck_macros::quickcheck;

use crate::Strand;

#[quickcheck]
fn substring_of_the_full_range_is_identity(data: Vec<u8>) -> bool {
    let v = Strand::new(&data).unwrap();
    v.substring(0, v.len()).unwrap() == v
}

#[quickcheck]
fn concat_length_and_prefix_laws(a: Vec<u8>, b: Vec<u8>) -> bool {
    let (sa, sb) = (Strand::new(&a).unwrap(), Strand::new(&b).unwrap());
    let joined = sa.concat(&sb).unwrap();
    joined.len() == sa.len() + sb.len()
        && joined.substring(0, sa.len()).unwrap() == sa
        && joined.substring(sa.len(), joined.len()).unwrap() == sb
}

#[quickcheck]
fn trim_is_idempotent(data: Vec<u8>) -> bool {
    let once = Strand::new(&data).unwrap().trim().unwrap();
    once.trim().unwrap() == once
}

#[quickcheck]
fn ordering_is_equal_iff_bytes_are_equal(a: Vec<u8>, b: Vec<u8>) -> bool {
    let (sa, sb) = (Strand::new(&a).unwrap(), Strand::new(&b).unwrap());
    (sa == sb) == (sa.cmp(&sb) == Ordering::Equal)
}

#[quickcheck]
fn replace_length_follows_the_occurrence_count(
    data: Vec<u8>,
    old: Vec<u8>,
    new: Vec<u8>,
) -> TestResult {
    if old.is_empty() {
        return TestResult::discard();
    }
    let v = Strand::new(&data).unwrap();
    let mut count = 0usize;
    let mut offset = 0usize;
    while let Some(at) = v.find_at(&old, offset) {
        count += 1;
        offset = at + old.len();
    }
    let replaced = v.replace(&old, &new).unwrap();
    TestResult::from_bool(replaced.len() == data.len() - count * old.len() + count * new.len())
}

#[quickcheck]
fn found_offsets_match_in_place(data: Vec<u8>, needle: Vec<u8>) -> bool {
    let v = Strand::new(&data).unwrap();
    match v.find(&needle) {
        // The reported index matches in place and nothing earlier does.
        Some(at) => v.matches_at(&needle, at) && (0..at).all(|i| !v.matches_at(&needle, i)),
        None => (0..=data.len()).all(|i| !v.matches_at(&needle, i)),
    }
}

#[quickcheck]
fn split_str_rejoins_to_the_input(data: Vec<u8>, delimiter: Vec<u8>) -> TestResult {
    if delimiter.is_empty() {
        return TestResult::discard();
    }
    let v = Strand::new(&data).unwrap();
    let fields = v.split_str(&delimiter).unwrap();
    let mut rebuilt = Vec::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            rebuilt.extend_from_slice(&delimiter);
        }
        rebuilt.extend_from_slice(field.as_bytes());
    }
    TestResult::from_bool(rebuilt == data)
}

/// Splitting on a delimiter byte and rejoining with that byte must
/// reconstruct the input exactly, with one field more than there are
/// delimiter occurrences.
#[test]
fn split_byte_roundtrip_quickcheck() {
    fn prop(data: Vec<u8>, delimiter: u8) -> bool {
        let v = Strand::new(&data).unwrap();
        let fields = v.split_byte(delimiter).unwrap();
        let mut rebuilt = Vec::new();
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                rebuilt.push(delimiter);
            }
            rebuilt.extend_from_slice(field.as_bytes());
        }
        let delimiters = data.iter().filter(|&&b| b == delimiter).count();
        rebuilt == data && fields.len() == delimiters + 1
    }

    let tests = if is_ci::cached() { 10_000 } else { 1_000 };

    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(Vec<u8>, u8) -> bool);
}
