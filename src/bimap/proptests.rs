use alloc::vec::Vec;
use core::num::NonZeroUsize;

use proptest::prelude::*;

use crate::Builder;
use crate::Cursor;
use crate::DefaultHashBuilder;
use crate::bimap::UnorderedBimap;

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

type Bimap = UnorderedBimap<u8, u8, DefaultHashBuilder, DefaultHashBuilder>;

/// Keys and values come from a small range so that duplicates on either side
/// are frequent.
fn side_strategy() -> impl Strategy<Value = u8> {
    0u8..48
}

#[derive(Debug, Clone)]
enum BimapOp {
    Insert(u8, u8),
    EraseLeft(u8),
    EraseRight(u8),
    EraseNth(usize),
    EraseRange(usize, usize),
    FindLeft(u8),
    FindRight(u8),
    PopFront,
    PopBack,
    RetainEvenKeys,
    Clear,
}

fn bimap_op_strategy() -> impl Strategy<Value = BimapOp> {
    prop_oneof![
        8 => (side_strategy(), side_strategy()).prop_map(|(k, v)| BimapOp::Insert(k, v)),
        2 => side_strategy().prop_map(BimapOp::EraseLeft),
        2 => side_strategy().prop_map(BimapOp::EraseRight),
        2 => any::<usize>().prop_map(BimapOp::EraseNth),
        1 => (any::<usize>(), any::<usize>()).prop_map(|(a, b)| BimapOp::EraseRange(a, b)),
        3 => side_strategy().prop_map(BimapOp::FindLeft),
        3 => side_strategy().prop_map(BimapOp::FindRight),
        1 => Just(BimapOp::PopFront),
        1 => Just(BimapOp::PopBack),
        1 => Just(BimapOp::RetainEvenKeys),
        1 => Just(BimapOp::Clear),
    ]
}

fn small_bimap() -> Bimap {
    Builder::new()
        .with_bucket_count(NonZeroUsize::new(7).unwrap())
        .build()
}

fn nth_cursor(bimap: &Bimap, n: usize) -> Cursor {
    let mut cursor = bimap.begin();
    for _ in 0..n {
        cursor = bimap.advance(cursor);
    }
    cursor
}

fn contents(bimap: &Bimap) -> Vec<(u8, u8)> {
    bimap.iter().map(|(k, v)| (*k, *v)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Replays a random sequence of operations on both the bimap and a
    /// vector of pairs and asserts identical results at every step.
    #[test]
    fn bimap_ops_match_vec(ops in proptest::collection::vec(bimap_op_strategy(), TEST_SIZE)) {
        let mut bimap = small_bimap();
        let mut oracle: Vec<(u8, u8)> = Vec::new();

        for op in &ops {
            match *op {
                BimapOp::Insert(k, v) => {
                    let taken = oracle.iter().any(|&(ok, ov)| ok == k || ov == v);
                    let cursor = bimap.insert(k, v);
                    prop_assert_eq!(cursor.is_end(), taken, "insert({}, {})", k, v);
                    if !taken {
                        oracle.push((k, v));
                        prop_assert_eq!(bimap.get(cursor), Some((&k, &v)));
                    }
                }
                BimapOp::EraseLeft(k) => {
                    let pos = oracle.iter().position(|&(ok, _)| ok == k);
                    let removed = pos.map(|i| oracle.remove(i));
                    prop_assert_eq!(bimap.remove_left(&k), removed, "remove_left({})", k);
                }
                BimapOp::EraseRight(v) => {
                    let pos = oracle.iter().position(|&(_, ov)| ov == v);
                    let removed = pos.is_some();
                    if let Some(i) = pos {
                        oracle.remove(i);
                    }
                    prop_assert_eq!(bimap.erase_right(&v), removed, "erase_right({})", v);
                }
                BimapOp::EraseNth(n) => {
                    if oracle.is_empty() {
                        continue;
                    }
                    let n = n % oracle.len();
                    oracle.remove(n);
                    let next = bimap.erase(nth_cursor(&bimap, n));
                    prop_assert_eq!(bimap.get(next), oracle.get(n).map(|(k, v)| (k, v)));
                }
                BimapOp::EraseRange(a, b) => {
                    let len = oracle.len() + 1;
                    let (first, last) = (a % len, b % len);
                    let (first, last) = (first.min(last), first.max(last));
                    let first_cursor = nth_cursor(&bimap, first);
                    let last_cursor = nth_cursor(&bimap, last);
                    oracle.drain(first..last);
                    let at = bimap.erase_range(first_cursor, last_cursor);
                    prop_assert_eq!(at, last_cursor);
                }
                BimapOp::FindLeft(k) => {
                    let expected = oracle.iter().find(|&&(ok, _)| ok == k).map(|(_, v)| v);
                    prop_assert_eq!(bimap.value(bimap.find_left(&k)), expected);
                    prop_assert_eq!(bimap.at_left(&k).ok(), expected);
                    prop_assert_eq!(bimap.present_left(&k), expected.is_some());
                }
                BimapOp::FindRight(v) => {
                    let expected = oracle.iter().find(|&&(_, ov)| ov == v).map(|(k, _)| k);
                    prop_assert_eq!(bimap.key(bimap.find_right(&v)), expected);
                    prop_assert_eq!(bimap.at_right(&v).ok(), expected);
                    prop_assert_eq!(bimap.present_right(&v), expected.is_some());
                }
                BimapOp::PopFront => {
                    let expected = if oracle.is_empty() { None } else { Some(oracle.remove(0)) };
                    prop_assert_eq!(bimap.pop_front(), expected);
                }
                BimapOp::PopBack => {
                    prop_assert_eq!(bimap.pop_back(), oracle.pop());
                }
                BimapOp::RetainEvenKeys => {
                    oracle.retain(|&(k, _)| k % 2 == 0);
                    bimap.retain(|k, _| k % 2 == 0);
                }
                BimapOp::Clear => {
                    oracle.clear();
                    bimap.clear();
                }
            }

            prop_assert_eq!(bimap.len(), oracle.len());
        }

        prop_assert_eq!(contents(&bimap), oracle.clone());

        let mut reversed: Vec<_> = bimap.iter().rev().map(|(k, v)| (*k, *v)).collect();
        reversed.reverse();
        prop_assert_eq!(reversed, oracle.clone());

        let copy = bimap.clone();
        prop_assert_eq!(contents(&copy), oracle);
        prop_assert_eq!(copy, bimap);
    }

    /// Walking with `advance` and `retreat` visits the pairs in the same order
    /// as iteration, in both directions.
    #[test]
    fn cursor_walk_matches_iter(
        pairs in proptest::collection::vec((side_strategy(), side_strategy()), 0..64),
    ) {
        let mut bimap = small_bimap();
        bimap.extend(pairs);
        let expected = contents(&bimap);

        let mut forward = Vec::new();
        let mut cursor = bimap.begin();
        while let Some((k, v)) = bimap.get(cursor) {
            forward.push((*k, *v));
            cursor = bimap.advance(cursor);
        }
        prop_assert_eq!(&forward, &expected);
        prop_assert!(cursor.is_end());

        let mut backward = Vec::new();
        let mut cursor = bimap.retreat(bimap.end());
        while let Some((k, v)) = bimap.get(cursor) {
            backward.push((*k, *v));
            cursor = bimap.retreat(cursor);
        }
        backward.reverse();
        prop_assert_eq!(backward, expected);
    }
}
