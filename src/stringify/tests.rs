// SPDX-License-Identifier: MIT OR Apache-2.0

use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::ffi::CString;
use std::num::NonZeroU32;
use std::rc::Rc;
use std::sync::Arc;

fn s<T: Stringify + ?Sized>(value: &T) -> String {
    to_canonical_string(value)
}

#[test]
fn scalars() {
    assert_eq!(s(&true), "true");
    assert_eq!(s(&false), "false");
    assert_eq!(s(&'c'), "'c'");
    assert_eq!(s(&'é'), "'é'");
    assert_eq!(s(&-17i64), "-17");
    assert_eq!(s(&200u8), "200");
    assert_eq!(s(&1.5f32), "1.5");
    assert_eq!(s(&NonZeroU32::MIN), "1");
}

#[test]
fn text_is_quoted_and_not_escaped() {
    assert_eq!(s("s"), r#""s""#);
    assert_eq!(s(&String::from("a\"b")), r#""a"b""#);
    assert_eq!(s(&Cow::Borrowed("cow")), r#""cow""#);
    let c = CString::new("c text").expect("no interior nul");
    assert_eq!(s(&c), r#""c text""#);
    assert_eq!(s(c.as_c_str()), r#""c text""#);
}

#[test]
fn pointers_render_their_target() {
    assert_eq!(s(&&&1), "1");
    assert_eq!(s(&Box::new('b')), "'b'");
    assert_eq!(s(&Rc::new("rc")), r#""rc""#);
    assert_eq!(s(&Arc::new(vec![1])), "{1}");
    assert_eq!(s(&Box::<str>::from("boxed")), r#""boxed""#);
    assert_eq!(s(&Rc::<str>::from("shared")), r#""shared""#);
}

#[test]
fn sequences() {
    assert_eq!(s(&[1, 2, 3]), "{1, 2, 3}");
    assert_eq!(s(&vec!["a", "b"]), r#"{"a", "b"}"#);
    assert_eq!(s(&VecDeque::from([1, 2])), "{1, 2}");
    assert_eq!(s(&LinkedList::from(['x'])), "{'x'}");
    assert_eq!(s(&BTreeSet::from([3, 1, 2])), "{1, 2, 3}");
    assert_eq!(s(&HashSet::from([7])), "{7}");
    assert_eq!(s(&[1u8, 2][..]), "{1, 2}");
}

#[test]
fn empty_containers() {
    assert_eq!(s(&Vec::<i32>::new()), "{}");
    assert_eq!(s(&[0u8; 0]), "{}");
    assert_eq!(s(&BTreeSet::<i32>::new()), "{}");
    assert_eq!(s(&BTreeMap::<i32, i32>::new()), "{}");
    assert_eq!(s(&HashMap::<i32, i32>::new()), "{}");
}

#[test]
fn maps() {
    let map = BTreeMap::from([(1, "one"), (2, "two")]);
    assert_eq!(s(&map), r#"{1: "one", 2: "two"}"#);
    let map = HashMap::from([('k', vec![true])]);
    assert_eq!(s(&map), "{'k': {true}}");
}

#[test]
fn nested_containers() {
    let v = vec![
        HashMap::from([(String::from("k0"), String::from("v0"))]),
        HashMap::from([(String::from("k1"), String::from("v1"))]),
    ];
    assert_eq!(s(&v), r#"{{"k0": "v0"}, {"k1": "v1"}}"#);
    assert_eq!(s(&vec![vec![1, 2], vec![], vec![3]]), "{{1, 2}, {}, {3}}");
}

#[test]
fn stack_summaries() {
    assert_eq!(s(&AsStack(&Vec::<i32>::new())), "{}");
    assert_eq!(s(&AsStack(&vec![1])), "{1}");
    assert_eq!(s(&AsStack(&vec![1, 2])), "{2, ...}");
    assert_eq!(s(&AsStack(&vec![1, 2, 3])), "{3, ...}");
    assert_eq!(s(&AsStack(&[5, 6][..])), "{6, ...}");
    assert_eq!(s(&AsStack(&LinkedList::from(["a", "b"]))), r#"{"b", ...}"#);
}

#[test]
fn queue_summaries() {
    let q = |items: &[i32]| s(&AsQueue(&items.iter().copied().collect::<VecDeque<_>>()));
    assert_eq!(q(&[]), "{}");
    assert_eq!(q(&[1]), "{1}");
    assert_eq!(q(&[1, 2]), "{1, 2}");
    assert_eq!(q(&[1, 2, 3]), "{1, ..., 3}");
    assert_eq!(q(&[1, 2, 3, 4, 5]), "{1, ..., 5}");
    assert_eq!(s(&AsQueue(&['x', 'y', 'z'])), "{'x', ..., 'z'}");
}

#[test]
fn priority_queue_shows_greatest() {
    assert_eq!(s(&BinaryHeap::<i32>::new()), "{}");
    assert_eq!(s(&BinaryHeap::from([4])), "{4}");
    assert_eq!(s(&BinaryHeap::from([1, 9, 4])), "{9, ...}");
}

#[test]
fn summaries_nest() {
    let stacks = vec![AsStack(&[1, 2][..]), AsStack(&[][..])];
    assert_eq!(s(&stacks), "{{2, ...}, {}}");
}

struct Celsius(i32);
impl std::fmt::Display for Celsius {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°C", self.0)
    }
}
crate::stringify_with_display!(Celsius);

#[test]
fn display_types() {
    assert_eq!(s(&vec![Celsius(20), Celsius(-3)]), "{20°C, -3°C}");
    assert_eq!(
        s(&[Shown(std::net::Ipv4Addr::LOCALHOST)]),
        "{127.0.0.1}"
    );
}

#[test]
fn canonical_display_adapter() {
    assert_eq!(format!("[{}]", Canonical(&vec!['a'])), "[{'a'}]");
}

proptest! {
    #[test]
    fn sequence_is_braced_join(items in proptest::collection::vec(any::<i64>(), 0..20)) {
        let expected = format!(
            "{{{}}}",
            items.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(", ")
        );
        prop_assert_eq!(s(&items), expected);
    }

    #[test]
    fn map_is_braced_join_of_pairs(map in proptest::collection::btree_map(any::<u16>(), any::<bool>(), 0..10)) {
        let expected = format!(
            "{{{}}}",
            map.iter().map(|(k, v)| format!("{}: {}", k, v)).collect::<Vec<_>>().join(", ")
        );
        prop_assert_eq!(s(&map), expected);
    }

    #[test]
    fn strings_are_verbatim(text in ".*") {
        prop_assert_eq!(s(text.as_str()), format!("\"{}\"", text));
    }
}
