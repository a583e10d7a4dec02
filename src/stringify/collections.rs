// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sequences, sets, maps and the priority queue.

use super::summaries::write_stack_summary;
use super::{Stringify, write_map, write_sequence};
use crate::sink::Sink;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};

impl<T: Stringify> Stringify for [T] {
    #[inline]
    fn stringify(&self, sink: &mut dyn Sink) {
        write_sequence(sink, self);
    }
}

impl<T: Stringify, const N: usize> Stringify for [T; N] {
    #[inline]
    fn stringify(&self, sink: &mut dyn Sink) {
        write_sequence(sink, self);
    }
}

impl<T: Stringify> Stringify for Vec<T> {
    #[inline]
    fn stringify(&self, sink: &mut dyn Sink) {
        write_sequence(sink, self);
    }
}

impl<T: Stringify> Stringify for VecDeque<T> {
    #[inline]
    fn stringify(&self, sink: &mut dyn Sink) {
        write_sequence(sink, self);
    }
}

impl<T: Stringify> Stringify for LinkedList<T> {
    #[inline]
    fn stringify(&self, sink: &mut dyn Sink) {
        write_sequence(sink, self);
    }
}

impl<T: Stringify> Stringify for BTreeSet<T> {
    #[inline]
    fn stringify(&self, sink: &mut dyn Sink) {
        write_sequence(sink, self);
    }
}

/// Elements appear in the set's iteration order.
impl<T: Stringify, S> Stringify for HashSet<T, S> {
    #[inline]
    fn stringify(&self, sink: &mut dyn Sink) {
        write_sequence(sink, self);
    }
}

impl<K: Stringify, V: Stringify> Stringify for BTreeMap<K, V> {
    #[inline]
    fn stringify(&self, sink: &mut dyn Sink) {
        write_map(sink, self);
    }
}

/// Entries appear in the map's iteration order.
impl<K: Stringify, V: Stringify, S> Stringify for HashMap<K, V, S> {
    #[inline]
    fn stringify(&self, sink: &mut dyn Sink) {
        write_map(sink, self);
    }
}

/**
A priority queue only shows its greatest element: `{}`, `{top}` or `{top, ...}`.
*/
impl<T: Stringify + Ord> Stringify for BinaryHeap<T> {
    #[inline]
    fn stringify(&self, sink: &mut dyn Sink) {
        write_stack_summary(sink, self.len(), self.peek());
    }
}
