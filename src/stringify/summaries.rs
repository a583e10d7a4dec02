// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
Stack and queue views.

Rust has no dedicated stack or FIFO queue types; a `Vec` or a `VecDeque` plays the
part.  Those render as full sequences by default, so wrap them in [`AsStack`] or
[`AsQueue`] to show them the way a stack or a queue is used: only the ends.

```
use std::collections::VecDeque;
use goinglogging::{AsQueue, AsStack, to_canonical_string};

let undo = vec![1, 2, 3];
assert_eq!(to_canonical_string(&AsStack(&undo)), "{3, ...}");

let jobs: VecDeque<_> = ["a", "b", "c", "d"].into();
assert_eq!(to_canonical_string(&AsQueue(&jobs)), r#"{"a", ..., "d"}"#);
```
*/

use super::Stringify;
use crate::sink::Sink;
use std::collections::{BinaryHeap, LinkedList, VecDeque};

/// A container with a top element.
pub trait StackLike {
    type Item: Stringify;
    fn len(&self) -> usize;
    fn top(&self) -> Option<&Self::Item>;
}

/// A container with a front and a back.
pub trait QueueLike {
    type Item: Stringify;
    fn len(&self) -> usize;
    fn front(&self) -> Option<&Self::Item>;
    fn back(&self) -> Option<&Self::Item>;
}

/// Renders a stack as `{}`, `{top}` or `{top, ...}`.
#[derive(Debug, Clone, Copy)]
pub struct AsStack<'a, C: ?Sized>(pub &'a C);

/// Renders a queue as `{}`, `{front}`, `{front, back}` or `{front, ..., back}`.
#[derive(Debug, Clone, Copy)]
pub struct AsQueue<'a, C: ?Sized>(pub &'a C);

impl<C: StackLike + ?Sized> Stringify for AsStack<'_, C> {
    #[inline]
    fn stringify(&self, sink: &mut dyn Sink) {
        write_stack_summary(sink, self.0.len(), self.0.top());
    }
}

impl<C: QueueLike + ?Sized> Stringify for AsQueue<'_, C> {
    #[inline]
    fn stringify(&self, sink: &mut dyn Sink) {
        write_queue_summary(sink, self.0.len(), self.0.front(), self.0.back());
    }
}

pub(crate) fn write_stack_summary<T: Stringify + ?Sized>(
    sink: &mut dyn Sink,
    len: usize,
    top: Option<&T>,
) {
    sink.write_str("{");
    if let Some(top) = top {
        top.stringify(sink);
        if len > 1 {
            sink.write_str(", ...");
        }
    }
    sink.write_str("}");
}

pub(crate) fn write_queue_summary<T: Stringify + ?Sized>(
    sink: &mut dyn Sink,
    len: usize,
    front: Option<&T>,
    back: Option<&T>,
) {
    sink.write_str("{");
    if let (Some(front), Some(back)) = (front, back) {
        front.stringify(sink);
        match len {
            0 | 1 => {}
            2 => {
                sink.write_str(", ");
                back.stringify(sink);
            }
            _ => {
                sink.write_str(", ..., ");
                back.stringify(sink);
            }
        }
    }
    sink.write_str("}");
}

// The top of a Vec or slice used as a stack is its last element.

impl<T: Stringify> StackLike for [T] {
    type Item = T;
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
    fn top(&self) -> Option<&T> {
        self.last()
    }
}

impl<T: Stringify, const N: usize> StackLike for [T; N] {
    type Item = T;
    fn len(&self) -> usize {
        N
    }
    fn top(&self) -> Option<&T> {
        self.last()
    }
}

impl<T: Stringify> StackLike for Vec<T> {
    type Item = T;
    fn len(&self) -> usize {
        Vec::len(self)
    }
    fn top(&self) -> Option<&T> {
        self.last()
    }
}

impl<T: Stringify> StackLike for VecDeque<T> {
    type Item = T;
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
    fn top(&self) -> Option<&T> {
        VecDeque::back(self)
    }
}

impl<T: Stringify> StackLike for LinkedList<T> {
    type Item = T;
    fn len(&self) -> usize {
        LinkedList::len(self)
    }
    fn top(&self) -> Option<&T> {
        LinkedList::back(self)
    }
}

impl<T: Stringify + Ord> StackLike for BinaryHeap<T> {
    type Item = T;
    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }
    fn top(&self) -> Option<&T> {
        self.peek()
    }
}

impl<T: Stringify> QueueLike for [T] {
    type Item = T;
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
    fn front(&self) -> Option<&T> {
        self.first()
    }
    fn back(&self) -> Option<&T> {
        self.last()
    }
}

impl<T: Stringify, const N: usize> QueueLike for [T; N] {
    type Item = T;
    fn len(&self) -> usize {
        N
    }
    fn front(&self) -> Option<&T> {
        self.first()
    }
    fn back(&self) -> Option<&T> {
        self.last()
    }
}

impl<T: Stringify> QueueLike for Vec<T> {
    type Item = T;
    fn len(&self) -> usize {
        Vec::len(self)
    }
    fn front(&self) -> Option<&T> {
        self.first()
    }
    fn back(&self) -> Option<&T> {
        self.last()
    }
}

impl<T: Stringify> QueueLike for VecDeque<T> {
    type Item = T;
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
    fn front(&self) -> Option<&T> {
        VecDeque::front(self)
    }
    fn back(&self) -> Option<&T> {
        VecDeque::back(self)
    }
}

impl<T: Stringify> QueueLike for LinkedList<T> {
    type Item = T;
    fn len(&self) -> usize {
        LinkedList::len(self)
    }
    fn front(&self) -> Option<&T> {
        LinkedList::front(self)
    }
    fn back(&self) -> Option<&T> {
        LinkedList::back(self)
    }
}
