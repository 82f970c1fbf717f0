use std::fmt;

use smallvec::SmallVec;

use crate::idx::{Idx, IdxDisplay};

/// The neighbours of one polygon vertex within a [Ring].
///
/// `Idx<Link>` doubles as the vertex index: node `i` is vertex `i` of the polygon.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Link {
    prev: Idx<Link>,
    next: Idx<Link>,
}

impl IdxDisplay for Link {
    fn fmt(f: &mut fmt::Formatter<'_>, idx: usize) -> fmt::Result {
        write!(f, "v{}", idx)
    }
}

/// A circular doubly-linked list over the vertices of a polygon, stored as an arena.
///
/// Removing a vertex only relinks its two neighbours; the removed node keeps its stale links
/// and must not be passed back in.
#[derive(Debug, Clone)]
pub(crate) struct Ring {
    links: SmallVec<[Link; 16]>,
    head: Idx<Link>,
    len: usize,
}

impl Ring {
    /// Links vertices `0..len` in index order.
    pub fn new(len: usize) -> Self {
        Self::build(len, false)
    }

    /// Links vertices `0..len` in reverse index order, so that walking `next` visits
    /// `0, len - 1, len - 2, ...`
    pub fn reversed(len: usize) -> Self {
        Self::build(len, true)
    }

    fn build(len: usize, reverse: bool) -> Self {
        debug_assert!(len > 0);
        let links = (0..len).map(|i| {
            let before = Idx::new(if i == 0 { len - 1 } else { i - 1 });
            let after = Idx::new(if i + 1 == len { 0 } else { i + 1 });
            if reverse {
                Link { prev: after, next: before }
            } else {
                Link { prev: before, next: after }
            }
        }).collect();

        Self {
            links,
            head: Idx::new(0),
            len,
        }
    }

    /// The number of vertices still linked
    pub fn len(&self) -> usize {
        self.len
    }

    /// The number of vertices the ring was built with, linked or not
    pub fn arena_len(&self) -> usize {
        self.links.len()
    }

    /// Some vertex which is still linked
    pub fn head(&self) -> Idx<Link> {
        self.head
    }

    #[inline]
    pub fn prev(&self, v: Idx<Link>) -> Idx<Link> {
        self.links[v.usize()].prev
    }

    #[inline]
    pub fn next(&self, v: Idx<Link>) -> Idx<Link> {
        self.links[v.usize()].next
    }

    /// Unlinks `v` from the ring in O(1)
    pub fn remove(&mut self, v: Idx<Link>) {
        let Link { prev, next } = self.links[v.usize()];
        self.links[prev.usize()].next = next;
        self.links[next.usize()].prev = prev;
        if self.head == v {
            self.head = next;
        }
        self.len -= 1;
    }

    /// Visits every linked vertex once, following `next` from `start`
    pub fn iter_from(&self, start: Idx<Link>) -> RingIter<'_> {
        RingIter {
            ring: self,
            current: start,
            remaining: self.len,
        }
    }

    pub fn iter(&self) -> RingIter<'_> {
        self.iter_from(self.head)
    }
}

pub(crate) struct RingIter<'r> {
    ring: &'r Ring,
    current: Idx<Link>,
    remaining: usize,
}

impl<'r> Iterator for RingIter<'r> {
    type Item = Idx<Link>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let v = self.current;
        self.current = self.ring.next(v);
        self.remaining -= 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'r> ExactSizeIterator for RingIter<'r> { }
