//! PDF document outline (bookmarks) access.
//!
//! The outline is a graph of dictionaries linked by `/First` (first child)
//! and `/Next` (next sibling) references. Nothing in a damaged file keeps
//! that graph a tree: an item can name one of its ancestors as a child, two
//! parents can share a child, and a sibling chain can loop back on itself.
//!
//! [`OutlineSource`] is the read-only view the report builder consumes, and
//! [`OutlineChildren`] enumerates the immediate children of one item.

use std::fmt::Debug;
use std::hash::Hash;

/// Read-only view of an outline graph owned by a document layer.
///
/// Items are addressed by opaque handles. Two handles compare equal exactly
/// when they name the same item; structurally identical items stay distinct.
/// The outline root dictionary is addressed by the same kind of handle as the
/// items below it.
pub trait OutlineSource {
    /// Identity of an outline item.
    type Handle: Copy + Eq + Hash + Debug;

    /// `/First`: the first child, if any.
    fn first_child(&self, item: Self::Handle) -> Option<Self::Handle>;

    /// `/Next`: the next sibling, if any.
    fn next_sibling(&self, item: Self::Handle) -> Option<Self::Handle>;

    /// `/Title`, decoded.
    fn title(&self, item: Self::Handle) -> Option<String>;

    /// `/C` components as stored, whatever their count.
    ///
    /// `None` means no color entry (or one that is not a numeric array).
    fn color(&self, item: Self::Handle) -> Option<Vec<f64>>;

    /// Bit 1 of `/F`.
    fn is_italic(&self, item: Self::Handle) -> bool;

    /// Bit 2 of `/F`.
    fn is_bold(&self, item: Self::Handle) -> bool;
}

/// Iterator over the immediate children of an outline item.
///
/// Follows `/First` once and then `/Next` until a link is absent. It performs
/// no loop detection of its own: on a sibling chain that loops it never
/// ends, so callers walking untrusted graphs must bound it (the report
/// builder stops a chain at the first repeated handle).
pub struct OutlineChildren<'a, S: OutlineSource + ?Sized> {
    source: &'a S,
    next: Option<S::Handle>,
}

impl<'a, S: OutlineSource + ?Sized> Iterator for OutlineChildren<'a, S> {
    type Item = S::Handle;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.source.next_sibling(current);
        Some(current)
    }
}

impl<'a, S: OutlineSource + ?Sized> Clone for OutlineChildren<'a, S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            next: self.next,
        }
    }
}

/// Enumerate the immediate children of `item`.
///
/// An absent item yields an empty sequence. The iterator is cheap to restart:
/// calling this again (or cloning) starts over from `/First`.
pub fn children<S: OutlineSource + ?Sized>(
    source: &S,
    item: Option<S::Handle>,
) -> OutlineChildren<'_, S> {
    OutlineChildren {
        source,
        next: item.and_then(|handle| source.first_child(handle)),
    }
}
