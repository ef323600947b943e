#![forbid(unsafe_code)]

//! Ordered-list mutation: previews and commits.
//!
//! # Algorithm
//!
//! A move is "remove, then insert": when the dragged item is not a copy and
//! belongs to the list being rewritten, it is first removed from its origin
//! index, then its data is inserted at `hover.index`. Because removal comes
//! first, `hover.index` is interpreted against the post-removal sequence,
//! which is exactly how the hover resolver computes it.
//!
//! Index handling follows splice semantics: removing past the end removes
//! nothing, inserting past the end appends.
//!
//! # Invariants
//!
//! 1. A move never changes the total number of items across lists.
//! 2. A copy adds exactly one item to the destination.
//! 3. Items other than the dragged one keep their relative order.
//! 4. A preview never touches canonical lists; a commit always clears the
//!    preview before publishing.

use crate::error::{Result, SortError};
use crate::item::{DraggedItem, ListId};
use crate::list::{ListStore, OrderedList};

/// Sequence of `items` (the list `list_id`) after applying `item`'s move.
#[must_use]
pub fn apply_move<T: Clone>(items: &[T], list_id: ListId, item: &DraggedItem<T>) -> Vec<T> {
    let mut without = items.to_vec();
    if !item.is_copy && item.list_id == list_id {
        remove_at(&mut without, item.index);
    }
    insert_at(&mut without, item.hover.index, item.data.clone());
    without
}

/// Sequence of the origin list after the dragged item left it.
#[must_use]
pub fn apply_removal<T: Clone>(items: &[T], item: &DraggedItem<T>) -> Vec<T> {
    let mut without = items.to_vec();
    remove_at(&mut without, item.index);
    without
}

fn remove_at<T>(items: &mut Vec<T>, index: usize) {
    if index < items.len() {
        items.remove(index);
    }
}

fn insert_at<T>(items: &mut Vec<T>, index: usize, value: T) {
    let index = index.min(items.len());
    items.insert(index, value);
}

/// Uncommitted ordering displayed in place of a canonical list.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview<T> {
    pub list_id: ListId,
    pub items: Vec<T>,
}

/// Applies moves to canonical lists and holds the live preview.
#[derive(Debug, Clone)]
pub struct ListMutator<T> {
    preview: Option<Preview<T>>,
}

impl<T> Default for ListMutator<T> {
    fn default() -> Self {
        Self { preview: None }
    }
}

impl<T: Clone> ListMutator<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The preview currently displayed, if any.
    #[must_use]
    pub fn preview(&self) -> Option<&Preview<T>> {
        self.preview.as_ref()
    }

    #[must_use]
    pub fn is_previewing(&self) -> bool {
        self.preview.is_some()
    }

    /// Start previewing with an unmodified copy of `list`.
    pub fn snapshot(&mut self, list: &OrderedList<T>) {
        self.preview = Some(Preview {
            list_id: list.id(),
            items: list.items().to_vec(),
        });
    }

    /// Drop the preview. Returns whether one was displayed.
    pub fn clear_preview(&mut self) -> bool {
        self.preview.take().is_some()
    }

    /// What should be rendered for `list`.
    #[must_use]
    pub fn displayed<'a>(&'a self, list: &'a OrderedList<T>) -> &'a [T] {
        match &self.preview {
            Some(preview) if preview.list_id == list.id() => &preview.items,
            _ => list.items(),
        }
    }

    /// Move `item` to `item.hover`, either as a preview or a commit.
    pub fn move_item<S: ListStore<T> + ?Sized>(
        &mut self,
        store: &mut S,
        item: &DraggedItem<T>,
        commit: bool,
    ) -> Result<()> {
        if commit {
            self.commit_move(store, item)
        } else {
            self.preview_move(store, item)
        }
    }

    /// Replace the preview with the destination's canonical items after the
    /// move. Canonical lists are not touched.
    pub fn preview_move<S: ListStore<T> + ?Sized>(
        &mut self,
        store: &S,
        item: &DraggedItem<T>,
    ) -> Result<()> {
        let dest_id = item.hover.list_id;
        let dest = store.list(dest_id).ok_or(SortError::UnknownList(dest_id))?;
        self.preview_on(dest, item);
        Ok(())
    }

    /// Preview `item` landing in `dest`, which the caller has already
    /// resolved as the hover target's list.
    pub fn preview_on(&mut self, dest: &OrderedList<T>, item: &DraggedItem<T>) {
        self.preview = Some(Preview {
            list_id: dest.id(),
            items: apply_move(dest.items(), dest.id(), item),
        });
    }

    /// Clear the preview, then rewrite and notify the destination and, for
    /// cross-list moves, the origin.
    ///
    /// Every list involved is looked up before anything changes, so an
    /// [`SortError::UnknownList`] leaves all state untouched.
    pub fn commit_move<S: ListStore<T> + ?Sized>(
        &mut self,
        store: &mut S,
        item: &DraggedItem<T>,
    ) -> Result<()> {
        let dest_id = item.hover.list_id;
        let dest = store.list(dest_id).ok_or(SortError::UnknownList(dest_id))?;
        let moved = apply_move(dest.items(), dest_id, item);

        let origin_rewrite = if !item.is_copy && item.list_id != dest_id {
            let origin = store
                .list(item.list_id)
                .ok_or(SortError::UnknownList(item.list_id))?;
            Some(apply_removal(origin.items(), item))
        } else {
            None
        };

        self.preview = None;
        if let Some(dest) = store.list_mut(dest_id) {
            dest.set_items(moved);
        }
        if let Some(origin_items) = origin_rewrite {
            if let Some(origin) = store.list_mut(item.list_id) {
                origin.set_items(origin_items);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::HoverTarget;
    use crate::list::ListSet;
    use sortkit_core::geometry::Size;

    fn dragged(data: char, from: (u64, usize), to: (u64, usize), is_copy: bool) -> DraggedItem<char> {
        DraggedItem {
            data,
            index: from.1,
            is_copy,
            size: Size::default(),
            item_type: "card".into(),
            list_id: ListId(from.0),
            hover: HoverTarget::new(to.1, ListId(to.0)),
            is_internal: true,
        }
    }

    #[test]
    fn move_down_uses_post_removal_index() {
        // [A,B,C], B to index 2 → remove B → [A,C] → insert at 2 → [A,C,B]
        let out = apply_move(&['A', 'B', 'C'], ListId(1), &dragged('B', (1, 1), (1, 2), false));
        assert_eq!(out, vec!['A', 'C', 'B']);
    }

    #[test]
    fn move_up() {
        let out = apply_move(&['A', 'B', 'C'], ListId(1), &dragged('C', (1, 2), (1, 0), false));
        assert_eq!(out, vec!['C', 'A', 'B']);
    }

    #[test]
    fn copy_only_inserts() {
        let out = apply_move(&['A', 'B'], ListId(1), &dragged('a', (1, 0), (1, 1), true));
        assert_eq!(out, vec!['A', 'a', 'B']);
    }

    #[test]
    fn foreign_item_is_not_removed_from_destination() {
        let out = apply_move(&['X', 'Y'], ListId(2), &dragged('B', (1, 1), (2, 0), false));
        assert_eq!(out, vec!['B', 'X', 'Y']);
    }

    #[test]
    fn out_of_range_indices_follow_splice_semantics() {
        let out = apply_move(&['A'], ListId(1), &dragged('Z', (1, 7), (1, 9), false));
        assert_eq!(out, vec!['A', 'Z']);
        assert_eq!(apply_removal(&['A'], &dragged('A', (1, 4), (2, 0), false)), vec!['A']);
    }

    #[test]
    fn preview_leaves_canonical_untouched() {
        let mut list = OrderedList::new(1, vec!['A', 'B', 'C']);
        let mut m = ListMutator::new();
        m.move_item(&mut list, &dragged('A', (1, 0), (1, 2), false), false)
            .unwrap();
        assert_eq!(list.items(), &['A', 'B', 'C']);
        assert_eq!(list.revision(), 0);
        assert_eq!(m.displayed(&list), &['B', 'C', 'A']);
    }

    #[test]
    fn commit_clears_preview_and_publishes() {
        let mut list = OrderedList::new(1, vec!['A', 'B', 'C']);
        let mut m = ListMutator::new();
        m.snapshot(&list);
        assert!(m.is_previewing());
        m.move_item(&mut list, &dragged('A', (1, 0), (1, 1), false), true)
            .unwrap();
        assert!(!m.is_previewing());
        assert_eq!(list.items(), &['B', 'A', 'C']);
        assert_eq!(list.revision(), 1);
    }

    #[test]
    fn cross_list_commit_rewrites_both() {
        let mut set = ListSet::new()
            .with(OrderedList::new(1, vec!['A', 'B']))
            .with(OrderedList::new(2, vec!['X']));
        let mut m = ListMutator::new();
        m.move_item(&mut set, &dragged('A', (1, 0), (2, 1), false), true)
            .unwrap();
        assert_eq!(set.items(ListId(1)), Some(&['B'][..]));
        assert_eq!(set.items(ListId(2)), Some(&['X', 'A'][..]));
    }

    #[test]
    fn unknown_origin_aborts_before_any_write() {
        let mut set = ListSet::new().with(OrderedList::new(2, vec!['X']));
        let mut m = ListMutator::new();
        let err = m
            .move_item(&mut set, &dragged('A', (1, 0), (2, 0), false), true)
            .unwrap_err();
        assert_eq!(err, SortError::UnknownList(ListId(1)));
        assert_eq!(set.items(ListId(2)), Some(&['X'][..]));
    }

    #[test]
    fn unknown_destination_is_reported() {
        let mut list = OrderedList::new(1, vec!['A']);
        let mut m = ListMutator::new();
        let err = m
            .move_item(&mut list, &dragged('A', (1, 0), (5, 0), false), false)
            .unwrap_err();
        assert_eq!(err, SortError::UnknownList(ListId(5)));
        assert!(!m.is_previewing());
    }

    #[test]
    fn displayed_ignores_preview_for_other_lists() {
        let a = OrderedList::new(1, vec!['A']);
        let b = OrderedList::new(2, vec!['B']);
        let mut m = ListMutator::new();
        m.snapshot(&a);
        assert_eq!(m.displayed(&b), &['B']);
        assert!(m.clear_preview());
        assert!(!m.clear_preview());
    }
}
