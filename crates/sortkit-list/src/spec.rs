#![forbid(unsafe_code)]

//! Per-list capabilities supplied by the integrating application.
//!
//! [`SortableSpec`] is the trait the drag engine calls into. Only
//! [`track_by`](SortableSpec::track_by) is required; every other capability
//! has a documented default:
//!
//! | capability    | default                          |
//! |---------------|----------------------------------|
//! | `copy`        | never copy                       |
//! | `clone_data`  | absent (copying becomes an error)|
//! | `can_drop`    | always allow                     |
//! | hooks         | do nothing                       |
//!
//! [`SpecFns`] implements the trait from closures, for callers that prefer
//! to assemble a spec at runtime.

use std::fmt;

use crate::item::DraggedItem;

/// Capabilities of a sortable list.
///
/// # Example
///
/// ```
/// use sortkit_list::item::DraggedItem;
/// use sortkit_list::spec::SortableSpec;
///
/// struct Card { id: u32, title: String }
///
/// struct Palette { next_id: u32 }
///
/// impl SortableSpec<Card> for Palette {
///     type Key = u32;
///
///     fn track_by(&self, card: &Card) -> u32 { card.id }
///
///     // The palette hands out copies and keeps its own cards.
///     fn copy(&self, _item: &DraggedItem<Card>) -> bool { true }
///
///     fn clone_data(&self, card: &Card) -> Option<Card> {
///         Some(Card { id: self.next_id, title: card.title.clone() })
///     }
/// }
/// ```
pub trait SortableSpec<T> {
    /// Identity key of an item.
    type Key: PartialEq;

    /// Key that distinguishes `item` from every other item in its list.
    fn track_by(&self, item: &T) -> Self::Key;

    /// Whether dragging `item` should produce a copy.
    fn copy(&self, _item: &DraggedItem<T>) -> bool {
        false
    }

    /// Produce a copy of `data` with a fresh key.
    ///
    /// Return `None` when the list has no clone capability. Must be
    /// provided whenever [`copy`](Self::copy) can return true.
    fn clone_data(&self, _data: &T) -> Option<T> {
        None
    }

    /// Whether `item` may be dropped at `item.hover`.
    fn can_drop(&self, _item: &DraggedItem<T>) -> bool {
        true
    }

    /// Called once when a drag begins, after copy handling.
    fn on_begin_drag(&mut self, _item: &DraggedItem<T>) {}

    /// Called with a copy of the item whenever its hover target changes.
    fn on_hover(&mut self, _item: DraggedItem<T>) {}

    /// Called after a drop has been committed.
    fn on_drop(&mut self, _item: &DraggedItem<T>) {}

    /// Called when the drag ends, dropped or not.
    fn on_end_drag(&mut self, _item: &DraggedItem<T>) {}

    /// Whether two items share a key.
    fn same_key(&self, a: &T, b: &T) -> bool {
        self.track_by(a) == self.track_by(b)
    }
}

type Predicate<T> = Box<dyn Fn(&DraggedItem<T>) -> bool>;
type Hook<T> = Box<dyn FnMut(&DraggedItem<T>)>;

/// Closure-backed [`SortableSpec`].
///
/// Each optional capability is an explicitly nullable field; `None` selects
/// the trait's default behaviour.
pub struct SpecFns<T, K> {
    track_by: Box<dyn Fn(&T) -> K>,
    pub copy: Option<Predicate<T>>,
    pub clone: Option<Box<dyn Fn(&T) -> T>>,
    pub can_drop: Option<Predicate<T>>,
    pub begin_drag: Option<Hook<T>>,
    pub hover: Option<Box<dyn FnMut(DraggedItem<T>)>>,
    pub drop: Option<Hook<T>>,
    pub end_drag: Option<Hook<T>>,
}

impl<T, K> SpecFns<T, K> {
    /// Create a spec with only the required key function.
    pub fn new(track_by: impl Fn(&T) -> K + 'static) -> Self {
        Self {
            track_by: Box::new(track_by),
            copy: None,
            clone: None,
            can_drop: None,
            begin_drag: None,
            hover: None,
            drop: None,
            end_drag: None,
        }
    }

    #[must_use]
    pub fn with_copy(mut self, copy: impl Fn(&DraggedItem<T>) -> bool + 'static) -> Self {
        self.copy = Some(Box::new(copy));
        self
    }

    #[must_use]
    pub fn with_clone(mut self, clone: impl Fn(&T) -> T + 'static) -> Self {
        self.clone = Some(Box::new(clone));
        self
    }

    #[must_use]
    pub fn with_can_drop(mut self, can_drop: impl Fn(&DraggedItem<T>) -> bool + 'static) -> Self {
        self.can_drop = Some(Box::new(can_drop));
        self
    }

    #[must_use]
    pub fn with_begin_drag(mut self, hook: impl FnMut(&DraggedItem<T>) + 'static) -> Self {
        self.begin_drag = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn with_hover(mut self, hook: impl FnMut(DraggedItem<T>) + 'static) -> Self {
        self.hover = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn with_drop(mut self, hook: impl FnMut(&DraggedItem<T>) + 'static) -> Self {
        self.drop = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn with_end_drag(mut self, hook: impl FnMut(&DraggedItem<T>) + 'static) -> Self {
        self.end_drag = Some(Box::new(hook));
        self
    }
}

impl<T, K> fmt::Debug for SpecFns<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecFns")
            .field("copy", &self.copy.is_some())
            .field("clone", &self.clone.is_some())
            .field("can_drop", &self.can_drop.is_some())
            .field("begin_drag", &self.begin_drag.is_some())
            .field("hover", &self.hover.is_some())
            .field("drop", &self.drop.is_some())
            .field("end_drag", &self.end_drag.is_some())
            .finish()
    }
}

impl<T, K: PartialEq> SortableSpec<T> for SpecFns<T, K> {
    type Key = K;

    fn track_by(&self, item: &T) -> K {
        (self.track_by)(item)
    }

    fn copy(&self, item: &DraggedItem<T>) -> bool {
        self.copy.as_ref().is_some_and(|copy| copy(item))
    }

    fn clone_data(&self, data: &T) -> Option<T> {
        self.clone.as_ref().map(|clone| clone(data))
    }

    fn can_drop(&self, item: &DraggedItem<T>) -> bool {
        self.can_drop.as_ref().is_none_or(|can_drop| can_drop(item))
    }

    fn on_begin_drag(&mut self, item: &DraggedItem<T>) {
        if let Some(hook) = self.begin_drag.as_mut() {
            hook(item);
        }
    }

    fn on_hover(&mut self, item: DraggedItem<T>) {
        if let Some(hook) = self.hover.as_mut() {
            hook(item);
        }
    }

    fn on_drop(&mut self, item: &DraggedItem<T>) {
        if let Some(hook) = self.drop.as_mut() {
            hook(item);
        }
    }

    fn on_end_drag(&mut self, item: &DraggedItem<T>) {
        if let Some(hook) = self.end_drag.as_mut() {
            hook(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{HoverTarget, ListId};
    use sortkit_core::geometry::Size;
    use std::cell::Cell;
    use std::rc::Rc;

    fn dragged(data: u32) -> DraggedItem<u32> {
        DraggedItem {
            data,
            index: 0,
            is_copy: false,
            size: Size::default(),
            item_type: "n".into(),
            list_id: ListId(0),
            hover: HoverTarget::new(0, ListId(0)),
            is_internal: true,
        }
    }

    struct KeyOnly;

    impl SortableSpec<u32> for KeyOnly {
        type Key = u32;
        fn track_by(&self, item: &u32) -> u32 {
            *item
        }
    }

    #[test]
    fn trait_defaults() {
        let mut spec = KeyOnly;
        let it = dragged(1);
        assert!(!spec.copy(&it));
        assert!(spec.clone_data(&1).is_none());
        assert!(spec.can_drop(&it));
        spec.on_begin_drag(&it);
        spec.on_hover(it.clone());
        spec.on_drop(&it);
        spec.on_end_drag(&it);
        assert!(spec.same_key(&3, &3));
        assert!(!spec.same_key(&3, &4));
    }

    #[test]
    fn fns_defaults_match_trait_defaults() {
        let spec = SpecFns::new(|n: &u32| *n);
        let it = dragged(5);
        assert!(!spec.copy(&it));
        assert!(spec.clone_data(&5).is_none());
        assert!(spec.can_drop(&it));
    }

    #[test]
    fn fns_capabilities_are_used() {
        let spec = SpecFns::new(|n: &u32| *n)
            .with_copy(|it| it.data % 2 == 0)
            .with_clone(|n| n + 100)
            .with_can_drop(|it| it.hover.index < 3);
        let mut it = dragged(4);
        assert!(spec.copy(&it));
        assert_eq!(spec.clone_data(&4), Some(104));
        assert!(spec.can_drop(&it));
        it.hover.index = 3;
        assert!(!spec.can_drop(&it));
    }

    #[test]
    fn fns_hooks_fire() {
        let hits = Rc::new(Cell::new(0));
        let (a, b, c, d) = (hits.clone(), hits.clone(), hits.clone(), hits.clone());
        let mut spec = SpecFns::new(|n: &u32| *n)
            .with_begin_drag(move |_| a.set(a.get() + 1))
            .with_hover(move |_| b.set(b.get() + 10))
            .with_drop(move |_| c.set(c.get() + 100))
            .with_end_drag(move |_| d.set(d.get() + 1000));
        let it = dragged(0);
        spec.on_begin_drag(&it);
        spec.on_hover(it.clone());
        spec.on_drop(&it);
        spec.on_end_drag(&it);
        assert_eq!(hits.get(), 1111);
    }

    #[test]
    fn fns_debug_shows_presence() {
        let spec = SpecFns::new(|n: &u32| *n).with_clone(|n| *n);
        let dbg = format!("{spec:?}");
        assert!(dbg.contains("clone: true"));
        assert!(dbg.contains("copy: false"));
    }
}
