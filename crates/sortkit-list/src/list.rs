#![forbid(unsafe_code)]

//! Canonical ordered collections and their lookup.

use std::fmt;

use crate::item::ListId;

/// Callback fired with the full new sequence after each commit.
pub type ChangeListener<T> = Box<dyn FnMut(ListId, &[T])>;

/// The canonical, committed sequence of a list.
///
/// Owned by the hosting scope. The drag engine borrows it per operation and
/// replaces its contents only on commit, notifying subscribers each time.
pub struct OrderedList<T> {
    id: ListId,
    items: Vec<T>,
    revision: u64,
    listeners: Vec<ChangeListener<T>>,
}

impl<T> OrderedList<T> {
    pub fn new(id: impl Into<ListId>, items: Vec<T>) -> Self {
        Self {
            id: id.into(),
            items,
            revision: 0,
            listeners: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> ListId {
        self.id
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of committed changes since creation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Register a change listener.
    pub fn subscribe(&mut self, listener: impl FnMut(ListId, &[T]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Replace the whole sequence and notify subscribers.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.revision = self.revision.saturating_add(1);
        sortkit_core::debug!(
            list = self.id.0,
            len = self.items.len(),
            revision = self.revision,
            "list committed"
        );
        let id = self.id;
        for listener in &mut self.listeners {
            listener(id, &self.items);
        }
    }

    /// Take the items, dropping listeners.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedList")
            .field("id", &self.id)
            .field("items", &self.items)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Lookup of lists by id, borrowed by the drag session per operation.
pub trait ListStore<T> {
    fn list(&self, id: ListId) -> Option<&OrderedList<T>>;
    fn list_mut(&mut self, id: ListId) -> Option<&mut OrderedList<T>>;
}

/// A single list answers only for its own id.
impl<T> ListStore<T> for OrderedList<T> {
    fn list(&self, id: ListId) -> Option<&OrderedList<T>> {
        (self.id == id).then_some(self)
    }

    fn list_mut(&mut self, id: ListId) -> Option<&mut OrderedList<T>> {
        (self.id == id).then_some(self)
    }
}

/// Several lists sharing one drag session (e.g. the columns of a board).
pub struct ListSet<T> {
    lists: Vec<OrderedList<T>>,
}

impl<T> Default for ListSet<T> {
    fn default() -> Self {
        Self { lists: Vec::new() }
    }
}

impl<T> ListSet<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a list, returning the list it replaced if the id was taken.
    pub fn insert(&mut self, list: OrderedList<T>) -> Option<OrderedList<T>> {
        match self.lists.iter_mut().find(|l| l.id == list.id) {
            Some(slot) => Some(std::mem::replace(slot, list)),
            None => {
                self.lists.push(list);
                None
            }
        }
    }

    #[must_use]
    pub fn with(mut self, list: OrderedList<T>) -> Self {
        self.insert(list);
        self
    }

    pub fn remove(&mut self, id: ListId) -> Option<OrderedList<T>> {
        let pos = self.lists.iter().position(|l| l.id == id)?;
        Some(self.lists.remove(pos))
    }

    /// Items of the given list, if present.
    #[must_use]
    pub fn items(&self, id: ListId) -> Option<&[T]> {
        self.list(id).map(OrderedList::items)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrderedList<T>> {
        self.lists.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

impl<T> ListStore<T> for ListSet<T> {
    fn list(&self, id: ListId) -> Option<&OrderedList<T>> {
        self.lists.iter().find(|l| l.id == id)
    }

    fn list_mut(&mut self, id: ListId) -> Option<&mut OrderedList<T>> {
        self.lists.iter_mut().find(|l| l.id == id)
    }
}

impl<T: fmt::Debug> fmt::Debug for ListSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.lists).finish()
    }
}
