#![forbid(unsafe_code)]

//! Drag session state machine.
//!
//! A [`DragSession`] tracks one in-flight drag from `begin_drag` to
//! `end_drag` and owns the live preview of the destination list.
//!
//! # States
//!
//! ```text
//!            begin_drag             drop
//!   Idle ───────────────▶ Dragging ──────▶ Dropped
//!    ▲                       │                │
//!    └──────── end_drag ─────┴────────────────┘
//! ```
//!
//! `Dropped` only lasts until the backend delivers `end_drag`, which it does
//! immediately after a drop.
//!
//! # Invariants
//!
//! 1. At most one drag is active; `begin_drag` while active is an error.
//! 2. The preview is either absent or reflects the last accepted hover.
//! 3. `drop` clears the preview before publishing to canonical lists.
//! 4. `end_drag` is safe in every state and never touches canonical lists.
//! 5. Deferred hovers scheduled by a drag never run after that drag ended.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Result |
//! |---------|-------|--------|
//! | `MissingClone` | `copy` true, no clone capability | `begin_drag` fails, session stays idle |
//! | `CloneKeyCollision` | clone reuses the original key | `begin_drag` fails, session stays idle |
//! | `DetachedSlot` | slot geometry unmeasurable | operation fails, state unchanged |
//! | `UnknownList` | store lacks a referenced list | operation fails, state unchanged |

use serde::{Deserialize, Serialize};
use sortkit_core::deferred::DeferredQueue;
use sortkit_core::geometry::Point;

use crate::config::SessionConfig;
use crate::error::{Result, SortError};
use crate::hover::{HoverIgnore, HoverOutcome, HoverResolver};
use crate::item::{DraggedItem, HoverTarget, ListId};
use crate::list::{ListStore, OrderedList};
use crate::mutator::{ListMutator, Preview};
use crate::slot::{DragMonitor, Slot};
use crate::spec::SortableSpec;

/// Lifecycle phase of a [`DragSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
    /// Committed (or rejected), waiting for `end_drag`.
    Dropped,
}

/// Outcome of a drop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DropResult {
    /// The move was committed to the canonical list(s).
    Accepted,
    /// Nothing was committed.
    Rejected {
        /// Human-readable explanation for why the drop was rejected.
        reason: String,
    },
}

impl DropResult {
    #[must_use]
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// One drag gesture, from pick-up to release.
#[derive(Debug, Clone)]
pub struct DragSession<T> {
    config: SessionConfig,
    resolver: HoverResolver,
    phase: DragPhase,
    item: Option<DraggedItem<T>>,
    mutator: ListMutator<T>,
    /// Deferred copy hovers, tagged with the drag that scheduled them.
    deferred: DeferredQueue<u64>,
    generation: u64,
}

impl<T: Clone> Default for DragSession<T> {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl<T: Clone> DragSession<T> {
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            resolver: HoverResolver::new(config.match_types),
            phase: DragPhase::Idle,
            item: None,
            mutator: ListMutator::new(),
            deferred: DeferredQueue::new(),
            generation: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase != DragPhase::Idle
    }

    /// The item being dragged, if any.
    #[must_use]
    pub fn item(&self) -> Option<&DraggedItem<T>> {
        self.item.as_ref()
    }

    /// Current suggested destination.
    #[must_use]
    pub fn hover_target(&self) -> Option<HoverTarget> {
        self.item.as_ref().map(|item| item.hover)
    }

    /// The preview ("override") currently displayed, if any.
    #[must_use]
    pub fn preview(&self) -> Option<&Preview<T>> {
        self.mutator.preview()
    }

    /// Items to render for `list`: the preview if it targets this list,
    /// otherwise the canonical items.
    #[must_use]
    pub fn displayed<'a>(&'a self, list: &'a OrderedList<T>) -> &'a [T] {
        self.mutator.displayed(list)
    }

    /// Whether `data` is the payload being dragged.
    ///
    /// For copies this matches the clone, not the original.
    pub fn is_dragging<S>(&self, spec: &S, data: &T) -> bool
    where
        S: SortableSpec<T> + ?Sized,
    {
        self.item
            .as_ref()
            .is_some_and(|item| spec.same_key(&item.data, data))
    }

    /// Number of deferred hovers waiting for the next tick.
    #[must_use]
    pub fn pending_deferred(&self) -> usize {
        self.deferred.len()
    }

    /// Pick up the item rendered in `origin`.
    ///
    /// Applies the copy policy, fires `on_begin_drag`, schedules the initial
    /// hover of a copy, and starts previewing the origin list. Returns a
    /// copy of the new [`DraggedItem`].
    ///
    /// # Errors
    ///
    /// [`SortError::DragInProgress`], [`SortError::DetachedSlot`],
    /// [`SortError::UnknownList`], [`SortError::MissingClone`],
    /// [`SortError::CloneKeyCollision`]. On error the session stays idle
    /// and no hook has fired.
    pub fn begin_drag<S, L>(
        &mut self,
        spec: &mut S,
        store: &L,
        origin: &Slot<'_, T>,
    ) -> Result<DraggedItem<T>>
    where
        S: SortableSpec<T> + ?Sized,
        L: ListStore<T> + ?Sized,
    {
        let _span = sortkit_core::debug_span!(
            "drag_session",
            op = "begin_drag",
            list = origin.list_id.0,
            index = origin.index
        )
        .entered();

        if self.is_active() {
            sortkit_core::warn!("begin_drag while a drag is in progress");
            return Err(SortError::DragInProgress);
        }
        let size = origin.rect()?.size();
        let origin_list = store
            .list(origin.list_id)
            .ok_or(SortError::UnknownList(origin.list_id))?;

        let mut item = DraggedItem {
            data: origin.item.clone(),
            index: origin.index,
            is_copy: false,
            size,
            item_type: origin.item_type.to_string(),
            list_id: origin.list_id,
            hover: HoverTarget::new(origin.index, origin.list_id),
            is_internal: true,
        };

        if spec.copy(&item) {
            let Some(clone) = spec.clone_data(&item.data) else {
                sortkit_core::warn!("copy requested without a clone capability");
                return Err(SortError::MissingClone);
            };
            if spec.same_key(&clone, &item.data) {
                sortkit_core::warn!("clone reused the original track-by key");
                return Err(SortError::CloneKeyCollision);
            }
            item.data = clone;
            item.hover.index += 1;
            item.is_copy = true;
        }

        spec.on_begin_drag(&item);

        let schedule_copy_hover = item.is_copy && spec.can_drop(&item);
        let deferred = schedule_copy_hover && self.config.defer_copy_hover;

        self.generation = self.generation.wrapping_add(1);
        self.phase = DragPhase::Dragging;
        // The copy's first hover targets the origin list, which is already
        // resolved, so the synchronous preview cannot fail.
        if schedule_copy_hover && !deferred {
            self.mutator.preview_on(origin_list, &item);
        } else {
            self.mutator.snapshot(origin_list);
        }
        self.item = Some(item.clone());

        sortkit_core::debug!(
            is_copy = item.is_copy,
            hover = item.hover.index,
            deferred,
            "drag started"
        );

        if deferred {
            self.deferred.schedule(self.generation);
        } else if schedule_copy_hover {
            spec.on_hover(item.clone());
        }
        Ok(item)
    }

    /// Resolve a pointer at `offset` over `slot`.
    ///
    /// When the hover target moves, the preview is recomputed from the
    /// destination's canonical items and `on_hover` receives a copy of the
    /// item. Suppressed hovers update the session but nothing else.
    ///
    /// # Errors
    ///
    /// [`SortError::DetachedSlot`] if the slot has no geometry,
    /// [`SortError::UnknownList`] if the store lacks the slot's list. On
    /// error the hover target and the preview are unchanged.
    pub fn hover<S, L>(
        &mut self,
        spec: &mut S,
        store: &L,
        slot: &Slot<'_, T>,
        offset: Point,
    ) -> Result<HoverOutcome<T>>
    where
        S: SortableSpec<T> + ?Sized,
        L: ListStore<T> + ?Sized,
    {
        if self.phase != DragPhase::Dragging {
            return Ok(HoverOutcome::Ignored(HoverIgnore::Idle));
        }
        let Some(item) = self.item.as_mut() else {
            return Ok(HoverOutcome::Ignored(HoverIgnore::Idle));
        };
        let mut candidate = item.clone();
        let outcome = self.resolver.resolve(&*spec, &mut candidate, slot, offset)?;
        match &outcome {
            HoverOutcome::Moved(moved) => self.mutator.preview_move(store, moved)?,
            HoverOutcome::Suppressed(target) => {
                if store.list(target.list_id).is_none() {
                    return Err(SortError::UnknownList(target.list_id));
                }
            }
            HoverOutcome::Unchanged | HoverOutcome::Ignored(_) => {}
        }
        *item = candidate;
        if let HoverOutcome::Moved(moved) = &outcome {
            spec.on_hover(moved.clone());
        }
        Ok(outcome)
    }

    /// Backend adapter for [`hover`](Self::hover).
    ///
    /// Does nothing when the monitor reports no item or no pointer position.
    pub fn hover_monitor<S, L, M>(
        &mut self,
        spec: &mut S,
        store: &L,
        slot: &Slot<'_, T>,
        monitor: &M,
    ) -> Result<HoverOutcome<T>>
    where
        S: SortableSpec<T> + ?Sized,
        L: ListStore<T> + ?Sized,
        M: DragMonitor<T> + ?Sized,
    {
        if monitor.item().is_none() {
            return Ok(HoverOutcome::Ignored(HoverIgnore::Idle));
        }
        let Some(offset) = monitor.client_offset() else {
            return Ok(HoverOutcome::Ignored(HoverIgnore::NoClientOffset));
        };
        self.hover(spec, store, slot, offset)
    }

    /// Run deferred work whose tick has come. Call once per host event-loop
    /// turn. Returns the number of hovers delivered.
    ///
    /// A deferred copy hover delivers the item's *current* state, so a real
    /// hover processed in between is never rolled back.
    pub fn run_deferred<S, L>(&mut self, spec: &mut S, store: &L) -> Result<usize>
    where
        S: SortableSpec<T> + ?Sized,
        L: ListStore<T> + ?Sized,
    {
        let mut delivered = 0;
        for generation in self.deferred.advance() {
            if generation != self.generation || self.phase != DragPhase::Dragging {
                continue;
            }
            self.deliver_hover(spec, store)?;
            delivered += 1;
        }
        Ok(delivered)
    }

    fn deliver_hover<S, L>(&mut self, spec: &mut S, store: &L) -> Result<()>
    where
        S: SortableSpec<T> + ?Sized,
        L: ListStore<T> + ?Sized,
    {
        let Some(item) = self.item.as_ref() else {
            return Ok(());
        };
        self.mutator.preview_move(store, item)?;
        spec.on_hover(item.clone());
        Ok(())
    }

    /// Release over the current hover target.
    ///
    /// Unless `can_drop` forbids the final position, commits the move and
    /// fires `on_drop`. Either way the preview and pending deferred work are
    /// cleared and the session stays in [`DragPhase::Dropped`] until
    /// [`end_drag`](Self::end_drag).
    ///
    /// # Errors
    ///
    /// [`SortError::NoActiveDrag`] if nothing is being dragged,
    /// [`SortError::UnknownList`] if the store lacks a list involved. On
    /// error the session is still dragging with its preview intact.
    pub fn drop<S, L>(&mut self, spec: &mut S, store: &mut L) -> Result<DropResult>
    where
        S: SortableSpec<T> + ?Sized,
        L: ListStore<T> + ?Sized,
    {
        let _span = sortkit_core::debug_span!("drag_session", op = "drop").entered();

        let Some(item) = self.item.as_ref() else {
            return Err(SortError::NoActiveDrag);
        };
        if self.phase == DragPhase::Dropped {
            return Ok(DropResult::rejected("already dropped"));
        }

        if self.config.check_drop_on_commit && !spec.can_drop(item) {
            sortkit_core::debug!(
                index = item.hover.index,
                list = item.hover.list_id.0,
                "drop rejected by can_drop"
            );
            self.mutator.clear_preview();
            self.deferred.clear();
            self.phase = DragPhase::Dropped;
            return Ok(DropResult::rejected("drop not permitted at target"));
        }

        // Clears the preview only once every list involved is resolved.
        self.mutator.commit_move(store, item)?;
        self.deferred.clear();
        self.phase = DragPhase::Dropped;
        spec.on_drop(item);

        sortkit_core::debug!(
            index = item.hover.index,
            list = item.hover.list_id.0,
            is_copy = item.is_copy,
            "drop committed"
        );
        Ok(DropResult::Accepted)
    }

    /// Finish the gesture, dropped or not.
    ///
    /// Clears the preview and pending deferred work, fires `on_end_drag`
    /// with the final item state, and returns to idle. Calling it again is
    /// a no-op returning `None`.
    pub fn end_drag<S>(&mut self, spec: &mut S) -> Option<DraggedItem<T>>
    where
        S: SortableSpec<T> + ?Sized,
    {
        self.mutator.clear_preview();
        self.deferred.clear();
        self.phase = DragPhase::Idle;
        let item = self.item.take()?;
        spec.on_end_drag(&item);
        sortkit_core::debug!(
            list = item.list_id.0,
            index = item.index,
            "drag ended"
        );
        Some(item)
    }

    /// Id of the list the preview targets, if previewing.
    #[must_use]
    pub fn preview_list(&self) -> Option<ListId> {
        self.mutator.preview().map(|preview| preview.list_id)
    }
}
