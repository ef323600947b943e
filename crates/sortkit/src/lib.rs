#![forbid(unsafe_code)]

//! sortkit public facade crate.
//!
//! Re-exports the stable surface of the internal crates and offers a
//! prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use sortkit_core::deferred::DeferredQueue;
pub use sortkit_core::geometry::{Bounds, Orientation, Point, Rect, Size};
#[cfg(feature = "tracing-json")]
pub use sortkit_core::logging::init_json_subscriber;

// --- List re-exports -------------------------------------------------------

pub use sortkit_list::{
    DragMonitor, DragPhase, DragSession, DraggedItem, DropResult, GeometryProvider, HoverIgnore,
    HoverOutcome, HoverResolver, HoverTarget, ListId, ListMutator, ListSet, ListStore, Measure,
    MonitorState, OrderedList, Preview, Result, SessionConfig, Slot, SortError, SortableSpec,
    SpecFns,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        DragSession, DraggedItem, DropResult, HoverOutcome, HoverTarget, ListId, ListSet,
        ListStore, OrderedList, Point, Rect, Result, SessionConfig, Slot, SortError, SortableSpec,
        SpecFns,
    };

    pub use crate::{core, list};
}

pub use sortkit_core as core;
pub use sortkit_list as list;

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn prelude_covers_a_full_drag() {
        let mut lists = ListSet::new()
            .with(OrderedList::new(1, vec![1u32, 2]))
            .with(OrderedList::new(2, Vec::new()));
        let mut spec = SpecFns::new(|n: &u32| *n);
        let mut session = DragSession::new(SessionConfig::default());

        let geom = Rect::new(0.0, 0.0, 10.0, 10.0);
        let origin = Slot::new(ListId(1), 0, &1u32, "n", &geom);
        session.begin_drag(&mut spec, &lists, &origin).unwrap();

        // Empty lists are entered through a slot on the list's drop zone.
        let zone = Slot::new(ListId(2), 0, &0u32, "n", &geom);
        let out = session
            .hover(&mut spec, &lists, &zone, Point::new(5.0, 2.0))
            .unwrap();
        assert_eq!(out.new_target(), Some(HoverTarget::new(0, ListId(2))));

        assert_eq!(session.drop(&mut spec, &mut lists), Ok(DropResult::Accepted));
        session.end_drag(&mut spec);
        assert_eq!(lists.items(ListId(1)), Some(&[2][..]));
        assert_eq!(lists.items(ListId(2)), Some(&[1][..]));
    }
}
