//! Property-based invariant tests for geometry primitives and the deferred
//! queue.
//!
//! 1. The axis centre lies within the rectangle's extent.
//! 2. Points before the start edge are always in the leading half.
//! 3. Points at or past the trailing edge are never in the leading half.
//! 4. `Bounds::to_rect` agrees with the edges when extents are unreported.
//! 5. Deferred work is released once, in order, never on its own tick.

use proptest::prelude::*;
use sortkit_core::deferred::DeferredQueue;
use sortkit_core::geometry::{Bounds, Orientation, Point, Rect};

// ── Helpers ─────────────────────────────────────────────────────────────

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (-500i32..500, -500i32..500, 1i32..400, 1i32..400)
        .prop_map(|(x, y, w, h)| Rect::new(x as f32, y as f32, w as f32, h as f32))
}

fn orientation_strategy() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Vertical), Just(Orientation::Horizontal)]
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Centre lies within the extent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn centre_within_extent(r in rect_strategy(), o in orientation_strategy()) {
        let c = r.centre(o);
        prop_assert!(c >= r.start(o), "centre {} before start {:?}", c, r);
        prop_assert!(c <= r.start(o) + r.extent(o), "centre {} past end {:?}", c, r);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2 + 3. Half classification at the edges
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn before_start_is_leading(r in rect_strategy(), o in orientation_strategy(), d in 0i32..100) {
        let along = r.start(o) - d as f32;
        let p = match o {
            Orientation::Vertical => Point::new(r.x, along),
            Orientation::Horizontal => Point::new(along, r.y),
        };
        prop_assert!(r.in_leading_half(p, o));
    }

    #[test]
    fn past_end_is_trailing(r in rect_strategy(), o in orientation_strategy(), d in 0i32..100) {
        let along = r.start(o) + r.extent(o) + d as f32;
        let p = match o {
            Orientation::Vertical => Point::new(r.x, along),
            Orientation::Horizontal => Point::new(along, r.y),
        };
        prop_assert!(!r.in_leading_half(p, o));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Edge fallback
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn bounds_without_extent_use_edges(r in rect_strategy()) {
        let mut b = Bounds::from(r);
        b.width = 0.0;
        b.height = 0.0;
        prop_assert_eq!(b.to_rect(), r);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Deferred queue ordering
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn deferred_releases_once_in_order(batches in prop::collection::vec(0usize..6, 1..8)) {
        let mut q = DeferredQueue::new();
        let mut expected = Vec::new();
        let mut released = Vec::new();
        let mut next = 0u32;
        for batch in batches {
            for _ in 0..batch {
                q.schedule(next);
                expected.push(next);
                next += 1;
            }
            prop_assert!(q.take_ready().is_empty(), "same-tick work released");
            released.extend(q.advance());
        }
        prop_assert_eq!(released, expected);
        prop_assert!(q.is_empty());
    }
}
