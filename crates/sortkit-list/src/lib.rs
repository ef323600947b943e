#![forbid(unsafe_code)]

//! Drag-and-drop reordering for ordered lists.
//!
//! The host owns its [`OrderedList`]s and a [`DragSession`]. A pointer
//! backend reports pick-up, hovers over rendered [`Slot`]s, release, and
//! end; the session resolves each hover to an insertion index, keeps a live
//! preview of the destination, and publishes the final order on drop.
//!
//! ```
//! use sortkit_core::geometry::{Point, Rect};
//! use sortkit_list::{DragSession, ListId, OrderedList, Slot, SpecFns};
//!
//! let mut list = OrderedList::new(1, vec!["A", "B", "C"]);
//! let mut spec = SpecFns::new(|s: &&str| *s);
//! let mut session = DragSession::default();
//!
//! let row = |i: usize| Rect::new(0.0, i as f32 * 10.0, 80.0, 10.0);
//! let (r1, r2) = (row(1), row(2));
//!
//! session
//!     .begin_drag(&mut spec, &list, &Slot::new(ListId(1), 1, &"B", "row", &r1))
//!     .unwrap();
//! session
//!     .hover(&mut spec, &list, &Slot::new(ListId(1), 2, &"C", "row", &r2), Point::new(1.0, 28.0))
//!     .unwrap();
//! assert_eq!(session.displayed(&list), &["A", "C", "B"]);
//!
//! session.drop(&mut spec, &mut list).unwrap();
//! session.end_drag(&mut spec);
//! assert_eq!(list.items(), &["A", "C", "B"]);
//! ```

pub mod config;
pub mod error;
pub mod hover;
pub mod item;
pub mod list;
pub mod mutator;
pub mod session;
pub mod slot;
pub mod spec;

pub use config::SessionConfig;
pub use error::{Result, SortError};
pub use hover::{HoverIgnore, HoverOutcome, HoverResolver, suggest_index};
pub use item::{DraggedItem, HoverTarget, ListId};
pub use list::{ChangeListener, ListSet, ListStore, OrderedList};
pub use mutator::{ListMutator, Preview, apply_move, apply_removal};
pub use session::{DragPhase, DragSession, DropResult};
pub use slot::{DragMonitor, GeometryProvider, Measure, MonitorState, Slot};
pub use spec::{SortableSpec, SpecFns};
