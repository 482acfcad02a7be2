//! A headless drag-to-reorder engine.
//!
//! For adapter-level utilities (software view nodes, raw pointer routing), see the
//! `reorderable-adapter` crate.
//!
//! The user presses an item and drags it over its neighbors; the dragged item moves into the
//! slot of the neighbor under the pointer (everything in between shifts by one), the list order
//! is committed to the host, and displaced neighbors glide into their new slots with a FLIP
//! transition. This crate owns the hard parts:
//! - the drag-session state machine ([`DragController`])
//! - pointer tracking and a rate-limited, collision-triggered reorder
//! - the index move on the item list ([`ReorderModel`])
//! - FLIP settle animations ([`SettleAnimator`])
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - one [`ViewHandle`] per rendered item (box queries, transform/transition/stacking writes)
//! - pointer events and a millisecond clock
//! - a `commit` callback that re-renders the list in its new order
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

pub mod collision;
mod controller;
mod error;
mod model;
mod options;
mod registry;
mod session;
mod settle;
mod types;
mod view;


pub use collision::{Overlap, find_overlap, item_at};
pub use controller::{DragController, DragState, MoveOutcome, Reorder};
pub use error::ReorderError;
pub use model::{CommitCallback, ReorderModel};
pub use options::{DEFAULT_COOLDOWN_MS, DEFAULT_SETTLE_DURATION_MS, ReorderOptions};
pub use registry::{BoxChange, GeometryRegistry, Registration, TrackedElement};
pub use session::{DragSession, ReorderGate};
pub use settle::SettleAnimator;
pub use types::{BoundingBox, Item, ItemId, Offset, Point};
pub use view::ViewHandle;
