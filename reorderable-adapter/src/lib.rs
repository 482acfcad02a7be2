//! Adapter utilities for the `reorderable` crate.
//!
//! The `reorderable` crate is UI-agnostic and only talks to nodes through `ViewHandle`. This
//! crate provides small, framework-neutral helpers for hosts that have no native node or
//! transition system:
//!
//! - An in-memory view node whose transitions are resolved with a tween
//! - A controller that hit-tests raw pointer presses and drives timers from one frame clock
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod tween;
mod view;


pub use controller::{Controller, FrameReport, PointerEvent, PointerOutcome};
pub use tween::{Easing, Tween};
pub use view::SoftwareView;
