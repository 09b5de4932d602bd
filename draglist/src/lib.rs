//! A headless drag-to-reorder engine for fixed-height vertical lists.
//!
//! For animation utilities (tweens, easing, an animated row controller), see the
//! `draglist-adapter` crate.
//!
//! This crate covers the logic of a draggable list: tracking a pointer from press to release,
//! turning the pointer position into a target row, and recomputing the display order whenever
//! the dragged row crosses a row boundary. Orders are immutable snapshots, and the drag state is
//! a plain value updated by a pure function, so hosts can diff, replay or serialize it.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - press/move/release events in page coordinates (mouse or touch)
//! - a [`ListenerHost`] if move/release listeners must be registered per session
//! - a renderer for [`RowPresentation`] records
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod geometry;
mod listener;
mod options;
mod order;
mod presentation;
mod state;
mod tracker;
mod types;

#[cfg(test)]
mod tests;

pub use error::{DragError, OrderError};
pub use geometry::Geometry;
pub use listener::{DetachedHost, ListenerGuard, ListenerHost};
pub use options::{ListOptions, OnChangeCallback, PressPolicy};
pub use order::{Order, reorder, try_reorder};
pub use presentation::{LIFTED_Z_RANK, for_each_row, rows};
pub use state::{DragSession, DragState, Step};
pub use tracker::PointerTracker;
pub use types::{
    Effect, IgnoreReason, ItemId, PointerEvent, PointerKind, RowPresentation, Transition,
};
