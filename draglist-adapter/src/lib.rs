//! Animation utilities for the `draglist` crate.
//!
//! The `draglist` crate is UI-agnostic and focuses on drag state and ordering. This crate
//! provides small, framework-neutral helpers for turning its presentation records into motion:
//!
//! - Tweens and easing curves, including a lazy frame iterator
//! - An animated row controller (retargets rows on reorder, pins the dragged row)
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod tween;


pub use controller::{AnimationOptions, Controller, RowAnimation, RowFrame};
pub use tween::{Easing, Frames, Tween};
