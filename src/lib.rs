//! A scrollable container widget for [bubbletea-rs](https://crates.io/crates/bubbletea-rs).
//!
//! This crate provides a scroll frame: a fixed-footprint viewport that other
//! widgets' rendered views are attached to, scrollable along one axis with an
//! optional proportional scrollbar. Content larger than the viewport can be
//! reached with the mouse wheel (while the pointer hovers the widget),
//! keyboard bindings, or programmatic scrolling, and the scroll axis can be
//! flipped at runtime.
//!
//! # Architecture
//!
//! The widget follows the Elm architecture used throughout the bubbletea-rs
//! ecosystem. [`ScrollableFrame`] is a sub-component: embed it in your model,
//! forward messages to its `update()`, and splice its `view()` into yours.
//! Content mutations and resizes return a `Cmd` that drives a short debounce
//! timer, so a burst of changes costs a single geometry recompute.
//!
//! ```rust
//! use bubbletea_scrollframe::{Orientation, ScrollableFrame};
//!
//! let mut frame = ScrollableFrame::new(40, 10)
//!     .with_orientation(Orientation::Vertical)
//!     .with_scrollbar(true);
//!
//! for i in 1..=30 {
//!     // In an application, hand the returned Cmd to the runtime.
//!     let _cmd = frame.push_child(format!("button {}", i));
//! }
//!
//! frame.scroll_forward(5);
//! println!("{}", frame.view());
//! ```
//!
//! # Modules
//!
//! - [`scrollframe`]: the scroll frame widget itself
//! - [`frame`]: the inner content frame children attach to
//! - [`scrollbar`]: proportional scrollbar rendering
//! - [`key`]: key binding types and the [`key::KeyMap`] trait

pub mod frame;
pub mod key;
pub mod scrollbar;
pub mod scrollframe;

pub use frame::ContentFrame;
pub use scrollbar::Scrollbar;
pub use scrollframe::{Model as ScrollableFrame, Orientation, RecomputeMsg, ScrollFrameKeyMap};

/// Commonly used types, importable in one line.
///
/// ```rust
/// use bubbletea_scrollframe::prelude::*;
///
/// let frame = ScrollableFrame::new(20, 5).with_scrollbar(true);
/// assert_eq!(frame.orientation(), Orientation::Vertical);
/// ```
pub mod prelude {
    pub use crate::key::{Binding, KeyMap};
    pub use crate::{ContentFrame, Orientation, RecomputeMsg, ScrollFrameKeyMap, Scrollbar, ScrollableFrame};
}
