//! Interaction cores for the back-office list and preview controls.
//!
//! This crate holds everything about the two browser controllers that can be
//! reasoned about without a DOM: the drag-and-drop reorder state machine, the
//! insertion geometry it relies on, the debounced hover-preview state machine,
//! its payload cache, and tooltip placement. Each core consumes plain event
//! values and returns a list of effects; the host (`backoffice` crate) is
//! responsible only for translating DOM events into calls here and for
//! executing the returned effects against the page.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`reorder`] | Drag session state machine and [`reorder::ReorderEffect`]s |
//! | [`geometry`] | Row boxes and the insertion-point computation |
//! | [`preview`] | Hover cycle state machine and [`preview::HoverEffect`]s |
//! | [`cache`] | Session-lifetime preview payload cache |
//! | [`position`] | Tooltip placement against viewport bounds |
//! | [`error`] | Failure taxonomy shared by both controllers |
//! | [`consts`] | Shared constants (class names, offsets, defaults) |

pub mod cache;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod position;
pub mod preview;
pub mod reorder;

pub use error::ControlError;
