//! Layout engine for a drag-and-drop application canvas.
//!
//! Components are placed on a canvas whose horizontal geometry is stored as a
//! percentage of the canvas width and whose vertical geometry is stored in
//! pixels, independently for each responsive breakpoint. This crate converts
//! pointer gestures into that model and commits them to the `CanvasState`.
//! Rendering, the component catalog, and persistence of the application
//! definition belong to the host; it consumes [`engine::Action`]s and the
//! committed state passed to `on_layout_changed` listeners.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Editing session [`engine::EngineCore`] and the actions it emits |
//! | [`layout`] | Components, per-breakpoint geometry, and the canvas map |
//! | [`transform`] | Pixel/percentage conversions and zoom compensation |
//! | [`grid`] | Grid snapping |
//! | [`mutation`] | Move, resize, property, and removal operations |
//! | [`drop`] | Palette drop to new component |
//! | [`input`] | Drag sources and the gesture state machine |
//! | [`catalog`] | Component templates |
//! | [`naming`] | Display-name and id generation |
//! | [`geometry`] | Canvas measurement probe |
//! | [`dom`] | Browser implementation of the probe |
//! | [`config`] | Grid and fallback settings |
//! | [`error`] | Error taxonomy |
//! | [`consts`] | Shared numeric constants |

pub mod catalog;
pub mod config;
pub mod consts;
pub mod dom;
pub mod drop;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod input;
pub mod layout;
pub mod mutation;
pub mod naming;
pub mod transform;

pub use error::LayoutError;
