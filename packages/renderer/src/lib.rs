//! Lazy tree-flattening style renderer.
//!
//! The walker flattens a heterogeneous tree of presentable values into an
//! ordered fragment list; the driver resolves all deferred fragments
//! concurrently and joins the result in traversal order.

pub mod renderer;
pub mod walker;



pub use renderer::{render, RenderError, RenderResult};
pub use walker::{flatten, Fragment};
