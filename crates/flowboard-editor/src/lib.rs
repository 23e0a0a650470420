#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod definition;
mod error;
pub mod graph;
mod position;
pub mod session;
pub mod validate;
pub mod view;

#[doc(hidden)]
pub mod prelude;

pub use error::{EditorError, EditorResult};
pub use position::Position;

/// Tracing target for editor operations.
pub const TRACING_TARGET: &str = "flowboard_editor";
