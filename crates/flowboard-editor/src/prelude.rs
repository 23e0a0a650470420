//! Prelude module for convenient imports.
//!
//! ```rust
//! use flowboard_editor::prelude::*;
//! ```

pub use crate::definition::{PipelineDefinition, Step};
pub use crate::error::{EditorError, EditorResult};
pub use crate::graph::{Edge, EdgeId, Node, NodeId, PipelineGraph};
pub use crate::position::Position;
pub use crate::session::{EditorSession, Gesture, PointerTarget};
pub use crate::validate::{Diagnostic, DiagnosticCode, validate};
pub use crate::view::ViewState;
