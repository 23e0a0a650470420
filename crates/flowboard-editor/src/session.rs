//! Editor session and pointer-gesture state machine.
//!
//! The session owns the graph, the view transform, the catalog cache, and
//! the current gesture. A rendering layer performs hit testing, feeds
//! pointer events in (with the hit target), and polls the graph revision to
//! know when to redraw. Routing events through the session keeps all
//! listener state in-process; nothing here installs ambient global handlers.

use flowboard_catalog::OperationCatalog;

use crate::TRACING_TARGET;
use crate::definition::PipelineDefinition;
use crate::error::EditorResult;
use crate::graph::{EdgeId, NodeId, PipelineGraph};
use crate::position::Position;
use crate::validate::{self, Diagnostic};
use crate::view::ViewState;

/// What the pointer hit, as resolved by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Empty canvas.
    Canvas,
    /// The body of a node.
    NodeBody(NodeId),
    /// A node's connector handle.
    NodeHandle(NodeId),
}

/// Current pointer gesture.
///
/// Every transition runs to completion synchronously inside one input-event
/// call, so no intermediate state is ever observable from outside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// No gesture in progress.
    Idle,
    /// A node is following the pointer.
    DraggingNode {
        /// The node being dragged.
        node: NodeId,
        /// Canvas-space offset from the node origin to the grab point, so
        /// the node follows the pointer without snapping its corner to it.
        grab_offset: Position,
    },
    /// An edge is being drawn from a node's connector handle.
    DrawingEdge {
        /// Source node of the prospective edge.
        source: NodeId,
        /// Current pointer position in canvas space, for preview rendering.
        pointer: Position,
    },
}

impl Gesture {
    /// Returns whether no gesture is in progress.
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }
}

/// One pipeline-in-edit session.
///
/// Exclusive owner of its [`PipelineGraph`]; discarded on navigation away,
/// replaced wholesale by [`EditorSession::import_definition`].
#[derive(Debug, Clone)]
pub struct EditorSession {
    graph: PipelineGraph,
    view: ViewState,
    catalog: OperationCatalog,
    gesture: Gesture,
    /// Bumped whenever the graph is replaced wholesale. Callers applying
    /// results of async work (catalog fetch, load) should capture the
    /// generation first and drop stale responses.
    generation: u64,
}

impl EditorSession {
    /// Creates a session with an empty graph.
    pub fn new(catalog: OperationCatalog) -> Self {
        Self::with_graph(catalog, PipelineGraph::new())
    }

    /// Creates a session editing an existing graph, as after decompiling a
    /// persisted definition.
    pub fn with_graph(catalog: OperationCatalog, graph: PipelineGraph) -> Self {
        Self {
            graph,
            view: ViewState::new(),
            catalog,
            gesture: Gesture::Idle,
            generation: 0,
        }
    }

    /// Returns the graph.
    pub fn graph(&self) -> &PipelineGraph {
        &self.graph
    }

    /// Returns the graph mutably, for edits outside pointer gestures
    /// (parameter forms, delete buttons).
    pub fn graph_mut(&mut self) -> &mut PipelineGraph {
        &mut self.graph
    }

    /// Returns the view transform.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Returns the view transform mutably. View operations never touch the
    /// graph.
    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    /// Returns the operation catalog.
    pub fn catalog(&self) -> &OperationCatalog {
        &self.catalog
    }

    /// Replaces the catalog, as when the fetch completes after the editor
    /// opened. Leaves the graph untouched.
    pub fn set_catalog(&mut self, catalog: OperationCatalog) {
        self.catalog = catalog;
    }

    /// Returns the current gesture.
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Returns the session generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Places a node for the given operation at a screen position,
    /// initializing parameters from the catalog's declared defaults.
    pub fn add_node(&mut self, operation_id: impl Into<String>, screen: Position) -> NodeId {
        let position = self.view.to_canvas(screen);
        self.graph.add_node(&self.catalog, operation_id, position)
    }

    /// Handles a pointer-down event.
    ///
    /// From `Idle`: a node body starts a drag (capturing the grab offset),
    /// a connector handle starts drawing an edge. Any other press, or a
    /// press mid-gesture, changes nothing.
    pub fn pointer_down(&mut self, target: PointerTarget, screen: Position) {
        if !self.gesture.is_idle() {
            return;
        }
        let pointer = self.view.to_canvas(screen);

        match target {
            PointerTarget::NodeBody(node) => {
                if let Some(hit) = self.graph.node(node) {
                    self.gesture = Gesture::DraggingNode {
                        node,
                        grab_offset: pointer.offset_from(hit.position),
                    };
                }
            }
            PointerTarget::NodeHandle(source) => {
                if self.graph.contains_node(source) {
                    self.gesture = Gesture::DrawingEdge { source, pointer };
                }
            }
            PointerTarget::Canvas => {}
        }
    }

    /// Handles a pointer-move event.
    ///
    /// While dragging, the node position is recomputed from the pointer
    /// minus the grab offset and clamped non-negative on both axes. While
    /// drawing an edge, only the tracked preview point moves.
    pub fn pointer_move(&mut self, screen: Position) {
        let pointer = self.view.to_canvas(screen);

        match self.gesture {
            Gesture::DraggingNode { node, grab_offset } => {
                let position = pointer.offset_from(grab_offset).clamp_non_negative();
                self.graph.move_node(node, position);
            }
            Gesture::DrawingEdge { source, .. } => {
                self.gesture = Gesture::DrawingEdge { source, pointer };
            }
            Gesture::Idle => {}
        }
    }

    /// Handles a pointer-up event. This is the single global resolver for
    /// both gesture kinds: whatever was in progress, the session is `Idle`
    /// afterwards, even when the pointer is released outside any
    /// interactive element.
    ///
    /// A drag simply ends (its positions were applied on the way). An edge
    /// draw commits iff released over a *distinct* node's connector handle;
    /// anywhere else cancels without touching the graph. Returns the
    /// committed edge id, if any.
    pub fn pointer_up(&mut self, target: PointerTarget, _screen: Position) -> Option<EdgeId> {
        let gesture = std::mem::replace(&mut self.gesture, Gesture::Idle);

        match gesture {
            Gesture::DrawingEdge { source, .. } => match target {
                PointerTarget::NodeHandle(node) if node != source => {
                    self.graph.add_edge(source, node)
                }
                _ => None,
            },
            Gesture::DraggingNode { .. } | Gesture::Idle => None,
        }
    }

    /// Validates the graph against the session's catalog.
    pub fn validate(&self) -> Vec<Diagnostic> {
        validate::validate(&self.graph, &self.catalog)
    }

    /// Replaces the graph wholesale with the decompiled form of a raw
    /// definition.
    ///
    /// On parse failure the previous graph, view, and gesture are all
    /// retained and the error is returned for the caller to surface as a
    /// warning.
    pub fn import_definition(&mut self, raw: &str) -> EditorResult<()> {
        let definition = match PipelineDefinition::from_json(raw) {
            Ok(definition) => definition,
            Err(error) => {
                tracing::warn!(
                    target: TRACING_TARGET,
                    %error,
                    "rejected malformed definition import"
                );
                return Err(error);
            }
        };

        tracing::debug!(
            target: TRACING_TARGET,
            steps = definition.len(),
            "importing pipeline definition"
        );

        self.graph = PipelineGraph::from_definition(definition);
        self.gesture = Gesture::Idle;
        self.generation += 1;
        Ok(())
    }

    /// Compiles the graph and serializes it to compact JSON.
    pub fn export_definition(&self) -> EditorResult<String> {
        self.graph.to_definition().to_json()
    }

    /// Compiles the graph and serializes it to pretty JSON, for the manual
    /// copy-paste surface.
    pub fn export_definition_pretty(&self) -> EditorResult<String> {
        self.graph.to_definition().to_json_pretty()
    }
}
