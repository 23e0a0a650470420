//! Pipeline graph runtime representation.

use std::collections::HashMap;

use flowboard_catalog::{OperationCatalog, ParamValue};
use petgraph::Direction;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};

use super::edge::Edge;
use super::id::{EdgeId, NodeId};
use super::node::Node;
use crate::position::Position;

/// The aggregate of all nodes and edges for one pipeline-in-edit session.
///
/// Internally uses petgraph's `StableDiGraph` so node and edge indices
/// survive removals. An explicit insertion-order list is kept alongside
/// because the exported step order is node-insertion order, which the
/// underlying storage does not guarantee once slots are reused.
///
/// The graph owns its collections exclusively. Expected interaction
/// conditions (duplicate edge, self-loop, unknown id) are silent no-ops,
/// never errors; a revision counter is bumped on every effective mutation so
/// a rendering layer can poll for changes.
#[derive(Debug, Clone, Default)]
pub struct PipelineGraph {
    graph: StableDiGraph<Node, Edge>,
    node_indices: HashMap<NodeId, NodeIndex>,
    /// Node ids in insertion order; drives the compiler's step order.
    order: Vec<NodeId>,
    revision: u64,
}

impl PipelineGraph {
    /// Creates a new empty pipeline graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Returns the revision counter, incremented on every effective
    /// mutation. No-ops leave it unchanged.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Places a new node for the given operation.
    ///
    /// Parameters are initialized from the catalog's declared defaults
    /// (empty when the operation is unknown). If the graph already has
    /// nodes, an edge is auto-created from the most recently added node to
    /// the new one, so a freshly built pipeline is linear without the user
    /// drawing every connection.
    pub fn add_node(
        &mut self,
        catalog: &OperationCatalog,
        operation_id: impl Into<String>,
        position: Position,
    ) -> NodeId {
        let operation_id = operation_id.into();
        let mut node = Node::new(operation_id.as_str(), position);
        node.parameters = catalog.default_params(&operation_id);

        let id = node.id();
        let previous = self.order.last().copied();

        let index = self.graph.add_node(node);
        self.node_indices.insert(id, index);
        self.order.push(id);

        if let Some(previous) = previous {
            self.create_edge(previous, id);
        }

        self.revision += 1;
        id
    }

    /// Inserts a node as-is, reusing its id.
    ///
    /// This is the decompiler's entry point: no auto-chaining, no catalog
    /// consultation. A node with the same id is replaced in place, keeping
    /// its insertion-order slot.
    pub fn insert_node(&mut self, node: Node) {
        let id = node.id();
        match self.node_indices.get(&id) {
            Some(&index) => {
                self.graph[index] = node;
            }
            None => {
                let index = self.graph.add_node(node);
                self.node_indices.insert(id, index);
                self.order.push(id);
            }
        }
        self.revision += 1;
    }

    /// Removes a node, cascading removal of every edge touching it.
    ///
    /// Unknown ids are a no-op returning `None`.
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        let index = self.node_indices.remove(&id)?;
        self.order.retain(|other| *other != id);
        // remove_node drops the connected petgraph edges with it
        let node = self.graph.remove_node(index);
        self.revision += 1;
        node
    }

    /// Overwrites a node's position. No bounds validation is applied.
    ///
    /// Returns whether the node existed.
    pub fn move_node(&mut self, id: NodeId, position: Position) -> bool {
        let Some(&index) = self.node_indices.get(&id) else {
            return false;
        };
        self.graph[index].position = position;
        self.revision += 1;
        true
    }

    /// Overwrites one parameter value on a node.
    ///
    /// Any value is accepted; conformance with the declared type is the
    /// validator's job. Returns whether the node existed.
    pub fn set_parameter(
        &mut self,
        id: NodeId,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> bool {
        let Some(&index) = self.node_indices.get(&id) else {
            return false;
        };
        self.graph[index].parameters.insert(key.into(), value.into());
        self.revision += 1;
        true
    }

    /// Connects two nodes.
    ///
    /// No-op returning `None` when the edge would be a self-loop, when an
    /// identical `(source, target)` edge already exists, or when either
    /// endpoint is not a current node.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> Option<EdgeId> {
        let id = self.create_edge(source, target)?;
        self.revision += 1;
        Some(id)
    }

    /// Removes an edge by id. Unknown ids are a no-op returning `None`.
    pub fn remove_edge(&mut self, id: EdgeId) -> Option<Edge> {
        let index = self
            .graph
            .edge_indices()
            .find(|&index| self.graph.edge_weight(index).is_some_and(|e| e.id() == id))?;
        let edge = self.graph.remove_edge(index);
        self.revision += 1;
        edge
    }

    /// Returns a reference to a node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        let index = self.node_indices.get(&id)?;
        self.graph.node_weight(*index)
    }

    /// Returns whether a node exists.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.node_indices.contains_key(&id)
    }

    /// Returns an iterator over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.order.iter().filter_map(|id| self.node(*id))
    }

    /// Returns an iterator over all node ids in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.order.iter().copied()
    }

    /// Returns an iterator over all edges.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.graph
            .edge_indices()
            .filter_map(|index| self.graph.edge_weight(index))
    }

    /// Returns an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges().find(|edge| edge.id() == id)
    }

    /// Returns the id of the edge between two nodes, if present.
    pub fn edge_between(&self, source: NodeId, target: NodeId) -> Option<EdgeId> {
        let from = *self.node_indices.get(&source)?;
        let to = *self.node_indices.get(&target)?;
        self.graph
            .find_edge(from, to)
            .and_then(|index| self.graph.edge_weight(index))
            .map(|edge| edge.id())
    }

    /// Returns the number of edges targeting a node.
    pub fn incoming_count(&self, id: NodeId) -> usize {
        self.directed_count(id, Direction::Incoming)
    }

    /// Returns the number of edges originating from a node.
    pub fn outgoing_count(&self, id: NodeId) -> usize {
        self.directed_count(id, Direction::Outgoing)
    }

    fn directed_count(&self, id: NodeId, direction: Direction) -> usize {
        self.node_indices
            .get(&id)
            .map(|&index| self.graph.edges_directed(index, direction).count())
            .unwrap_or(0)
    }

    fn create_edge(&mut self, source: NodeId, target: NodeId) -> Option<EdgeId> {
        if source == target {
            return None;
        }
        let from = *self.node_indices.get(&source)?;
        let to = *self.node_indices.get(&target)?;
        if self.graph.find_edge(from, to).is_some() {
            return None;
        }

        let edge = Edge::new(source, target);
        let id = edge.id();
        self.graph.add_edge(from, to, edge);
        Some(id)
    }
}
