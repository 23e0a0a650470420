//! Node type.

use std::collections::BTreeMap;

use flowboard_catalog::{OperationCatalog, OperationCategory, ParamValue};

use super::id::NodeId;
use crate::position::Position;

/// One placed operation instance on the canvas.
///
/// The operation id is fixed at creation; changing a node's operation type
/// means deleting it and placing a new one. Category and display name are
/// not stored, they are resolved through the catalog on demand, falling back
/// to the raw operation id when the catalog cannot resolve it (such a node
/// still renders but fails validation).
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    operation_id: String,
    /// Position in canvas coordinates.
    pub position: Position,
    /// Current parameter values, keyed by parameter name.
    pub parameters: BTreeMap<String, ParamValue>,
}

impl Node {
    /// Creates a node with a fresh id and no parameters.
    pub fn new(operation_id: impl Into<String>, position: Position) -> Self {
        Self::with_id(NodeId::new(), operation_id, position, BTreeMap::new())
    }

    /// Creates a node reusing an existing id, as when decompiling a
    /// persisted definition.
    pub fn with_id(
        id: NodeId,
        operation_id: impl Into<String>,
        position: Position,
        parameters: BTreeMap<String, ParamValue>,
    ) -> Self {
        Self {
            id,
            operation_id: operation_id.into(),
            position,
            parameters,
        }
    }

    /// Returns the node id.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the referenced operation id.
    pub fn operation_id(&self) -> &str {
        &self.operation_id
    }

    /// Resolves the node's category through the catalog.
    pub fn category(&self, catalog: &OperationCatalog) -> Option<OperationCategory> {
        catalog.category_of(&self.operation_id)
    }

    /// Resolves the node's display name through the catalog, falling back to
    /// the raw operation id.
    pub fn display_name<'a>(&'a self, catalog: &'a OperationCatalog) -> &'a str {
        catalog.display_name_of(&self.operation_id)
    }

    /// Returns the current value of one parameter.
    pub fn parameter(&self, key: &str) -> Option<&ParamValue> {
        self.parameters.get(key)
    }
}
