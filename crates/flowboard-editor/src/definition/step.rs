//! Serializable pipeline definition.

use std::collections::BTreeMap;

use flowboard_catalog::ParamValue;
use serde::{Deserialize, Serialize};

use crate::error::EditorResult;
use crate::graph::{NodeId, PipelineGraph};
use crate::position::Position;

/// One entry in a pipeline definition, corresponding to one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Step id; reused as the node id on decompile so re-imports keep
    /// stable identities.
    pub id: NodeId,
    /// Catalog operation this step runs.
    pub operation_id: String,
    /// Parameter values passed to the operation.
    #[serde(default)]
    pub params: BTreeMap<String, ParamValue>,
    /// Optional layout hint; ignored by the engine, used by the editor to
    /// restore visual position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui: Option<Position>,
}

/// Serializable pipeline definition.
///
/// This is the ordered, engine-consumable form of a pipeline. Edges are not
/// stored: execution order is the step order, and the editor re-synthesizes
/// sequential edges on decompile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineDefinition {
    /// Steps in execution order.
    pub steps: Vec<Step>,
}

impl PipelineDefinition {
    /// Creates an empty definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns whether the definition has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Parses a definition from raw JSON.
    ///
    /// Malformed input is an error at this boundary; the caller keeps its
    /// current graph untouched.
    pub fn from_json(raw: &str) -> EditorResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Serializes the definition to compact JSON.
    pub fn to_json(&self) -> EditorResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the definition to pretty-printed JSON, for the raw
    /// export/copy-paste surface.
    pub fn to_json_pretty(&self) -> EditorResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decompiles this definition into an editable graph.
    pub fn into_graph(self) -> PipelineGraph {
        PipelineGraph::from_definition(self)
    }
}

impl From<&PipelineGraph> for PipelineDefinition {
    fn from(graph: &PipelineGraph) -> Self {
        graph.to_definition()
    }
}

impl From<PipelineDefinition> for PipelineGraph {
    fn from(definition: PipelineDefinition) -> Self {
        PipelineGraph::from_definition(definition)
    }
}
