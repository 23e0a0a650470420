//! Graph ⇄ definition conversion.

use super::step::{PipelineDefinition, Step};
use crate::graph::{Node, PipelineGraph};
use crate::position::Position;

/// Columns in the synthesized grid layout for steps without a `ui` hint.
pub const GRID_COLUMNS: usize = 3;

/// Horizontal spacing of the synthesized grid, in canvas units.
pub const GRID_SPACING_X: f32 = 250.0;

/// Vertical spacing of the synthesized grid, in canvas units.
pub const GRID_SPACING_Y: f32 = 160.0;

/// Deterministic fallback position for the step at `index`, used when a
/// definition carries no layout hints so re-imported pipelines still render
/// without overlap.
fn grid_position(index: usize) -> Position {
    Position::new(
        (index % GRID_COLUMNS) as f32 * GRID_SPACING_X,
        (index / GRID_COLUMNS) as f32 * GRID_SPACING_Y,
    )
}

impl PipelineGraph {
    /// Compiles the graph into a persisted definition.
    ///
    /// One step per node, in node-insertion order, with parameters copied
    /// (not aliased) so later graph mutation cannot retroactively change an
    /// already-exported definition. Edges are not exported: the engine
    /// consumes a linear list, and for a simple chain the insertion order is
    /// consistent with the edges. Branching or disconnected structure is not
    /// reordered here; the validator flags it instead.
    pub fn to_definition(&self) -> PipelineDefinition {
        PipelineDefinition {
            steps: self
                .nodes()
                .map(|node| Step {
                    id: node.id(),
                    operation_id: node.operation_id().to_owned(),
                    params: node.parameters.clone(),
                    ui: Some(node.position),
                })
                .collect(),
        }
    }

    /// Decompiles a definition into an editable graph.
    ///
    /// Step ids are reused as node ids so re-imports keep stable
    /// identities. Positions come from the `ui` hint when present, else
    /// from a deterministic grid keyed by step index. Edges are synthesized
    /// strictly between consecutive steps, mirroring the linear-order
    /// contract of [`PipelineGraph::to_definition`]. Unknown operation ids
    /// are preserved as-is so a round trip never drops a step, even when
    /// the catalog has changed.
    pub fn from_definition(definition: PipelineDefinition) -> Self {
        let mut graph = PipelineGraph::new();

        let mut previous = None;
        for (index, step) in definition.steps.into_iter().enumerate() {
            let position = step.ui.unwrap_or_else(|| grid_position(index));
            graph.insert_node(Node::with_id(
                step.id,
                step.operation_id,
                position,
                step.params,
            ));

            if let Some(previous) = previous {
                graph.add_edge(previous, step.id);
            }
            previous = Some(step.id);
        }

        graph
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use flowboard_catalog::{OperationCatalog, OperationCategory, OperationDescriptor, ParamValue};
    use uuid::Uuid;

    use super::*;
    use crate::graph::NodeId;

    fn step_id(n: u128) -> NodeId {
        NodeId::from_uuid(Uuid::from_u128(n))
    }

    fn step(n: u128, operation_id: &str, ui: Option<Position>) -> Step {
        Step {
            id: step_id(n),
            operation_id: operation_id.to_owned(),
            params: BTreeMap::from([("key".to_owned(), ParamValue::from("value"))]),
            ui,
        }
    }

    fn catalog() -> OperationCatalog {
        OperationCatalog::from_iter([
            OperationDescriptor::new("load-csv", "Load CSV", OperationCategory::Source),
            OperationDescriptor::new("sort", "Sort", OperationCategory::Transform),
        ])
    }

    #[test]
    fn test_export_follows_insertion_order() {
        let catalog = catalog();
        let mut graph = PipelineGraph::new();
        let a = graph.add_node(&catalog, "load-csv", Position::new(5.0, 6.0));
        let b = graph.add_node(&catalog, "sort", Position::new(7.0, 8.0));
        let c = graph.add_node(&catalog, "sort", Position::ORIGIN);
        graph.remove_node(b);

        let definition = graph.to_definition();
        let ids: Vec<NodeId> = definition.steps.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![a, c]);
        assert_eq!(definition.steps[0].ui, Some(Position::new(5.0, 6.0)));
    }

    #[test]
    fn test_exported_params_are_copies() {
        let catalog = catalog();
        let mut graph = PipelineGraph::new();
        let id = graph.add_node(&catalog, "load-csv", Position::ORIGIN);
        graph.set_parameter(id, "path", "before.csv");

        let definition = graph.to_definition();
        graph.set_parameter(id, "path", "after.csv");

        assert_eq!(
            definition.steps[0].params["path"],
            ParamValue::from("before.csv")
        );
    }

    #[test]
    fn test_decompile_reuses_ids_and_synthesizes_sequential_edges() {
        let definition = PipelineDefinition {
            steps: vec![
                step(1, "load-csv", Some(Position::new(1.0, 2.0))),
                step(2, "sort", None),
                step(3, "publish", None),
            ],
        };

        let graph = PipelineGraph::from_definition(definition);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.edge_between(step_id(1), step_id(2)).is_some());
        assert!(graph.edge_between(step_id(2), step_id(3)).is_some());
        assert!(graph.edge_between(step_id(1), step_id(3)).is_none());
    }

    #[test]
    fn test_decompile_grid_layout_for_missing_hints() {
        let steps = (0..5).map(|n| step(n as u128 + 1, "sort", None)).collect();
        let graph = PipelineGraph::from_definition(PipelineDefinition { steps });

        assert_eq!(graph.node(step_id(1)).unwrap().position, Position::new(0.0, 0.0));
        assert_eq!(
            graph.node(step_id(3)).unwrap().position,
            Position::new(2.0 * GRID_SPACING_X, 0.0)
        );
        // Fourth step wraps to the second row.
        assert_eq!(
            graph.node(step_id(4)).unwrap().position,
            Position::new(0.0, GRID_SPACING_Y)
        );
    }

    #[test]
    fn test_round_trip_preserves_steps() {
        let definition = PipelineDefinition {
            steps: vec![
                step(1, "load-csv", Some(Position::new(12.0, 34.0))),
                step(2, "unknown-op", None),
                step(3, "sort", Some(Position::new(56.0, 78.0))),
            ],
        };

        let round_tripped = PipelineGraph::from_definition(definition.clone()).to_definition();

        assert_eq!(round_tripped.len(), definition.len());
        for (exported, original) in round_tripped.steps.iter().zip(&definition.steps) {
            assert_eq!(exported.id, original.id);
            assert_eq!(exported.operation_id, original.operation_id);
            assert_eq!(exported.params, original.params);
        }
        // Hints present in the input survive unchanged; absent ones are
        // re-derived from the grid.
        assert_eq!(round_tripped.steps[0].ui, definition.steps[0].ui);
        assert_eq!(round_tripped.steps[1].ui, Some(grid_position(1)));
        assert_eq!(round_tripped.steps[2].ui, definition.steps[2].ui);
    }

    #[test]
    fn test_round_trip_empty_definition() {
        let round_tripped =
            PipelineGraph::from_definition(PipelineDefinition::new()).to_definition();
        assert!(round_tripped.is_empty());
    }

    #[test]
    fn test_round_trip_through_json() {
        let definition = PipelineDefinition {
            steps: vec![step(1, "load-csv", None), step(2, "sort", None)],
        };

        let json = definition.to_json().unwrap();
        let graph = PipelineDefinition::from_json(&json).unwrap().into_graph();
        let exported = graph.to_definition();

        assert_eq!(exported.steps[0].id, step_id(1));
        assert_eq!(exported.steps[1].operation_id, "sort");
    }
}
