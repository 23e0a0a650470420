//! Static pipeline validation.
//!
//! Validation is advisory: it reads the graph and the catalog, never mutates
//! either, and returns findings as data for the caller to render. The caller
//! decides whether diagnostics block saving or running.

use std::fmt;

use flowboard_catalog::OperationCatalog;
use strum::{AsRefStr, IntoStaticStr};

use crate::graph::{NodeId, PipelineGraph};

/// Machine-readable category of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum DiagnosticCode {
    /// The graph has no steps at all.
    EmptyPipeline,
    /// No step resolves to a SOURCE operation.
    NoSourceStep,
    /// A step references an operation the catalog does not know.
    UnknownOperation,
    /// A required parameter is absent, null, or the empty string.
    MissingParameter,
    /// A parameter value contradicts its declared type.
    TypeMismatch,
    /// A step has more than one incoming or outgoing connection; steps
    /// execute as a linear sequence.
    NotALinearChain,
    /// A step has no connections in a multi-step pipeline.
    DisconnectedStep,
}

/// A non-fatal validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Finding category.
    pub code: DiagnosticCode,
    /// The node this finding concerns, when node-specific.
    pub node_id: Option<NodeId>,
    /// Human-readable description.
    pub message: String,
}

impl Diagnostic {
    fn new(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            code,
            node_id: None,
            message: message.into(),
        }
    }

    fn for_node(code: DiagnosticCode, node_id: NodeId, message: impl Into<String>) -> Self {
        Self {
            code,
            node_id: Some(node_id),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a pipeline graph against the operation catalog.
///
/// Checks run in order and accumulate; nothing short-circuits except the
/// empty-graph case, where there is nothing else to check. An empty result
/// means the pipeline is valid for run purposes.
pub fn validate(graph: &PipelineGraph, catalog: &OperationCatalog) -> Vec<Diagnostic> {
    if graph.is_empty() {
        return vec![Diagnostic::new(
            DiagnosticCode::EmptyPipeline,
            "pipeline has no steps",
        )];
    }

    let mut diagnostics = Vec::new();

    let has_source = graph
        .nodes()
        .any(|node| node.category(catalog).is_some_and(|c| c.is_source()));
    if !has_source {
        diagnostics.push(Diagnostic::new(
            DiagnosticCode::NoSourceStep,
            "pipeline should start with a source operation",
        ));
    }

    for node in graph.nodes() {
        let name = node.display_name(catalog);

        let Some(descriptor) = catalog.get(node.operation_id()) else {
            diagnostics.push(Diagnostic::for_node(
                DiagnosticCode::UnknownOperation,
                node.id(),
                format!("step `{name}` uses unknown operation `{}`", node.operation_id()),
            ));
            continue;
        };

        for (key, spec) in &descriptor.parameters {
            match node.parameter(key) {
                None => {
                    if spec.required {
                        diagnostics.push(Diagnostic::for_node(
                            DiagnosticCode::MissingParameter,
                            node.id(),
                            format!("step `{name}` is missing required parameter `{key}`"),
                        ));
                    }
                }
                Some(value) if value.is_blank() => {
                    if spec.required {
                        diagnostics.push(Diagnostic::for_node(
                            DiagnosticCode::MissingParameter,
                            node.id(),
                            format!("step `{name}` is missing required parameter `{key}`"),
                        ));
                    }
                }
                Some(value) => {
                    if !spec.value_type.matches(value) {
                        diagnostics.push(Diagnostic::for_node(
                            DiagnosticCode::TypeMismatch,
                            node.id(),
                            format!(
                                "parameter `{key}` of step `{name}` should be a {}",
                                spec.value_type
                            ),
                        ));
                    }
                }
            }
        }
    }

    if graph.node_count() > 1 {
        for node in graph.nodes() {
            let name = node.display_name(catalog);
            let incoming = graph.incoming_count(node.id());
            let outgoing = graph.outgoing_count(node.id());

            if incoming > 1 || outgoing > 1 {
                diagnostics.push(Diagnostic::for_node(
                    DiagnosticCode::NotALinearChain,
                    node.id(),
                    format!(
                        "step `{name}` has {incoming} incoming and {outgoing} outgoing \
                         connections; steps run as a linear sequence"
                    ),
                ));
            } else if incoming == 0 && outgoing == 0 {
                diagnostics.push(Diagnostic::for_node(
                    DiagnosticCode::DisconnectedStep,
                    node.id(),
                    format!("step `{name}` is not connected to the rest of the pipeline"),
                ));
            }
        }
    }

    diagnostics
}
