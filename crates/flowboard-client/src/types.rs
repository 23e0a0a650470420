//! Wire types for the pipeline persistence and run APIs.

use std::collections::HashMap;
use std::str::FromStr;

use derive_builder::Builder;
use derive_more::{Debug, Display, From, Into};
use flowboard_editor::definition::PipelineDefinition;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a stored pipeline.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Debug, Display, From, Into)]
#[debug("{_0}")]
#[display("{_0}")]
#[serde(transparent)]
pub struct PipelineId(Uuid);

impl PipelineId {
    /// Creates a pipeline ID from an existing UUID.
    #[inline]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[inline]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl FromStr for PipelineId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::from_str(s)?))
    }
}

/// Encoding of the `definition` field of a stored pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display)]
pub enum DefinitionFormat {
    /// JSON-encoded [`PipelineDefinition`].
    #[default]
    #[serde(rename = "JSON")]
    #[display("JSON")]
    Json,
}

/// Body of a pipeline create/update request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(
    name = "PipelineDraftBuilder",
    pattern = "owned",
    setter(into, strip_option, prefix = "with")
)]
pub struct PipelineDraft {
    /// Pipeline name.
    pub name: String,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub description: Option<String>,
    /// JSON-encoded [`PipelineDefinition`].
    pub definition: String,
    /// Encoding of `definition`.
    #[builder(default)]
    pub definition_format: DefinitionFormat,
    /// Tags for organization.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub tags: Vec<String>,
}

impl PipelineDraft {
    /// Returns a builder for creating a draft.
    pub fn builder() -> PipelineDraftBuilder {
        PipelineDraftBuilder::default()
    }

    /// Creates a draft by encoding the given definition.
    pub fn from_definition(
        name: impl Into<String>,
        definition: &PipelineDefinition,
    ) -> crate::Result<Self> {
        Ok(Self {
            name: name.into(),
            description: None,
            definition: serde_json::to_string(definition)?,
            definition_format: DefinitionFormat::Json,
            tags: Vec::new(),
        })
    }
}

/// A stored pipeline, as returned by the persistence API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRecord {
    /// Assigned pipeline id.
    pub id: PipelineId,
    /// Pipeline name.
    pub name: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON-encoded [`PipelineDefinition`].
    pub definition: String,
    /// Encoding of `definition`.
    #[serde(default)]
    pub definition_format: DefinitionFormat,
    /// Tags for organization.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// Last update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl PipelineRecord {
    /// Decodes the stored definition for the editor to decompile.
    pub fn decode_definition(&self) -> crate::Result<PipelineDefinition> {
        Ok(serde_json::from_str(&self.definition)?)
    }
}

/// Body of a run request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunRequest {
    /// Runtime variables passed to the job engine.
    #[serde(default)]
    pub variables: HashMap<String, String>,
}

/// Response of a run request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReceipt {
    /// Id of the job the engine started.
    pub job_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_wire_shape() {
        let draft = PipelineDraft::builder()
            .with_name("Sales cube")
            .with_definition("{\"steps\":[]}")
            .with_tags(vec!["sales".to_owned()])
            .build()
            .unwrap();

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["name"], "Sales cube");
        assert_eq!(json["definitionFormat"], "JSON");
        assert_eq!(json["tags"][0], "sales");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_draft_from_definition_round_trips() {
        let definition = PipelineDefinition::new();
        let draft = PipelineDraft::from_definition("Empty", &definition).unwrap();
        assert_eq!(draft.definition, "{\"steps\":[]}");
    }

    #[test]
    fn test_record_decodes_definition() {
        let record = PipelineRecord {
            id: PipelineId::from_uuid(Uuid::from_u128(1)),
            name: "P".to_owned(),
            description: None,
            definition: "{\"steps\":[]}".to_owned(),
            definition_format: DefinitionFormat::Json,
            tags: Vec::new(),
            created_at: None,
            updated_at: None,
        };
        assert!(record.decode_definition().unwrap().is_empty());

        let broken = PipelineRecord {
            definition: "{\"steps\":".to_owned(),
            ..record
        };
        assert!(broken.decode_definition().is_err());
    }

    #[test]
    fn test_record_parses_server_shape() {
        let raw = format!(
            r#"{{
                "id": "{}",
                "name": "Sales cube",
                "definition": "{{\"steps\":[]}}",
                "definitionFormat": "JSON",
                "tags": ["sales"],
                "createdAt": "2026-08-01T10:00:00Z"
            }}"#,
            Uuid::from_u128(9)
        );
        let record: PipelineRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(record.name, "Sales cube");
        assert!(record.created_at.is_some());
        assert!(record.updated_at.is_none());
    }

    #[test]
    fn test_run_receipt_wire_shape() {
        let receipt: RunReceipt = serde_json::from_str(r#"{"jobId":"job-42"}"#).unwrap();
        assert_eq!(receipt.job_id, "job-42");
    }
}
