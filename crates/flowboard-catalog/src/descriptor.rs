//! Operation descriptor types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::OperationCategory;
use crate::value::{ParamValue, ValueType};

/// Schema for a single operation parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSpec {
    /// Human-readable parameter name.
    pub display_name: String,
    /// What the parameter controls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Declared value type, checked by the validator.
    pub value_type: ValueType,
    /// Whether the parameter must be set before the pipeline can run.
    #[serde(default)]
    pub required: bool,
    /// Value applied to freshly placed nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<ParamValue>,
}

impl ParameterSpec {
    /// Creates a required parameter spec with the given type.
    pub fn required(display_name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            display_name: display_name.into(),
            description: None,
            value_type,
            required: true,
            default_value: None,
        }
    }

    /// Creates an optional parameter spec with the given type.
    pub fn optional(display_name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            display_name: display_name.into(),
            description: None,
            value_type,
            required: false,
            default_value: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn with_default(mut self, value: impl Into<ParamValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

/// A catalog operation: one unit of work the job engine knows how to run.
///
/// Descriptors are supplied by the external catalog service and are immutable
/// for the editor session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDescriptor {
    /// Stable operation identifier referenced by pipeline steps.
    pub id: String,
    /// Human-readable operation name.
    pub display_name: String,
    /// Role of the operation in a pipeline.
    pub category: OperationCategory,
    /// Parameter schema, keyed by parameter name.
    #[serde(default)]
    pub parameters: BTreeMap<String, ParameterSpec>,
}

impl OperationDescriptor {
    /// Creates a descriptor with no parameters.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        category: OperationCategory,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            category,
            parameters: BTreeMap::new(),
        }
    }

    /// Adds a parameter to the schema.
    #[must_use]
    pub fn with_parameter(mut self, key: impl Into<String>, spec: ParameterSpec) -> Self {
        self.parameters.insert(key.into(), spec);
        self
    }

    /// Returns the default parameter values declared by this descriptor.
    pub fn default_params(&self) -> BTreeMap<String, ParamValue> {
        self.parameters
            .iter()
            .filter_map(|(key, spec)| {
                spec.default_value
                    .clone()
                    .map(|value| (key.clone(), value))
            })
            .collect()
    }
}
