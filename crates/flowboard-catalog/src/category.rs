//! Operation category enum.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};

/// Category of a catalog operation, describing its role in a pipeline.
///
/// The wire format uses the upper-case names published by the catalog
/// service (`"SOURCE"`, `"TRANSFORM"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString, IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationCategory {
    /// Loads data into the pipeline (entry point).
    Source,
    /// Transforms data already in the pipeline.
    Transform,
    /// Builds a data cube from tabular input.
    Cube,
    /// Validates data against constraints.
    Validation,
    /// Publishes pipeline results (exit point).
    Output,
}

impl OperationCategory {
    /// Returns whether this is a source operation.
    pub const fn is_source(&self) -> bool {
        matches!(self, OperationCategory::Source)
    }

    /// Returns whether this is an output operation.
    pub const fn is_output(&self) -> bool {
        matches!(self, OperationCategory::Output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_names() {
        let json = serde_json::to_string(&OperationCategory::Source).unwrap();
        assert_eq!(json, "\"SOURCE\"");

        let parsed: OperationCategory = serde_json::from_str("\"VALIDATION\"").unwrap();
        assert_eq!(parsed, OperationCategory::Validation);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(OperationCategory::Transform.to_string(), "TRANSFORM");
        assert_eq!(OperationCategory::Cube.as_ref(), "CUBE");
    }

    #[test]
    fn test_category_predicates() {
        assert!(OperationCategory::Source.is_source());
        assert!(!OperationCategory::Output.is_source());
        assert!(OperationCategory::Output.is_output());
    }
}
