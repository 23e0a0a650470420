//! In-memory operation catalog cache.

use std::collections::BTreeMap;
use std::collections::HashMap;

use crate::category::OperationCategory;
use crate::descriptor::OperationDescriptor;
use crate::value::ParamValue;

/// Read-only cache of operation descriptors, built once at editor load.
///
/// Lookup is by operation id. An empty catalog is valid: the editor degrades
/// to an empty palette but keeps rendering already-placed nodes, falling back
/// to raw operation ids for display.
#[derive(Debug, Clone, Default)]
pub struct OperationCatalog {
    operations: HashMap<String, OperationDescriptor>,
}

impl OperationCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the descriptor for an operation id.
    pub fn get(&self, operation_id: &str) -> Option<&OperationDescriptor> {
        self.operations.get(operation_id)
    }

    /// Returns whether the catalog knows the given operation id.
    pub fn contains(&self, operation_id: &str) -> bool {
        self.operations.contains_key(operation_id)
    }

    /// Returns the number of catalogued operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Returns an iterator over all descriptors, in no particular order.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDescriptor> {
        self.operations.values()
    }

    /// Returns the category of an operation, if catalogued.
    pub fn category_of(&self, operation_id: &str) -> Option<OperationCategory> {
        self.get(operation_id).map(|descriptor| descriptor.category)
    }

    /// Returns the display name of an operation, falling back to the raw id
    /// when the catalog cannot resolve it.
    pub fn display_name_of<'a>(&'a self, operation_id: &'a str) -> &'a str {
        self.get(operation_id)
            .map(|descriptor| descriptor.display_name.as_str())
            .unwrap_or(operation_id)
    }

    /// Returns the declared default parameter values for an operation, or an
    /// empty mapping when the operation is unknown.
    pub fn default_params(&self, operation_id: &str) -> BTreeMap<String, ParamValue> {
        self.get(operation_id)
            .map(|descriptor| descriptor.default_params())
            .unwrap_or_default()
    }
}

impl FromIterator<OperationDescriptor> for OperationCatalog {
    /// Builds a catalog from a descriptor list. Later duplicates win.
    fn from_iter<I: IntoIterator<Item = OperationDescriptor>>(iter: I) -> Self {
        Self {
            operations: iter
                .into_iter()
                .map(|descriptor| (descriptor.id.clone(), descriptor))
                .collect(),
        }
    }
}

impl From<Vec<OperationDescriptor>> for OperationCatalog {
    fn from(descriptors: Vec<OperationDescriptor>) -> Self {
        descriptors.into_iter().collect()
    }
}
