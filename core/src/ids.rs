//! Identifier threading between the steps of a suite.

use serde_json::Value;

use crate::error::ApiError;
use crate::types::Resource;

/// Holds the id produced by a create step for later update/delete steps.
///
/// Starts empty. Dependent steps call `require`, which fails instead of
/// falling back to some pre-existing record.
#[derive(Debug, Clone)]
pub struct IdSlot {
    resource: Resource,
    id: Option<u64>,
}

impl IdSlot {
    pub fn new(resource: Resource) -> Self {
        Self { resource, id: None }
    }

    /// Stores the integer `id` of a create response and returns it.
    pub fn capture(&mut self, created: &Value) -> Result<u64, ApiError> {
        let id = created
            .get("id")
            .and_then(Value::as_u64)
            .ok_or(ApiError::MissingId)?;
        self.id = Some(id);
        Ok(id)
    }

    pub fn require(&self) -> Result<u64, ApiError> {
        self.id.ok_or(ApiError::IdNotSet {
            resource: self.resource.singular(),
        })
    }

    /// Item path of the captured id, e.g. `albums/101`.
    pub fn item_path(&self) -> Result<String, ApiError> {
        Ok(self.resource.item_path(self.require()?))
    }
}
