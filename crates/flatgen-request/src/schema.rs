use schemars::schema::RootSchema;
use schemars::schema_for;

use crate::model::GenerationRequest;

/// Emit the JSON Schema for batch request documents.
pub fn request_json_schema() -> RootSchema {
    schema_for!(GenerationRequest)
}

/// Same schema as a JSON value, ready for `validate_request_json`.
pub fn request_json_schema_value() -> crate::Result<serde_json::Value> {
    Ok(serde_json::to_value(request_json_schema())?)
}
