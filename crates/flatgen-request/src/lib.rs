//! Batch request contracts and validation for flatgen.

pub mod errors;
pub mod model;
pub mod schema;
pub mod validate;

pub use errors::{IssueSeverity, RequestError, Result, ValidationIssue, ValidationReport};
pub use model::{GenerationRequest, RunSpec};
pub use schema::{request_json_schema, request_json_schema_value};
pub use validate::{ValidatedRequest, validate_request, validate_request_document, validate_request_json};
