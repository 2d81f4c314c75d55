//! Hierarchical flat-file record encoder for flatgen.
//!
//! Each format is a declarative layout (field tables plus a topology). The
//! engine computes every row up front, then writes the header, the numbered
//! body and the trailer as three pipe-delimited appends.

pub mod codesets;
pub mod engine;
pub mod errors;
pub mod layout;
pub mod model;
pub mod naming;
pub mod output;
pub mod policy;
pub mod provider;
pub mod schema;
pub mod sequencer;
pub mod state;
pub mod topology;
pub mod value;
pub mod verify;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{GenerateOptions, GenerationReport, RunRequest};
pub use state::RunState;
pub use verify::{VerificationReport, VerifyIssue, verify_file};
