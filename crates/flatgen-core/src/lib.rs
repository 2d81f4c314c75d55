//! Core contracts shared by the flatgen crates.
//!
//! This crate defines the file formats, control flags and record kinds that
//! the generator, the request layer and the CLI agree on.

pub mod error;
pub mod flags;
pub mod format;
pub mod record;

pub use error::{Error, Result};
pub use flags::{ControlFlags, LoadType, MAX_FILE_VALIDATION_CODE, RecordCounts};
pub use format::{FileFormat, NameSource};
pub use record::{RecordKind, Topology};
