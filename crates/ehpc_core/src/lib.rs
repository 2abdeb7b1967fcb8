pub mod contracts;
pub mod domain;
pub mod error;

pub use domain::{JobDescriptor, JobId, JobState, ParserConfig};
pub use error::{TranslateError, UnitError};
