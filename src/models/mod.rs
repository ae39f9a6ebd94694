//! Domain models and their display counterparts

mod definition;
pub mod display;
mod metadata;
mod target;

pub use definition::{DefinitionDiscoveryResult, DiscoveredDefinition};
pub use display::{DefinitionDisplay, UploadFileDisplay, UploadTargetDisplay};
pub use metadata::ApiDefinitionMetadata;
pub use target::{DefinitionUploadTarget, JobContext, UploadTargetConfig, UploadTargetType};
