pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use adapters::review::PromptReviewer;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::adapters::{review::AcceptProposal, storage::LocalStorage};
pub use config::{mapping_file::MappingFile, PrepConfig};
pub use crate::core::{engine::PrepEngine, overrides::MappingOverrides, pipeline::CsvPipeline, session::Session};
pub use domain::schema::ListType;
pub use utils::error::{PrepError, Result};
