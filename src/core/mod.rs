pub mod automap;
pub mod engine;
pub mod overrides;
pub mod pipeline;
pub mod reshape;
pub mod session;
pub mod upload;

pub use crate::domain::model::{ColumnMapping, OutputTable, UploadedTable};
pub use crate::domain::ports::{ConfigProvider, MappingReviewer, Pipeline, Storage};
pub use crate::utils::error::Result;
