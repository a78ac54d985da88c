use crate::domain::model::{ColumnMapping, ExportedFile, UploadedTable};
use crate::domain::schema::{ListType, SchemaDefinition};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn list_type(&self) -> ListType;
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
}

/// I/O stages around a session: reading the upload and writing the export.
#[async_trait]
pub trait Pipeline: Send + Sync {
    fn list_type(&self) -> ListType;
    async fn extract(&self) -> Result<UploadedTable>;
    async fn load(&self, file: ExportedFile) -> Result<String>;
}

/// Lets a user confirm or adjust a proposed mapping.
///
/// Implementations return only once the user has confirmed; the returned
/// mapping must keep the proposal's key set.
pub trait MappingReviewer {
    fn review(
        &self,
        proposal: &ColumnMapping,
        columns: &[String],
        schema: &SchemaDefinition,
    ) -> Result<ColumnMapping>;
}
