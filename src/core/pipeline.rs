use crate::core::upload::parse_csv;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{ExportedFile, UploadedTable};
use crate::domain::schema::ListType;
use crate::utils::error::Result;
use std::path::Path;

/// Reads the upload from storage and writes the export back to it.
pub struct CsvPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CsvPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CsvPipeline<S, C> {
    fn list_type(&self) -> ListType {
        self.config.list_type()
    }

    async fn extract(&self) -> Result<UploadedTable> {
        tracing::debug!("Reading upload from: {}", self.config.input_path());
        let data = self.storage.read_file(self.config.input_path()).await?;
        tracing::debug!("Read {} bytes", data.len());

        let table = parse_csv(&data)?;
        tracing::info!(
            "Loaded {} rows with columns: {}",
            table.row_count(),
            table.headers.join(", ")
        );
        Ok(table)
    }

    async fn load(&self, file: ExportedFile) -> Result<String> {
        let output_path = Path::new(self.config.output_path()).join(file.file_name);
        let output_path = output_path.to_string_lossy().into_owned();

        tracing::debug!(
            "Writing {} ({} bytes) to storage",
            file.file_name,
            file.bytes.len()
        );
        self.storage.write_file(&output_path, &file.bytes).await?;

        Ok(output_path)
    }
}
