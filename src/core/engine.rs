use crate::core::overrides::MappingOverrides;
use crate::core::session::Session;
use crate::core::{MappingReviewer, Pipeline};
use crate::domain::model::ColumnMapping;
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct RunReport {
    pub output_path: String,
    pub mapping: ColumnMapping,
    pub rows: usize,
}

/// Drives one session: upload, proposal, review, export.
pub struct PrepEngine<P: Pipeline, R: MappingReviewer> {
    pipeline: P,
    reviewer: R,
    overrides: MappingOverrides,
}

impl<P: Pipeline, R: MappingReviewer> PrepEngine<P, R> {
    pub fn new(pipeline: P, reviewer: R) -> Self {
        Self {
            pipeline,
            reviewer,
            overrides: MappingOverrides::default(),
        }
    }

    pub fn with_overrides(mut self, overrides: MappingOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Reads the upload and returns a session holding the proposed mapping,
    /// with configured overrides already applied.
    pub async fn start(&self) -> Result<Session> {
        let mut session = Session::new(self.pipeline.list_type());
        tracing::info!("Preparing {}", session.list_type());

        let table = self.pipeline.extract().await?;
        session.upload(table);
        session.propose()?;

        if !self.overrides.is_empty() {
            tracing::info!("Applying {} configured overrides", self.overrides.len());
            self.overrides.apply(&mut session)?;
        }

        Ok(session)
    }

    /// Reviews, confirms and exports a session returned by [`start`](Self::start).
    pub async fn finish(&self, mut session: Session) -> Result<RunReport> {
        let reviewed = match (session.mapping(), session.table()) {
            (Some(proposal), Some(table)) => {
                Some(self.reviewer.review(proposal, &table.headers, session.schema())?)
            }
            _ => None,
        };
        if let Some(mapping) = reviewed {
            session.replace_mapping(mapping)?;
        }

        let mapping = session.confirm()?.clone();
        for (field, column) in mapping.iter() {
            match column {
                Some(column) => tracing::debug!("{} <- '{}'", field, column),
                None => tracing::debug!("{} left empty", field),
            }
        }

        let rows = session.table().map(|t| t.row_count()).unwrap_or_default();
        let file = session.export()?;
        let output_path = self.pipeline.load(file).await?;
        tracing::info!("Exported {} rows to {}", rows, output_path);

        Ok(RunReport {
            output_path,
            mapping,
            rows,
        })
    }

    pub async fn run(&self) -> Result<RunReport> {
        let session = self.start().await?;
        self.finish(session).await
    }
}
