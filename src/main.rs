use clap::Parser;
use listprep::adapters::preview::upload_preview;
use listprep::core::{MappingReviewer, Pipeline};
use listprep::utils::logger;
use listprep::{
    AcceptProposal, CliConfig, CsvPipeline, ListType, LocalStorage, MappingFile, PrepEngine,
    PromptReviewer, Result,
};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting listprep");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config).await {
        tracing::error!(
            "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(e.severity().exit_code());
    }
}

async fn run(config: &CliConfig) -> Result<()> {
    let mapping_file = config.load_mapping_file()?;
    let prep_config = config.resolve(mapping_file.as_ref())?;
    let overrides = config.overrides(mapping_file.as_ref())?;
    let list_type = prep_config.list_type;

    let pipeline = CsvPipeline::new(LocalStorage::default(), prep_config);

    if config.yes {
        let engine = PrepEngine::new(pipeline, AcceptProposal).with_overrides(overrides);
        run_engine(&engine, config, list_type).await
    } else {
        let engine = PrepEngine::new(pipeline, PromptReviewer).with_overrides(overrides);
        run_engine(&engine, config, list_type).await
    }
}

async fn run_engine<P: Pipeline, R: MappingReviewer>(
    engine: &PrepEngine<P, R>,
    config: &CliConfig,
    list_type: ListType,
) -> Result<()> {
    let session = engine.start().await?;

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        if let Some(mapping) = session.mapping() {
            println!("{}", serde_json::to_string_pretty(mapping)?);
        }
        return Ok(());
    }

    if config.preview_rows > 0 {
        if let Some(table) = session.table() {
            println!("Uploaded CSV Preview:");
            println!("{}", upload_preview(table, config.preview_rows));
        }
    }

    let report = engine.finish(session).await?;

    if let Some(path) = &config.save_mapping {
        MappingFile::from_mapping(list_type, &report.mapping).save(path)?;
        tracing::info!("💾 Mapping saved to: {}", path);
    }

    println!(
        "✅ {} prepared: {} rows, {} of {} fields mapped",
        list_type,
        report.rows,
        report.mapping.mapped_count(),
        report.mapping.len()
    );
    println!("📁 Output saved to: {}", report.output_path);
    Ok(())
}
