use anyhow::Result;
use listprep::{
    AcceptProposal, CsvPipeline, ListType, LocalStorage, MappingFile, MappingOverrides, PrepConfig,
    PrepEngine,
};
use tempfile::TempDir;

/// A confirmed mapping saved once applies to the next upload with the same columns.
#[tokio::test]
async fn test_saved_mapping_reused_for_next_upload() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path();
    let out = dir.to_str().unwrap();

    let first_input = dir.join("march.csv");
    std::fs::write(&first_input, "Mail,Given,Family,Org\na@x.io,Ann,Lee,Initech\n")?;

    let overrides = MappingOverrides::new()
        .map("email", "Mail")
        .map("firstname", "Given")
        .map("lastname", "Family")
        .map("employeecompany", "Org");
    let config = PrepConfig::new(ListType::Contact, first_input.to_str().unwrap(), out);
    let engine = PrepEngine::new(CsvPipeline::new(LocalStorage::default(), config), AcceptProposal)
        .with_overrides(overrides);
    let report = engine.run().await?;

    let mapping_path = dir.join("contacts.toml");
    MappingFile::from_mapping(ListType::Contact, &report.mapping).save(&mapping_path)?;

    let saved = MappingFile::from_file(&mapping_path)?;
    assert_eq!(saved.list_type, Some(ListType::Contact));
    assert_eq!(saved.columns.get("email").map(String::as_str), Some("Mail"));
    assert!(saved.unmapped.contains(&"googleaid".to_string()));

    let second_input = dir.join("april.csv");
    std::fs::write(&second_input, "Mail,Given,Family,Org\nb@y.io,Bo,Kim,Hooli\n")?;
    let config = PrepConfig::new(ListType::Contact, second_input.to_str().unwrap(), out);
    let engine = PrepEngine::new(CsvPipeline::new(LocalStorage::default(), config), AcceptProposal)
        .with_overrides(MappingOverrides::from_mapping_file(&saved));
    engine.run().await?;

    let content = std::fs::read_to_string(dir.join("anny-lenny-contact.csv"))?;
    assert_eq!(
        content,
        "email,firstname,lastname,jobtitle,employeecompany,country,googleaid\nb@y.io,Bo,Kim,,Hooli,,\n"
    );
    Ok(())
}

#[tokio::test]
async fn test_mapping_file_with_unknown_field_fails_run() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path();
    let input = dir.join("list.csv");
    std::fs::write(&input, "Company\nAcme\n")?;

    let file = MappingFile::from_toml_str("[columns]\nemployeecompany = \"Company\"\n")?;
    let config = PrepConfig::new(ListType::Company, input.to_str().unwrap(), dir.to_str().unwrap());
    let engine = PrepEngine::new(CsvPipeline::new(LocalStorage::default(), config), AcceptProposal)
        .with_overrides(MappingOverrides::from_mapping_file(&file));

    assert!(engine.run().await.is_err());
    Ok(())
}
