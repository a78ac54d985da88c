pub mod mapping_file;

use crate::core::ConfigProvider;
use crate::domain::schema::ListType;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};

/// Settings for one run, after merging the command line and the mapping file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepConfig {
    pub list_type: ListType,
    pub input_path: String,
    pub output_path: String,
}

impl PrepConfig {
    pub fn new(list_type: ListType, input_path: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            list_type,
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }
}

impl ConfigProvider for PrepConfig {
    fn list_type(&self) -> ListType {
        self.list_type
    }

    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for PrepConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input_path)?;
        validate_file_extension("input", &self.input_path, &["csv"])?;
        validate_path("output_dir", &self.output_path)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use super::*;
    use crate::config::mapping_file::MappingFile;
    use crate::core::overrides::MappingOverrides;
    use crate::utils::validation::validate_required_field;
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "listprep")]
    #[command(about = "Prepare a contact or company CSV for LinkedIn Ads matched audiences")]
    pub struct CliConfig {
        /// CSV file to convert
        pub input: String,

        /// List type: contact or company. May come from --mapping-file instead.
        #[arg(short, long)]
        pub list_type: Option<ListType>,

        /// Directory the exported file is written to
        #[arg(short, long, default_value = ".")]
        pub output_dir: String,

        /// Map one field to a column, e.g. --map jobtitle=Position
        #[arg(short, long, value_name = "FIELD=COLUMN")]
        pub map: Vec<String>,

        /// Leave one field unmapped
        #[arg(long, value_name = "FIELD")]
        pub unmap: Vec<String>,

        /// TOML file with saved column choices
        #[arg(long)]
        pub mapping_file: Option<String>,

        /// Write the confirmed mapping to this TOML file
        #[arg(long)]
        pub save_mapping: Option<String>,

        /// Accept the proposed mapping without prompting
        #[arg(short, long)]
        pub yes: bool,

        /// Print the proposed mapping as JSON and exit
        #[arg(long)]
        pub dry_run: bool,

        /// Rows of the input shown before mapping
        #[arg(long, default_value = "5")]
        pub preview_rows: usize,

        /// Emit logs as JSON lines
        #[arg(long)]
        pub log_json: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        pub fn load_mapping_file(&self) -> Result<Option<MappingFile>> {
            match &self.mapping_file {
                Some(path) => {
                    validate_path("mapping_file", path)?;
                    tracing::info!("📁 Loading mapping file: {}", path);
                    MappingFile::from_file(path).map(Some)
                }
                None => Ok(None),
            }
        }

        /// The list type comes from the command line, else from the mapping
        /// file; when both are given they must agree.
        pub fn resolve(&self, mapping_file: Option<&MappingFile>) -> Result<PrepConfig> {
            let list_type = self.list_type.or_else(|| mapping_file.and_then(|f| f.list_type));
            let list_type = *validate_required_field("list_type", &list_type)?;
            if let Some(file) = mapping_file {
                file.check_list_type(list_type)?;
            }

            let config = PrepConfig::new(list_type, self.input.clone(), self.output_dir.clone());
            config.validate()?;
            Ok(config)
        }

        /// Mapping-file entries first, command-line entries last so they win.
        pub fn overrides(&self, mapping_file: Option<&MappingFile>) -> Result<MappingOverrides> {
            let from_file = mapping_file
                .map(MappingOverrides::from_mapping_file)
                .unwrap_or_default();
            let from_args = MappingOverrides::from_args(&self.map, &self.unmap)?;
            Ok(from_file.then(from_args))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::utils::error::PrepError;

        fn parse(args: &[&str]) -> CliConfig {
            CliConfig::try_parse_from(std::iter::once("listprep").chain(args.iter().copied())).unwrap()
        }

        #[test]
        fn test_parse_defaults() {
            let config = parse(&["leads.csv", "--list-type", "contact"]);
            assert_eq!(config.list_type, Some(ListType::Contact));
            assert_eq!(config.output_dir, ".");
            assert_eq!(config.preview_rows, 5);
            assert!(!config.yes);
        }

        #[test]
        fn test_invalid_list_type_rejected_by_parser() {
            let result = CliConfig::try_parse_from(["listprep", "leads.csv", "-l", "vendors"]);
            assert!(result.is_err());
        }

        #[test]
        fn test_resolve_requires_list_type() {
            let config = parse(&["leads.csv"]);
            assert!(matches!(
                config.resolve(None),
                Err(PrepError::MissingConfigError { .. })
            ));

            let file = MappingFile {
                list_type: Some(ListType::Company),
                ..Default::default()
            };
            assert_eq!(config.resolve(Some(&file)).unwrap().list_type, ListType::Company);
        }

        #[test]
        fn test_resolve_rejects_conflicting_list_type() {
            let config = parse(&["leads.csv", "-l", "contact"]);
            let file = MappingFile {
                list_type: Some(ListType::Company),
                ..Default::default()
            };
            assert!(matches!(
                config.resolve(Some(&file)),
                Err(PrepError::ConfigError { .. })
            ));
        }

        #[test]
        fn test_resolve_rejects_non_csv_input() {
            let config = parse(&["leads.xlsx", "-l", "company"]);
            assert!(config.resolve(None).is_err());
        }

        #[test]
        fn test_repeated_overrides() {
            let config = parse(&[
                "leads.csv",
                "-l",
                "contact",
                "-m",
                "jobtitle=Role",
                "--map",
                "country=Nation",
                "--unmap",
                "googleaid",
            ]);
            assert_eq!(config.overrides(None).unwrap().len(), 3);
        }
    }
}
