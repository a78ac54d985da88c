use crate::core::{ColumnMapping, MappingReviewer};
use crate::domain::schema::SchemaDefinition;
use crate::utils::error::Result;

/// Confirms the proposal unchanged. Used with `--yes` and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptProposal;

impl MappingReviewer for AcceptProposal {
    fn review(
        &self,
        proposal: &ColumnMapping,
        _columns: &[String],
        _schema: &SchemaDefinition,
    ) -> Result<ColumnMapping> {
        tracing::debug!("Accepting proposed mapping without review");
        Ok(proposal.clone())
    }
}

#[cfg(feature = "cli")]
pub use prompt::PromptReviewer;

#[cfg(feature = "cli")]
mod prompt {
    use super::*;
    use crate::adapters::preview::mapping_table;
    use dialoguer::{theme::ColorfulTheme, Confirm, Select};

    const NONE_CHOICE: &str = "(none)";

    /// One selection prompt per field, then a confirmation. Declining the
    /// confirmation goes round again starting from the current choices.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct PromptReviewer;

    impl MappingReviewer for PromptReviewer {
        fn review(
            &self,
            proposal: &ColumnMapping,
            columns: &[String],
            schema: &SchemaDefinition,
        ) -> Result<ColumnMapping> {
            let theme = ColorfulTheme::default();
            let mut items = Vec::with_capacity(columns.len() + 1);
            items.push(NONE_CHOICE.to_string());
            items.extend(columns.iter().cloned());

            let mut mapping = proposal.clone();
            println!("The columns below were matched automatically where possible. Confirm or adjust each one:");

            loop {
                for field in schema.fields {
                    let default = default_choice(&mapping, field.id, columns);
                    let choice = Select::with_theme(&theme)
                        .with_prompt(format!("Map '{}' to:", field.label))
                        .items(&items)
                        .default(default)
                        .interact()?;

                    mapping.set(field.id, choice_source(choice, columns))?;
                }

                println!("{}", mapping_table(schema, &mapping));
                let confirmed = Confirm::with_theme(&theme)
                    .with_prompt("Process CSV?")
                    .default(true)
                    .interact()?;
                if confirmed {
                    return Ok(mapping);
                }
                tracing::debug!("Mapping not confirmed, reviewing again");
            }
        }
    }

    // Item 0 is "(none)", columns start at 1.
    fn default_choice(mapping: &ColumnMapping, field: &str, columns: &[String]) -> usize {
        mapping
            .source_for(field)
            .and_then(|current| columns.iter().position(|c| c == current))
            .map_or(0, |idx| idx + 1)
    }

    fn choice_source(choice: usize, columns: &[String]) -> Option<String> {
        choice
            .checked_sub(1)
            .and_then(|idx| columns.get(idx))
            .cloned()
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::automap::propose_mapping;
    use crate::domain::schema::ListType;

    #[test]
    fn test_accept_returns_proposal() {
        let columns = vec!["Email".to_string(), "Nation".to_string()];
        let schema = ListType::Contact.schema();
        let proposal = propose_mapping(&columns, schema);

        let reviewed = AcceptProposal.review(&proposal, &columns, schema).unwrap();
        assert_eq!(reviewed, proposal);
        assert_eq!(reviewed.source_for("country"), None);
    }
}
