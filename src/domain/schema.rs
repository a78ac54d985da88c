//! Target schemas for the two supported list types.
//!
//! Each schema is static data: an ordered list of canonical fields, each with a
//! display label for prompts and the lowercase keywords used by auto-mapping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::PrepError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Canonical identifier, also the output column header.
    pub id: &'static str,
    pub label: &'static str,
    pub keywords: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaDefinition {
    pub fields: &'static [FieldSpec],
}

const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        id: "email",
        label: "Email",
        keywords: &["email"],
    },
    FieldSpec {
        id: "firstname",
        label: "First Name",
        keywords: &["first"],
    },
    FieldSpec {
        id: "lastname",
        label: "Last Name",
        keywords: &["last"],
    },
    FieldSpec {
        id: "jobtitle",
        label: "Job Title",
        keywords: &["title", "position"],
    },
    FieldSpec {
        id: "employeecompany",
        label: "Company",
        keywords: &["company", "biz"],
    },
    FieldSpec {
        id: "country",
        label: "Country",
        keywords: &["country"],
    },
    FieldSpec {
        id: "googleaid",
        label: "Google Ad ID",
        keywords: &["google", "ad id", "gaid"],
    },
];

const COMPANY_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        id: "companyname",
        label: "Company Name",
        keywords: &["company"],
    },
    FieldSpec {
        id: "companywebsite",
        label: "Company Website",
        keywords: &["website", "web"],
    },
    FieldSpec {
        id: "companyemaildomain",
        label: "Email Domain",
        keywords: &["domain"],
    },
    FieldSpec {
        id: "linkedincompanypageurl",
        label: "LinkedIn Page URL",
        keywords: &["linkedin", "page"],
    },
    FieldSpec {
        id: "stocksymbol",
        label: "Stock Symbol",
        keywords: &["stock", "symbol"],
    },
    FieldSpec {
        id: "industry",
        label: "Industry",
        keywords: &["industry"],
    },
    FieldSpec {
        id: "city",
        label: "City",
        keywords: &["city"],
    },
    FieldSpec {
        id: "state",
        label: "State",
        keywords: &["state"],
    },
    FieldSpec {
        id: "companycountry",
        label: "Country",
        keywords: &["country"],
    },
    FieldSpec {
        id: "zipcode",
        label: "Zip Code",
        keywords: &["zip", "postal"],
    },
];

static CONTACT_SCHEMA: SchemaDefinition = SchemaDefinition {
    fields: CONTACT_FIELDS,
};

static COMPANY_SCHEMA: SchemaDefinition = SchemaDefinition {
    fields: COMPANY_FIELDS,
};

impl SchemaDefinition {
    pub fn field_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.id)
    }

    pub fn field(&self, id: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn label(&self, id: &str) -> Option<&'static str> {
        self.field(id).map(|f| f.label)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Contact,
    Company,
}

impl ListType {
    pub const ALL: [ListType; 2] = [ListType::Contact, ListType::Company];

    pub fn schema(self) -> &'static SchemaDefinition {
        match self {
            ListType::Contact => &CONTACT_SCHEMA,
            ListType::Company => &COMPANY_SCHEMA,
        }
    }

    /// Fixed export name; never derived from the input file.
    pub fn output_file_name(self) -> &'static str {
        match self {
            ListType::Contact => "anny-lenny-contact.csv",
            ListType::Company => "anny-lenny-company.csv",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ListType::Contact => "Contact List",
            ListType::Company => "Company List",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ListType::Contact => "contact",
            ListType::Company => "company",
        }
    }
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ListType {
    type Err = PrepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "contact" | "contacts" | "contact list" => Ok(ListType::Contact),
            "company" | "companies" | "company list" => Ok(ListType::Company),
            other => Err(PrepError::InvalidConfigValueError {
                field: "list_type".to_string(),
                value: other.to_string(),
                reason: "Expected 'contact' or 'company'".to_string(),
            }),
        }
    }
}
