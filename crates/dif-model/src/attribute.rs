//! Attributes of the DALIA Interchange Format (DIF).
//!
//! The attribute set is fixed: every record of a DIF table describes one
//! learning resource with the twelve columns listed in [`Attribute::ALL`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a missing value is a hard error or an advisory warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Requirement {
    /// Must be provided for every record.
    Mandatory,
    /// Should be provided; absence is reported as a warning.
    Recommended,
}

impl Requirement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Requirement::Mandatory => "Mandatory",
            Requirement::Recommended => "Recommended",
        }
    }

    pub fn is_mandatory(&self) -> bool {
        matches!(self, Requirement::Mandatory)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named column of a DIF record.
///
/// Column names are matched case-sensitively against the input header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Authors,
    License,
    Link,
    Title,
    Description,
    Community,
    Discipline,
    MediaType,
    ProficiencyLevel,
    PublicationDate,
    FileFormat,
    TargetGroup,
}

impl Attribute {
    /// All attributes in processing (and report column) order.
    pub const ALL: [Attribute; 12] = [
        Attribute::Authors,
        Attribute::License,
        Attribute::Link,
        Attribute::Title,
        Attribute::Description,
        Attribute::Community,
        Attribute::Discipline,
        Attribute::MediaType,
        Attribute::ProficiencyLevel,
        Attribute::PublicationDate,
        Attribute::FileFormat,
        Attribute::TargetGroup,
    ];

    /// Column name as it appears in the input header.
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Authors => "Authors",
            Attribute::License => "License",
            Attribute::Link => "Link",
            Attribute::Title => "Title",
            Attribute::Description => "Description",
            Attribute::Community => "Community",
            Attribute::Discipline => "Discipline",
            Attribute::MediaType => "MediaType",
            Attribute::ProficiencyLevel => "ProficiencyLevel",
            Attribute::PublicationDate => "PublicationDate",
            Attribute::FileFormat => "FileFormat",
            Attribute::TargetGroup => "TargetGroup",
        }
    }

    pub fn requirement(&self) -> Requirement {
        match self {
            Attribute::Authors | Attribute::License | Attribute::Link | Attribute::Title => {
                Requirement::Mandatory
            }
            _ => Requirement::Recommended,
        }
    }

    /// Message reported when the whole column is absent from the input.
    pub fn missing_column_message(&self) -> &'static str {
        match self {
            Attribute::Authors => "The mandatory Attribute 'Authors' is missing from every item!",
            Attribute::License => "The mandatory Attribute 'License' is missing from every item!",
            Attribute::Link => "The mandatory Attribute 'Link' is missing from every item!",
            Attribute::Title => "The mandatory Attribute 'Title' is missing from every item!",
            Attribute::Description => "It is recommended to provide a description for every item!",
            Attribute::Community => {
                "It is recommended to provide information about recommending and supporting communities!"
            }
            Attribute::Discipline => {
                "It is recommended to provide at least one relevant discipline listed in https://skohub.io/dini-ag-kim/hochschulfaechersystematik/heads/master/w3id.org/kim/hochschulfaechersystematik/scheme.html"
            }
            Attribute::MediaType => "It is recommended to provide media types for learning resources.",
            Attribute::ProficiencyLevel => {
                "It is recommended to provide proficiency levels for learning resources."
            }
            Attribute::PublicationDate => {
                "It is recommended to provide publication dates for learning resources."
            }
            Attribute::FileFormat => "It is recommended to provide the file formats of the resources.",
            Attribute::TargetGroup => {
                "It is recommended to provide at least one target group for a learning resource."
            }
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Attribute {
    type Err = String;

    /// Parse an exact (case-sensitive) column name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::ALL
            .iter()
            .copied()
            .find(|attribute| attribute.name() == s)
            .ok_or_else(|| format!("Unknown attribute: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_from_str() {
        assert_eq!("Authors".parse::<Attribute>().unwrap(), Attribute::Authors);
        assert_eq!(
            "ProficiencyLevel".parse::<Attribute>().unwrap(),
            Attribute::ProficiencyLevel
        );
        assert!("authors".parse::<Attribute>().is_err());
    }

    #[test]
    fn test_mandatory_attributes() {
        let mandatory: Vec<_> = Attribute::ALL
            .iter()
            .filter(|attribute| attribute.requirement().is_mandatory())
            .map(Attribute::name)
            .collect();
        assert_eq!(mandatory, vec!["Authors", "License", "Link", "Title"]);
    }

    #[test]
    fn test_missing_link_column_names_link() {
        assert!(Attribute::Link.missing_column_message().contains("'Link'"));
    }
}
