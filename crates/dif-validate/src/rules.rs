//! The rule table: one descriptor per attribute.
//!
//! Every attribute shares the same evaluation skeleton (empty cell yields a
//! "missing" finding and nothing else); what differs is captured by the
//! [`CellCheck`] of its [`AttributeRule`].

use dif_model::{Attribute, DiagnosticKind, Level};
use dif_standards::ReferenceData;
use std::collections::BTreeSet;

use crate::grammar::{
    is_valid_author_item, is_valid_discipline_uri, is_valid_file_format_cell,
    is_valid_link_cell, is_valid_media_type, is_valid_proficiency_level,
    is_valid_publication_date, is_valid_target_group_cell,
};

/// Predicate over an item or a whole cell.
pub type Grammar = fn(&str) -> bool;

/// Externally supplied picklists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Picklist {
    Licenses,
    Communities,
    FileFormats,
    TargetGroups,
}

impl Picklist {
    pub fn values<'a>(&self, reference: &'a ReferenceData) -> &'a BTreeSet<String> {
        match self {
            Picklist::Licenses => &reference.licenses,
            Picklist::Communities => &reference.communities,
            Picklist::FileFormats => &reference.file_formats,
            Picklist::TargetGroups => &reference.target_groups,
        }
    }
}

/// A finding a check may raise for a non-empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    pub kind: DiagnosticKind,
    pub level: Level,
    pub message: &'static str,
}

impl Finding {
    const fn malformed(message: &'static str) -> Self {
        Self {
            kind: DiagnosticKind::Malformed,
            level: Level::Error,
            message,
        }
    }

    const fn unlisted(message: &'static str) -> Self {
        Self {
            kind: DiagnosticKind::Unlisted,
            level: Level::Error,
            message,
        }
    }

    const fn advisory(message: &'static str) -> Self {
        Self {
            kind: DiagnosticKind::Unlisted,
            level: Level::Warning,
            message,
        }
    }
}

/// How a non-empty cell is checked.
#[derive(Debug, Clone, Copy)]
pub enum CellCheck {
    /// Presence is the only requirement.
    Presence,
    /// The whole cell must satisfy the grammar.
    Cell { grammar: Grammar, finding: Finding },
    /// Every split item must satisfy the grammar; raised once per cell.
    EachItem { grammar: Grammar, finding: Finding },
    /// The whole cell must be an entry of the picklist.
    Listed { picklist: Picklist, finding: Finding },
    /// Every split item is checked against the grammar and, independently,
    /// its suffix-stripped name against the community picklist.
    Community { malformed: Finding, unlisted: Finding },
    /// The whole cell must satisfy the grammar; only then must every split
    /// item be an entry of the picklist.
    FormatThenListed {
        grammar: Grammar,
        malformed: Finding,
        picklist: Picklist,
        unlisted: Finding,
    },
}

/// Validation descriptor for one attribute.
#[derive(Debug, Clone, Copy)]
pub struct AttributeRule {
    pub attribute: Attribute,
    /// Message for an empty cell.
    pub missing: &'static str,
    pub check: CellCheck,
}

impl AttributeRule {
    pub fn missing_kind(&self) -> DiagnosticKind {
        if self.attribute.requirement().is_mandatory() {
            DiagnosticKind::MandatoryMissing
        } else {
            DiagnosticKind::RecommendedMissing
        }
    }

    pub fn missing_level(&self) -> Level {
        if self.attribute.requirement().is_mandatory() {
            Level::Error
        } else {
            Level::Warning
        }
    }
}

static RULES: [AttributeRule; 12] = [
    AttributeRule {
        attribute: Attribute::Authors,
        missing: "Mandatory attribute 'Author' is missing.",
        check: CellCheck::EachItem {
            grammar: is_valid_author_item,
            finding: Finding::malformed("Wrong name format."),
        },
    },
    AttributeRule {
        attribute: Attribute::License,
        missing: "License is missing.",
        check: CellCheck::Listed {
            picklist: Picklist::Licenses,
            finding: Finding::unlisted(
                "Provided License is not part of the list from 'https://spdx.org/licenses/' or is in a wrong format.",
            ),
        },
    },
    AttributeRule {
        attribute: Attribute::Link,
        missing: "Link is missing.",
        check: CellCheck::Cell {
            grammar: is_valid_link_cell,
            finding: Finding::malformed("Link is not in a valid format."),
        },
    },
    AttributeRule {
        attribute: Attribute::Title,
        missing: "Title is missing.",
        check: CellCheck::Presence,
    },
    AttributeRule {
        attribute: Attribute::Description,
        missing: "It is recommended to provide a description for a resource.",
        check: CellCheck::Presence,
    },
    AttributeRule {
        attribute: Attribute::Community,
        missing: "It is recommended to provide a Community, either as supporting or recommending entity.",
        check: CellCheck::Community {
            malformed: Finding::malformed("The provided format for the community contains errors."),
            unlisted: Finding::advisory(
                "The provided name does not match any name from the subsidiaries list. Please check if the name is correct. If it is you can ignore this warning.",
            ),
        },
    },
    AttributeRule {
        attribute: Attribute::Discipline,
        missing: "It is recommended to provide at least one relevant discipline as a link listed in https://skohub.io/dini-ag-kim/hochschulfaechersystematik/heads/master/w3id.org/kim/hochschulfaechersystematik/scheme.html .",
        check: CellCheck::EachItem {
            grammar: is_valid_discipline_uri,
            finding: Finding::malformed("The provided format is not of the type xsd:anyURI."),
        },
    },
    AttributeRule {
        attribute: Attribute::MediaType,
        missing: "It is recommended to provide a media type for learning resources.",
        check: CellCheck::EachItem {
            grammar: is_valid_media_type,
            finding: Finding::unlisted("The provided media type is not in the DIF picklist."),
        },
    },
    AttributeRule {
        attribute: Attribute::ProficiencyLevel,
        missing: "It is recommended to provide at least one proficiency level for learning resources.",
        check: CellCheck::EachItem {
            grammar: is_valid_proficiency_level,
            finding: Finding::unlisted(
                "The provided proficiency level is not in the DIF picklist.",
            ),
        },
    },
    AttributeRule {
        attribute: Attribute::PublicationDate,
        missing: "It is recommended to provide a publication date for learning resources.",
        check: CellCheck::Cell {
            grammar: is_valid_publication_date,
            finding: Finding::malformed(
                "The provided publication date is not of the format xsd:date.",
            ),
        },
    },
    AttributeRule {
        attribute: Attribute::FileFormat,
        missing: "It is recommended to provide the file format of a learning resource.",
        check: CellCheck::FormatThenListed {
            grammar: is_valid_file_format_cell,
            malformed: Finding::malformed("The provided file format is not formatted properly."),
            picklist: Picklist::FileFormats,
            unlisted: Finding::unlisted(
                "The provided file format is not included in the picklist.",
            ),
        },
    },
    AttributeRule {
        attribute: Attribute::TargetGroup,
        missing: "It is recommended to provide at least one target group for a learning resource.",
        check: CellCheck::FormatThenListed {
            grammar: is_valid_target_group_cell,
            malformed: Finding::malformed(
                "The provided target groups are not formatted properly.",
            ),
            picklist: Picklist::TargetGroups,
            unlisted: Finding::unlisted(
                "The provided target group is not included in the picklist.",
            ),
        },
    },
];

/// All rules in processing order.
pub fn rules() -> &'static [AttributeRule] {
    &RULES
}

pub fn rule_for(attribute: Attribute) -> &'static AttributeRule {
    // RULES is indexed in `Attribute::ALL` order.
    &RULES[attribute as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_table_follows_attribute_order() {
        let attributes: Vec<Attribute> = rules().iter().map(|rule| rule.attribute).collect();
        assert_eq!(attributes, Attribute::ALL.to_vec());
        for attribute in Attribute::ALL {
            assert_eq!(rule_for(attribute).attribute, attribute);
        }
    }

    #[test]
    fn missing_severity_follows_requirement() {
        assert_eq!(
            rule_for(Attribute::Title).missing_kind(),
            DiagnosticKind::MandatoryMissing
        );
        assert_eq!(rule_for(Attribute::Title).missing_level(), Level::Error);
        assert_eq!(
            rule_for(Attribute::TargetGroup).missing_kind(),
            DiagnosticKind::RecommendedMissing
        );
        assert_eq!(
            rule_for(Attribute::TargetGroup).missing_level(),
            Level::Warning
        );
    }
}
