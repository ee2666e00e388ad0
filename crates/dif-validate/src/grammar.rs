//! Format grammars of the DIF attributes.
//!
//! Each grammar is a named predicate over a single item (or a whole cell for
//! attributes whose grammar spans the `*` delimiter).

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// Closed set of media types.
pub const MEDIA_TYPES: &[&str] = &[
    "audio",
    "video",
    "text",
    "presentation",
    "code",
    "image",
    "multipart",
];

/// Closed set of proficiency levels.
pub const PROFICIENCY_LEVELS: &[&str] = &[
    "novice",
    "advanced beginner",
    "competent",
    "proficient",
    "expert",
];

/// `Lastname, Firstname` with optional `: {annotation}` suffixes.
static PERSON_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w'.-]+(?: [\w'.-]+)*,\s[\w'.-]+(?: [\w'.-]+)*(?:\s?:\s?\{[^{}]*\})*$")
        .expect("Invalid person name regex")
});

/// `Name : {organization...}` with optional further `: {annotation}` suffixes.
static ORGANIZATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\S.*?\s:\s\{organization[^{}]*\}(?:\s?:\s?\{[^{}]*\})*$")
        .expect("Invalid organization regex")
});

static LINK_CELL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://\S+(?:\s\*\shttps://\S+)*$").expect("Invalid link regex")
});

static COMMUNITY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\S.*\s\((?:RS|SR|S|R)\)$").expect("Invalid community regex")
});

static COMMUNITY_SUFFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s\(\S*\)").expect("Invalid community suffix regex"));

static DISCIPLINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://w3id\.org/kim/hochschulfaechersystematik/n\d+$")
        .expect("Invalid discipline regex")
});

/// `YYYY`, `YYYY-MM` or `YYYY-MM-DD` with month and day ranges.
static PUBLICATION_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}(?:-(?:0[1-9]|1[0-2])(?:-(?:0[1-9]|[12]\d|3[01]))?)?$")
        .expect("Invalid publication date regex")
});

static FILE_FORMAT_CELL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\.\w+(?:\s\*\s\.\w+)*$").expect("Invalid file format regex")
});

/// A target group: words, optionally followed by a parenthesized qualifier.
const TARGET_GROUP_ITEM: &str = r"\w+(?:[ -]\w+)*(?: \(\w+(?:[ -]\w+)*\))?";

static TARGET_GROUP_CELL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^{TARGET_GROUP_ITEM}(?:\s\*\s{TARGET_GROUP_ITEM})*$"
    ))
    .expect("Invalid target group regex")
});

/// A single author: a person, an organization, or the literal `n/a`.
pub fn is_valid_author_item(item: &str) -> bool {
    item == "n/a" || PERSON_REGEX.is_match(item) || ORGANIZATION_REGEX.is_match(item)
}

/// One or more `https://` links joined by ` * `.
pub fn is_valid_link_cell(cell: &str) -> bool {
    LINK_CELL_REGEX.is_match(cell)
}

/// A community with its role suffix, e.g. `NFDI4Chem (S)`.
pub fn is_valid_community_item(item: &str) -> bool {
    COMMUNITY_REGEX.is_match(item)
}

/// Community name with any parenthesized suffix removed.
pub fn community_name(item: &str) -> Cow<'_, str> {
    COMMUNITY_SUFFIX_REGEX.replace_all(item, "")
}

pub fn is_valid_discipline_uri(item: &str) -> bool {
    DISCIPLINE_REGEX.is_match(item)
}

pub fn is_valid_media_type(item: &str) -> bool {
    MEDIA_TYPES.contains(&item)
}

pub fn is_valid_proficiency_level(item: &str) -> bool {
    PROFICIENCY_LEVELS.contains(&item)
}

/// Full dates must also exist on the calendar.
pub fn is_valid_publication_date(cell: &str) -> bool {
    if !PUBLICATION_DATE_REGEX.is_match(cell) {
        return false;
    }
    if cell.len() == 10 {
        return NaiveDate::parse_from_str(cell, "%Y-%m-%d").is_ok();
    }
    true
}

/// One or more `.ext` file extensions joined by ` * `.
pub fn is_valid_file_format_cell(cell: &str) -> bool {
    FILE_FORMAT_CELL_REGEX.is_match(cell)
}

pub fn is_valid_target_group_cell(cell: &str) -> bool {
    TARGET_GROUP_CELL_REGEX.is_match(cell)
}
