//! Rule evaluation engine for DALIA Interchange Format (DIF) records.
//!
//! For every row and attribute the engine decides whether the cell is
//! missing, malformed, or not in the relevant picklist, and records a
//! diagnostic tagged with the source line.
//!
//! - [`split`]: multi-value cell decomposition
//! - [`grammar`]: per-attribute format predicates
//! - [`rules`]: the attribute rule table
//! - [`checker`]: evaluation of the rule table over a record set

pub mod checker;
pub mod grammar;
pub mod rules;
pub mod split;

pub use checker::{RecordChecker, ValidationConfig, validate_records};
pub use rules::{AttributeRule, CellCheck, Picklist, rule_for, rules};
pub use split::{is_multi_value, split_multi_value};
