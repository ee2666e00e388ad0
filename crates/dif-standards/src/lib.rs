#![deny(unsafe_code)]

pub mod error;
pub mod loaders;
pub mod paths;
pub mod reference;

pub use crate::error::{Result, StandardsError};
pub use crate::paths::{RESOURCES_ENV_VAR, resources_root};
pub use crate::reference::{
    ReferenceData, ReferenceSummary, load_default_reference_data, load_reference_data,
};
