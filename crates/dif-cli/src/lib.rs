//! CLI library components for the DIF validator.

pub mod logging;
pub mod pipeline;
