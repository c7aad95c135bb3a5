//! CLI command implementations

pub mod generate;
pub mod json_output;
pub mod preview;
pub mod template;
pub mod validate;
