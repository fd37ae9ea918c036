// Shared type definitions
// Each submodule defines types used across the crate.

pub mod errors;
pub mod history;
pub mod settings;
