//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod completions;
pub mod config;
pub mod generate;
pub mod search;
pub mod variants;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use generate::GenerateArgs;
pub use search::SearchArgs;
pub use variants::VariantsArgs;
