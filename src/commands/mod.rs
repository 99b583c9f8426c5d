//! Command handlers for the generator.

pub mod generate;

pub use generate::{generate, handle_generate_command, write_document, GenerateSettings};
