mod error;
mod loader;
mod parse;
#[cfg(test)]
mod tests;
pub mod types;
pub mod validation;

pub use error::ConfigError;
pub use loader::load_pipeline;
pub use parse::parse_pipeline;
pub use types::PipelineConfig;
