pub mod commands;
pub mod update;

pub use commands::{Cli, IndexSummary, generate_indexes, run};
