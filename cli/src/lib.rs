pub mod args;
pub mod parsing;

pub use args::Args;
pub use parsing::parse_dataset;
