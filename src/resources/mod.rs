pub mod cli;
pub mod config;

pub use cli::*;
pub use config::*;
