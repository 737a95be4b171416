pub mod config;
pub mod core;
pub mod data;
pub mod domain;
pub mod utils;

pub use crate::config::cli::{ConsoleSink, DirectorySink};
pub use crate::config::{CliConfig, QueryParams};
pub use crate::core::engine::ExerciseEngine;
pub use crate::core::registry::{registry, Exercise};
pub use crate::data::Dataset;
pub use crate::utils::error::{QueryError, Result};
