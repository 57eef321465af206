pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::job::MergeJob;
pub use domain::model::{MergedSequence, RecordSequence};
pub use domain::ports::DelaySource;
pub use utils::delay::{FixedDelay, UniformJitter};
pub use utils::error::{JobError, Result};
