pub mod job;
pub mod merge;
pub mod reader;
pub mod writer;

pub use crate::domain::model::{MergedSequence, RecordSequence};
pub use crate::domain::ports::DelaySource;
pub use crate::utils::error::Result;
