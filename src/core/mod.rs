pub mod batch;
pub mod formatter;
pub mod input;
pub mod matcher;
pub mod report;

pub use crate::utils::error::Result;
