//! Descriptive statistics for simulation outcome series.

pub mod descriptive;
pub mod series;

pub use descriptive::{percentile, summarize, Summary};
pub use series::{cumulative_mean, wins_by_block};
