//! Platform-neutral logic: aggregation, chart options, formatting, config.
//! Nothing in here renders.

pub mod aggregate;
pub mod config;
pub mod format;
pub mod options;
