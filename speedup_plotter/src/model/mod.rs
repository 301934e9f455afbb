//!
//! The benchmark data model.
//!

pub mod benchmark;
pub mod error;
pub mod result_series;
pub mod run;
pub mod speedup_series;
