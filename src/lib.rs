pub mod models;
pub mod core;

pub use crate::core::compare::run_compare;
pub use crate::core::execute::run_suite;
pub use crate::core::load_config::load_bench_config;
