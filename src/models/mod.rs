pub mod args;
pub mod bench_config;
pub mod csv_layout;
pub mod endpoint_spec;
pub mod result;
pub mod run_metrics;
pub mod run_options;
pub mod server_config;
pub mod wrk_invocation;
pub mod wrk_options;
