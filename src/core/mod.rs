pub(crate) mod check_endpoints;
pub mod compare;
pub mod csv_sink;
pub mod execute;
pub mod load_config;
pub mod parse_wrk_output;
pub mod plan_request;
pub mod plot_comparison;
pub mod read_results;
pub mod run_wrk;
pub(crate) mod script_guard;
pub mod show_result_with_table;
