use std::path::PathBuf;
use crate::models::args::BenchArgs;
use crate::models::csv_layout::CsvLayout;
use crate::models::wrk_options::WrkOptions;

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub wrk: String,
    pub wrk_options: WrkOptions,
    pub layout: CsvLayout,
    pub prefix: String,
    pub out_dir: PathBuf,
    pub script_path: PathBuf,
    pub show_progress: bool,
    pub show_table: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            wrk: "wrk".to_string(),
            wrk_options: WrkOptions::default(),
            layout: CsvLayout::Shared,
            prefix: "benchmark_results".to_string(),
            out_dir: PathBuf::from("."),
            script_path: PathBuf::from("post_request.lua"),
            show_progress: true,
            show_table: true,
        }
    }
}

impl From<&BenchArgs> for RunOptions {
    fn from(args: &BenchArgs) -> Self {
        RunOptions {
            wrk: args.wrk.clone(),
            wrk_options: args.wrk_options(),
            layout: args.layout,
            prefix: args.prefix.clone(),
            out_dir: args.out_dir.clone(),
            script_path: args.script.clone(),
            show_progress: !args.quiet,
            show_table: !args.quiet,
        }
    }
}
