use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wrk_harvest::core::show_result_with_table::show_summary_with_table;
use wrk_harvest::models::args::BenchArgs;
use wrk_harvest::models::run_options::RunOptions;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("wrk_harvest=info".parse()?))
        .init();

    let args = BenchArgs::parse();
    let config = wrk_harvest::load_bench_config(&args.config)?;
    let options = RunOptions::from(&args);
    let summary = wrk_harvest::run_suite(&config, &options).await?;
    if !args.quiet {
        show_summary_with_table(&summary);
    }
    Ok(())
}
