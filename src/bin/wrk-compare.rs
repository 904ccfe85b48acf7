use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wrk_harvest::models::args::CompareArgs;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("wrk_harvest=info".parse()?))
        .init();

    let args = CompareArgs::parse();
    wrk_harvest::run_compare(&args)?;
    Ok(())
}
