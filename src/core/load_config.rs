use std::path::Path;
use anyhow::Context;
use tracing::info;
use crate::core::check_endpoints::check_endpoints;
use crate::models::bench_config::BenchConfig;

pub fn load_bench_config(path: &Path) -> anyhow::Result<BenchConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("读取配置文件失败: {}", path.display()))?;
    let config = parse_bench_config(&raw)
        .with_context(|| format!("解析配置文件失败: {}", path.display()))?;
    info!(
        config = %path.display(),
        base_url = %config.server.base_url(),
        endpoints = config.endpoints.len(),
        "loaded bench config"
    );
    Ok(config)
}

pub fn parse_bench_config(raw: &str) -> anyhow::Result<BenchConfig> {
    let config: BenchConfig = serde_json::from_str(raw)?;
    check_endpoints(&config.endpoints)?;
    Ok(config)
}
