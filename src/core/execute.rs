use tracing::{info, warn};
use crate::core::csv_sink::CsvSink;
use crate::core::parse_wrk_output::parse_wrk_output;
use crate::core::plan_request::{build_url, plan_invocation};
use crate::core::run_wrk::run_wrk;
use crate::core::script_guard::ScriptGuard;
use crate::core::show_result_with_table::show_result_with_table;
use crate::models::bench_config::BenchConfig;
use crate::models::result::RunSummary;
use crate::models::run_options::RunOptions;

/// 按配置顺序逐个接口压测，一次只跑一个wrk
pub async fn run_suite(config: &BenchConfig, options: &RunOptions) -> anyhow::Result<RunSummary> {
    // 脚本的生命周期和本次运行一致
    let script = ScriptGuard::new(&options.script_path)?;
    let sink = CsvSink::new(&options.out_dir, &options.prefix, options.layout);
    let layout = sink.layout();
    let base_url = config.server.base_url();
    let mut summary = RunSummary::default();

    // 共享文件在循环前写表头
    if layout.is_shared() {
        let path = sink.path_for("", "");
        sink.create(&path)?;
        summary.record_file(path);
    }

    for endpoint in &config.endpoints {
        let method = endpoint.method();
        let csv_path = sink.path_for(&endpoint.path, &method);
        if !layout.is_shared() {
            sink.create(&csv_path)?;
            summary.record_file(csv_path.clone());
        }

        let url = build_url(&base_url, endpoint);
        let invocation = plan_invocation(&options.wrk, endpoint, &url, &options.wrk_options, script.path());
        if let Some(ref request_script) = invocation.script {
            script.write(request_script)?;
        }

        let output = run_wrk(&invocation, &method, options.show_progress).await;
        let metrics = parse_wrk_output(&output, layout.throughput_form());
        summary.endpoints_run += 1;

        if sink.append(&csv_path, &endpoint.path, &method, &metrics)? {
            summary.rows_written += 1;
            if options.show_table {
                show_result_with_table(&endpoint.path, &method, &metrics);
            }
        } else {
            warn!(endpoint = %endpoint.path, method = %method, "no metrics found in wrk output, row skipped");
            summary.skipped.push((endpoint.path.clone(), method));
        }
    }

    drop(script);
    info!(
        endpoints = summary.endpoints_run,
        rows = summary.rows_written,
        skipped = summary.skipped.len(),
        "benchmark run finished"
    );
    Ok(summary)
}
