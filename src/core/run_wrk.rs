use std::process::Stdio;
use std::time::Duration;
use indicatif::ProgressBar;
use tokio::process::Command;
use tracing::{debug, warn};
use crate::models::wrk_invocation::WrkInvocation;

/// 运行wrk并返回标准输出。启动失败或非0退出只记录警告，输出照常交给解析
pub async fn run_wrk(invocation: &WrkInvocation, method: &str, show_progress: bool) -> String {
    println!("Benchmarking {} {}...", method, invocation.url);

    let bar = if show_progress {
        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_message(format!("等待wrk完成: {}", invocation.url));
        Some(bar)
    } else {
        None
    };

    let output = Command::new(&invocation.program)
        .args(&invocation.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output()
        .await;

    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    let stdout = match output {
        Ok(output) => {
            let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
            let stderr = String::from_utf8_lossy(&output.stderr);
            if !output.status.success() {
                warn!(
                    program = %invocation.program,
                    url = %invocation.url,
                    status = %output.status,
                    stderr = %stderr.trim(),
                    "wrk exited unsuccessfully"
                );
            } else if !stderr.trim().is_empty() {
                debug!(url = %invocation.url, stderr = %stderr.trim(), "wrk stderr");
            }
            stdout
        }
        Err(e) => {
            warn!(program = %invocation.program, url = %invocation.url, error = %e, "failed to start wrk");
            String::new()
        }
    };
    println!("{}", stdout);
    stdout
}
