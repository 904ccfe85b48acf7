use std::path::PathBuf;
use clap::{Parser, ValueEnum};
use crate::models::csv_layout::CsvLayout;
use crate::models::wrk_options::WrkOptions;

#[derive(Parser, Debug)]
#[command(version, about = "按配置逐个接口运行wrk并把结果写入csv", long_about = None)]
pub struct BenchArgs {
    /// 配置文件
    #[arg(long, default_value = "config.json")]
    pub config: PathBuf,

    /// 结果文件前缀
    #[arg(long, default_value = "benchmark_results")]
    pub prefix: String,

    /// csv布局
    #[arg(long, value_enum, default_value_t = CsvLayout::Shared)]
    pub layout: CsvLayout,

    /// 结果输出目录
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// wrk线程数
    #[arg(short, long, default_value_t = 8)]
    pub threads: u32,

    /// wrk连接数
    #[arg(short, long, default_value_t = 100)]
    pub connections: u32,

    /// 每个接口的持续时间
    #[arg(short, long, default_value = "10s")]
    pub duration: String,

    /// 不打印延迟分布
    #[arg(long, default_value_t = false)]
    pub no_latency: bool,

    /// wrk可执行文件
    #[arg(long, default_value = "wrk")]
    pub wrk: String,

    /// 请求脚本路径
    #[arg(long, default_value = "post_request.lua")]
    pub script: PathBuf,

    /// 不显示进度和结果表
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

impl BenchArgs {
    pub fn wrk_options(&self) -> WrkOptions {
        WrkOptions {
            threads: self.threads,
            connections: self.connections,
            duration: self.duration.clone(),
            latency: !self.no_latency,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputKind {
    /// 每个指标一张jpg
    Image,
    /// 每个指标一份合并后的csv
    Csv,
}

#[derive(Parser, Debug)]
#[command(version, about = "对比两份压测结果csv并按指标出图", long_about = None)]
pub struct CompareArgs {
    /// 第一份结果
    #[arg(long, default_value = "../benchmark/dotnet-results.csv")]
    pub left: PathBuf,

    /// 第一份结果的框架名
    #[arg(long, default_value = ".NET")]
    pub left_label: String,

    /// 第二份结果
    #[arg(long, default_value = "../benchmark/express-results.csv")]
    pub right: PathBuf,

    /// 第二份结果的框架名
    #[arg(long, default_value = "Express.js")]
    pub right_label: String,

    /// 输出形式
    #[arg(long, value_enum, default_value_t = OutputKind::Image)]
    pub output: OutputKind,

    /// 输出目录
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// 绘图用的ttf字体，不指定时在常见系统路径里查找
    #[arg(long)]
    pub font: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bench_args_defaults() {
        let args = BenchArgs::parse_from(["wrk-harvest"]);
        assert_eq!(args.config, PathBuf::from("config.json"));
        assert_eq!(args.layout, CsvLayout::Shared);
        assert_eq!(args.wrk_options(), WrkOptions::default());
    }

    #[test]
    fn test_bench_args_variant_flags() {
        let args = BenchArgs::parse_from([
            "wrk-harvest", "-t1", "-c10", "--no-latency", "--layout", "per-endpoint",
        ]);
        assert_eq!(args.layout, CsvLayout::PerEndpoint);
        assert_eq!(args.wrk_options().to_args(), vec!["-t1", "-c10", "-d10s"]);
    }

    #[test]
    fn test_compare_args_defaults() {
        let args = CompareArgs::parse_from(["wrk-compare"]);
        assert_eq!(args.left_label, ".NET");
        assert_eq!(args.right_label, "Express.js");
        assert_eq!(args.output, OutputKind::Image);
        assert!(args.font.is_none());
    }
}
