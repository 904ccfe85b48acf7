use std::path::PathBuf;

/// 需要写入磁盘的lua请求脚本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestScript {
    pub path: PathBuf,
    pub content: String,
}

/// 一次wrk调用的完整计划
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrkInvocation {
    pub program: String,
    pub args: Vec<String>,
    pub url: String,
    pub script: Option<RequestScript>,
}
