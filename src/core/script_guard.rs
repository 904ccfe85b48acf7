use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use anyhow::Context;
use tracing::{debug, warn};
use crate::models::wrk_invocation::RequestScript;

/// 管理整个压测过程中共用的lua请求脚本，Drop时删除
pub(crate) struct ScriptGuard {
    path: PathBuf,
}

impl ScriptGuard {
    /// 清理上一次异常退出遗留的脚本
    pub(crate) fn new(path: &Path) -> anyhow::Result<Self> {
        remove_if_exists(path).with_context(|| format!("删除遗留脚本失败: {}", path.display()))?;
        Ok(ScriptGuard { path: path.to_path_buf() })
    }

    /// 每次都整体覆盖，不追加；只写自己管理的那个文件
    pub(crate) fn write(&self, script: &RequestScript) -> anyhow::Result<()> {
        if script.path != self.path {
            warn!(planned = %script.path.display(), script = %self.path.display(), "request script path differs from guarded path");
        }
        fs::write(&self.path, script.content.as_bytes())
            .with_context(|| format!("写入请求脚本失败: {}", self.path.display()))?;
        debug!(script = %self.path.display(), "request script written");
        Ok(())
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScriptGuard {
    fn drop(&mut self) {
        if let Err(e) = remove_if_exists(&self.path) {
            warn!(script = %self.path.display(), error = %e, "failed to remove request script");
        }
    }
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_script_removed_and_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post_request.lua");
        fs::write(&path, "wrk.method = \"PUT\"\nwrk.body = 'a much longer stale body'\n").unwrap();

        let guard = ScriptGuard::new(&path).unwrap();
        assert!(!path.exists());

        let first = RequestScript { path: path.clone(), content: "wrk.method = \"POST\"\nwrk.body = '{\"a\":1}'\n".to_string() };
        guard.write(&first).unwrap();
        let second = RequestScript { path: path.clone(), content: "wrk.method = \"DELETE\"\n".to_string() };
        guard.write(&second).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "wrk.method = \"DELETE\"\n");

        drop(guard);
        assert!(!path.exists());
    }

    #[test]
    fn test_drop_without_script_is_quiet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post_request.lua");
        let guard = ScriptGuard::new(&path).unwrap();
        assert_eq!(guard.path(), path.as_path());
        drop(guard);
        assert!(!path.exists());
    }

    #[test]
    fn test_write_goes_to_guarded_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post_request.lua");
        let elsewhere = dir.path().join("other.lua");
        let guard = ScriptGuard::new(&path).unwrap();

        let script = RequestScript { path: elsewhere.clone(), content: "wrk.method = \"PUT\"\n".to_string() };
        guard.write(&script).unwrap();
        assert!(!elsewhere.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "wrk.method = \"PUT\"\n");

        drop(guard);
        assert!(!path.exists());
    }
}
