//! 子进程执行

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

/// 用 bash 运行脚本，继承标准流，阻塞直到结束
pub fn run_script(script: &Path, args: &[OsString], envs: &[(String, String)]) -> Result<i32> {
    let status = Command::new("bash")
        .arg(script)
        .args(args)
        .envs(envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("Failed to run {}. Is 'bash' installed and in PATH?", script.display()))?;

    Ok(exit_code_of(status))
}

/// 子进程退出码；被信号终止时为 1
pub fn exit_code_of(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
