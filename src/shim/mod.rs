//! 外部脚本 shim
//!
//! `release` / `zip` / `release-test` 只是把参数转交给打包的 bash 脚本，
//! 继承标准流，并以子进程的退出码退出。

pub mod runner;

pub use runner::{exit_code_of, run_script};

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::SCRIPTS_DIR_VAR;

/// 随包分发的外部脚本
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Release,
    Zip,
    ReleaseTest,
}

impl Script {
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Release => "release.sh",
            Self::Zip => "zip.sh",
            Self::ReleaseTest => "test-release.sh",
        }
    }

    /// release-test 不转发参数
    pub fn forwards_args(self) -> bool {
        !matches!(self, Self::ReleaseTest)
    }
}

/// 脚本所在目录：`WP_BUILD_TOOLS_SCRIPTS_DIR`，否则为当前可执行文件所在目录
pub fn scripts_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(SCRIPTS_DIR_VAR).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let exe = env::current_exe().context("Failed to locate the running executable")?;
    exe.parent()
        .map(PathBuf::from)
        .context("Executable has no parent directory")
}

/// 额外注入的环境变量
///
/// `lookup` 读取当前环境，便于测试。
pub fn script_environment<F>(script: Script, lookup: F) -> Vec<(String, String)>
where
    F: Fn(&str) -> Option<String>,
{
    if script != Script::Release {
        return Vec::new();
    }

    let or_default = |name: &str, default: &str| {
        lookup(name)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| default.to_string())
    };

    vec![
        ("LANG".to_string(), or_default("LANG", "en_US.UTF-8")),
        ("LC_ALL".to_string(), or_default("LC_ALL", "en_US.UTF-8")),
        ("PYTHONIOENCODING".to_string(), "utf-8".to_string()),
        // yarn 不设置 TERM，会导致 emoji 显示异常
        ("TERM".to_string(), or_default("TERM", "xterm-256color")),
        (
            "WP_RELEASE_VIA_YARN".to_string(),
            if is_yarn(&lookup) { "1" } else { "0" }.to_string(),
        ),
    ]
}

/// 是否由 yarn 调起
pub fn is_yarn<F>(lookup: &F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup("npm_config_user_agent").is_some_and(|agent| agent.contains("yarn"))
}

/// 运行指定脚本，返回应当使用的退出码
pub fn run(script: Script, args: &[OsString]) -> Result<i32> {
    let lookup = |name: &str| env::var(name).ok();

    if script == Script::Release && is_yarn(&lookup) && cfg!(windows) {
        println!("⚠️  Note: Running via yarn may cause emoji display issues on Windows.");
        println!("   For best results, use: npm run release");
        println!();
    }

    let path = scripts_dir()?.join(script.file_name());
    let args: &[OsString] = if script.forwards_args() { args } else { &[] };
    let envs = script_environment(script, lookup);

    run_script(&path, args, &envs)
}
