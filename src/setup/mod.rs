//! Setup 模块
//!
//! 检查 package.json 的 release 脚本，并在需要时把它指向 `wp-release`。

pub mod analysis;
pub mod negotiator;
pub mod prompt;

// 重导出
pub use analysis::{analyze, display_script, plan, PlannedChange, SetupAnalysis};
pub use negotiator::{Negotiator, SetupOutcome};
pub use prompt::{Prompt, ScriptedPrompt, StdinPrompt};

use std::path::Path;

use crate::config::Environment;
use crate::error::{SetupError, SetupResult};
use crate::output::Logger;
use crate::project::{find_project_root_from, manifest_path, Manifest};

/// `setup` 命令的选项
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetupOptions {
    /// 跳过确认
    pub force: bool,
    /// 不输出横幅
    pub quiet: bool,
}

/// `setup` 命令驱动：定位项目、读取清单、分析、协商
pub fn run_setup(
    cwd: &Path,
    options: SetupOptions,
    env: &Environment,
    logger: &mut Logger,
    prompt: &mut dyn Prompt,
) -> SetupResult<SetupOutcome> {
    if !options.quiet {
        logger.heading("🚀 wp-build-tools Project Setup");
        logger.info("================================\n");
    }

    let project_root = find_project_root_from(cwd).ok_or(SetupError::ManifestNotFound)?;

    if !options.quiet {
        logger.info(format!("📁 Project root: {}", project_root.display()));
    }

    let mut manifest = Manifest::load(&manifest_path(&project_root))?;
    let analysis = analyze(&manifest);

    if !analysis.needs_setup && !options.force {
        if !options.quiet {
            logger.success("✅ Project already configured correctly!");
        }
        return Ok(SetupOutcome::AlreadyConfigured);
    }

    Negotiator::new(env, logger, prompt).negotiate(&mut manifest, &analysis, options.force)
}

/// 把 `run_setup` 的结果转换为退出码并输出错误
pub fn report_setup_result(result: SetupResult<SetupOutcome>, logger: &mut Logger) -> i32 {
    match result {
        Ok(outcome) => outcome.exit_code(),
        Err(SetupError::ManifestNotFound) => {
            logger.error(format!("❌ {}", SetupError::ManifestNotFound));
            logger.warn("   Make sure you're in a Node.js project directory");
            1
        }
        Err(e) => {
            logger.error(format!("❌ {}", e));
            1
        }
    }
}
