//! Postinstall Hook
//!
//! npm 安装后自动运行：检测是否需要 setup 并给出提示。
//! 默认只输出指引，不修改文件；`--force` 时直接执行 setup。
//! 任何错误都被吞掉，保证不会让安装失败。

use serde::Deserialize;
use std::path::Path;

use crate::config::{Environment, PACKAGE_NAMES, SETUP_COMMAND_HINT};
use crate::error::SetupResult;
use crate::output::Logger;
use crate::project::{find_project_root_from, manifest_path, Manifest};
use crate::setup::{analyze, display_script, Negotiator, Prompt, SetupAnalysis};
use crate::utils::try_read_json;

/// 跳过 hook 的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Ci,
    OptOut,
    SelfInstall,
}

/// hook 做了什么
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookDecision {
    Skipped(SkipReason),
    /// 找不到 package.json，不是 Node.js 项目
    NoProject,
    /// package.json 无法读取或解析
    Unreadable,
    AlreadyConfigured,
    /// 输出了 setup 指引
    Guidance { interactive: bool },
    /// `--force` 模式下已完成配置
    Configured,
    /// `--force` 模式下配置未完成（错误已吞掉）
    Failed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostinstallOptions {
    pub force: bool,
}

#[derive(Debug, Deserialize)]
struct PackageIdentity {
    name: Option<String>,
}

/// 当前目录的 package.json 是否就是本工具自己
pub fn is_self_install(cwd: &Path) -> bool {
    try_read_json::<PackageIdentity>(&manifest_path(cwd))
        .and_then(|pkg| pkg.name)
        .is_some_and(|name| PACKAGE_NAMES.contains(&name.as_str()))
}

/// 需要跳过时返回原因
pub fn skip_reason(cwd: &Path, env: &Environment) -> Option<SkipReason> {
    if env.ci {
        Some(SkipReason::Ci)
    } else if env.opt_out {
        Some(SkipReason::OptOut)
    } else if is_self_install(cwd) {
        Some(SkipReason::SelfInstall)
    } else {
        None
    }
}

/// 运行 postinstall hook，永不失败
pub fn run_postinstall(
    cwd: &Path,
    env: &Environment,
    options: PostinstallOptions,
    logger: &mut Logger,
    prompt: &mut dyn Prompt,
) -> HookDecision {
    if let Some(reason) = skip_reason(cwd, env) {
        return HookDecision::Skipped(reason);
    }

    let Some(project_root) = find_project_root_from(cwd) else {
        return HookDecision::NoProject;
    };

    let mut manifest = match Manifest::load(&manifest_path(&project_root)) {
        Ok(manifest) => manifest,
        Err(e) => {
            debug_echo(env, &e);
            return HookDecision::Unreadable;
        }
    };

    let analysis = analyze(&manifest);
    if !analysis.needs_setup {
        return HookDecision::AlreadyConfigured;
    }

    if options.force {
        return match configure(env, logger, prompt, &mut manifest, &analysis) {
            Ok(_) => HookDecision::Configured,
            Err(e) => {
                debug_echo(env, &e);
                HookDecision::Failed
            }
        };
    }

    print_guidance(env, logger, &analysis);
    HookDecision::Guidance {
        interactive: env.is_interactive(),
    }
}

fn configure(
    env: &Environment,
    logger: &mut Logger,
    prompt: &mut dyn Prompt,
    manifest: &mut Manifest,
    analysis: &SetupAnalysis,
) -> SetupResult<()> {
    Negotiator::new(env, logger, prompt).negotiate(manifest, analysis, true)?;
    Ok(())
}

fn print_guidance(env: &Environment, logger: &mut Logger, analysis: &SetupAnalysis) {
    logger.plain("");
    logger.rule(60);
    logger.heading("🚀 wp-build-tools installed successfully!");
    logger.rule(60);

    if env.is_interactive() {
        logger.heading("\n💡 Quick Setup Available:");
        logger.info("   wp-build-tools can add a \"release\" script to your package.json");
        logger.dim("   This enables: npm run release");

        if let Some(current) = &analysis.current_release {
            logger.warn(format!(
                "\n⚠️  Existing release script detected: \"{}\"",
                display_script(current)
            ));
            logger.dim("   (will be backed up as \"release-backup\")");
        }

        logger.heading("\n🔧 Setup Options:");
        logger.info(format!("   • Interactive: {}", SETUP_COMMAND_HINT));
        logger.info(format!("   • Automatic:   {} --force", SETUP_COMMAND_HINT));
        logger.dim("   • Skip:        Set NO_SETUP=1 environment variable");

        logger.heading("\n📖 Usage after setup:");
        logger.info("   npm run release        # Interactive release");
        logger.info("   wp-release patch       # Patch release");
        logger.info("   wp-zip --help          # See ZIP options");
        logger.info("   wp-release --help      # See all release options");
    } else {
        logger.warn("\n💡 Setup required:");
        logger.info(format!("   Run: {}", SETUP_COMMAND_HINT));
    }

    logger.plain("");
    logger.rule(60);
}

/// 只在 DEBUG 时输出被吞掉的错误
pub fn debug_echo(env: &Environment, error: &dyn std::fmt::Display) {
    if env.debug {
        eprintln!("wp-build-tools postinstall error: {}", error);
    }
}
