//! Setup negotiator
//!
//! 展示变更计划，必要时征求确认，然后修改并写回 package.json。
//! 用户拒绝或任何失败都不会写文件；写入是一次 `fs::write`。

use serde_json::Value;

use super::analysis::{display_script, plan, SetupAnalysis};
use super::prompt::{is_affirmative, Prompt};
use crate::config::{Environment, BACKUP_KEY, RELEASE_KEY, SENTINEL_COMMAND, SETUP_COMMAND_HINT};
use crate::error::{SetupError, SetupResult};
use crate::output::Logger;
use crate::project::Manifest;

/// 一次协商的结果
#[derive(Debug, Clone, PartialEq)]
pub enum SetupOutcome {
    /// `scripts.release` 已经是 sentinel，未写文件
    AlreadyConfigured,
    /// 已写回；`backed_up` 为备份到 `release-backup` 的旧值
    Updated { backed_up: Option<Value> },
    /// 用户拒绝，未写文件
    Declined,
}

impl SetupOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Declined)
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

pub struct Negotiator<'a> {
    env: &'a Environment,
    logger: &'a mut Logger,
    prompt: &'a mut dyn Prompt,
}

impl<'a> Negotiator<'a> {
    pub fn new(env: &'a Environment, logger: &'a mut Logger, prompt: &'a mut dyn Prompt) -> Self {
        Self {
            env,
            logger,
            prompt,
        }
    }

    pub fn negotiate(
        &mut self,
        manifest: &mut Manifest,
        analysis: &SetupAnalysis,
        force: bool,
    ) -> SetupResult<SetupOutcome> {
        self.logger.heading("\n🔧 wp-build-tools Setup");
        self.logger.info("========================");

        if analysis.is_already_configured {
            self.logger
                .success("✅ Release script already configured correctly!");
            self.logger
                .info(format!("   Current: \"release\": \"{}\"", SENTINEL_COMMAND));
            return Ok(SetupOutcome::AlreadyConfigured);
        }

        self.logger.heading("\n📋 Proposed Changes:");
        for change in plan(analysis) {
            self.logger.info(format!("   • {}", change));
        }

        if !force && self.env.is_interactive() && !self.confirm()? {
            self.logger
                .warn("\n⏭️  Setup skipped. You can run this later with:");
            self.logger.info(format!("   {}", SETUP_COMMAND_HINT));
            return Ok(SetupOutcome::Declined);
        }

        self.logger.info("\n🔄 Updating package.json...");
        let backed_up = apply(manifest, analysis)?;
        manifest.save()?;

        self.report_success(backed_up.as_ref());
        Ok(SetupOutcome::Updated { backed_up })
    }

    fn confirm(&mut self) -> SetupResult<bool> {
        self.logger.heading("\n❓ Proceed with setup?");
        let answer = self
            .prompt
            .ask("   Type \"yes\" to continue, anything else to skip: ")
            .map_err(SetupError::Prompt)?;
        Ok(is_affirmative(&answer))
    }

    fn report_success(&mut self, backed_up: Option<&Value>) {
        if let Some(previous) = backed_up {
            self.logger.success(format!(
                "   ✅ Backed up existing script \"{}\" to \"{}\"",
                display_script(previous),
                BACKUP_KEY
            ));
        }
        self.logger.success("   ✅ package.json updated successfully!");

        self.logger.heading("\n🎉 Setup Complete!");
        self.logger.success("==================");
        self.logger.heading("\n📋 You can now use:");
        self.logger.info("   npm run release     # Interactive release");
        self.logger.info("   yarn release        # Interactive release");
        self.logger.info("   wp-release --help   # See all options");

        if backed_up.is_some() {
            self.logger.warn(format!(
                "\n💡 Your previous release script is saved as \"{}\"",
                BACKUP_KEY
            ));
        }
    }
}

/// 在内存中修改清单，返回被备份的旧值
///
/// 旧值与 sentinel 不同时覆盖写入 `release-backup`。
fn apply(manifest: &mut Manifest, analysis: &SetupAnalysis) -> SetupResult<Option<Value>> {
    let scripts = manifest.scripts_mut()?;

    let backed_up = analysis
        .current_release
        .clone()
        .filter(|v| v.as_str() != Some(SENTINEL_COMMAND));
    if let Some(previous) = &backed_up {
        scripts.insert(BACKUP_KEY.to_string(), previous.clone());
    }

    scripts.insert(RELEASE_KEY.to_string(), Value::from(SENTINEL_COMMAND));
    Ok(backed_up)
}
