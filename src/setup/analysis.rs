//! 当前 release 配置分析与变更计划

use serde_json::Value;
use std::fmt;

use crate::config::{BACKUP_KEY, RELEASE_KEY, SENTINEL_COMMAND};
use crate::project::Manifest;

/// 从清单快照得到的配置状态，不持久化
#[derive(Debug, Clone, PartialEq)]
pub struct SetupAnalysis {
    pub has_scripts: bool,
    pub has_release_script: bool,
    pub current_release: Option<Value>,
    pub current_backup: Option<Value>,
    pub is_already_configured: bool,
    pub needs_setup: bool,
}

/// 分析清单，纯函数，不会失败
pub fn analyze(manifest: &Manifest) -> SetupAnalysis {
    let current_release = manifest.script(RELEASE_KEY).filter(|v| is_set(v)).cloned();
    let current_backup = manifest.script(BACKUP_KEY).filter(|v| is_set(v)).cloned();
    let is_already_configured = current_release
        .as_ref()
        .is_some_and(|v| v.as_str() == Some(SENTINEL_COMMAND));

    SetupAnalysis {
        has_scripts: manifest.scripts_value().is_some_and(|v| !v.is_null()),
        has_release_script: current_release.is_some(),
        current_release,
        current_backup,
        is_already_configured,
        needs_setup: !is_already_configured,
    }
}

/// null、false 与空字符串视为未设置
fn is_set(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// 脚本值的展示形式：字符串原样，其它类型用 JSON 表示
pub fn display_script(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// 计划中的一步变更
#[derive(Debug, Clone, PartialEq)]
pub enum PlannedChange {
    AddScriptsSection,
    BackupRelease { previous: String },
    ReplaceBackup { previous_backup: String },
    ReplaceRelease,
    AddRelease,
}

impl fmt::Display for PlannedChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddScriptsSection => write!(f, "Add \"scripts\" section to package.json"),
            Self::BackupRelease { previous } => {
                write!(f, "Backup existing release script: \"{}\"", previous)
            }
            Self::ReplaceBackup { previous_backup } => write!(
                f,
                "Overwrite previous \"{}\": \"{}\"",
                BACKUP_KEY, previous_backup
            ),
            Self::ReplaceRelease => write!(f, "Replace with: \"{}\"", SENTINEL_COMMAND),
            Self::AddRelease => write!(f, "Add new release script: \"{}\"", SENTINEL_COMMAND),
        }
    }
}

/// 根据分析结果生成变更计划；已配置时为空
pub fn plan(analysis: &SetupAnalysis) -> Vec<PlannedChange> {
    if analysis.is_already_configured {
        return Vec::new();
    }

    let mut changes = Vec::new();

    if !analysis.has_scripts {
        changes.push(PlannedChange::AddScriptsSection);
    }

    match &analysis.current_release {
        Some(previous) => {
            changes.push(PlannedChange::BackupRelease {
                previous: display_script(previous),
            });
            if let Some(backup) = &analysis.current_backup {
                if backup != previous {
                    changes.push(PlannedChange::ReplaceBackup {
                        previous_backup: display_script(backup),
                    });
                }
            }
            changes.push(PlannedChange::ReplaceRelease);
        }
        None => changes.push(PlannedChange::AddRelease),
    }

    changes
}
