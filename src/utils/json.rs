//! JSON 工具

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 读取 JSON 文件
pub fn read_json<T>(path: &Path) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))
}

/// 尝试读取 JSON 文件，失败时返回 None
pub fn try_read_json<T>(path: &Path) -> Option<T>
where
    T: for<'de> Deserialize<'de>,
{
    read_json(path).ok()
}

/// 序列化为 npm 风格的 JSON：两空格缩进，末尾一个换行
pub fn to_pretty_json<T>(data: &T) -> serde_json::Result<String>
where
    T: Serialize,
{
    let mut json = serde_json::to_string_pretty(data)?;
    json.push('\n');
    Ok(json)
}
