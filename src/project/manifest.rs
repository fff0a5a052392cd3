//! package.json 文档
//!
//! 以 `serde_json::Map` 保存整个文档（preserve_order），
//! 只修改 `scripts.release` / `scripts.release-backup`，其余字段原样写回。

use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SetupError, SetupResult};
use crate::utils::to_pretty_json;

/// 项目清单，身份由文件路径确定
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    path: PathBuf,
    data: Map<String, Value>,
}

impl Manifest {
    pub fn new(path: impl Into<PathBuf>, data: Map<String, Value>) -> Self {
        Self {
            path: path.into(),
            data,
        }
    }

    /// 读取并解析清单文件
    pub fn load(path: &Path) -> SetupResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| SetupError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(path, &content)
    }

    /// 从文本解析，顶层必须是对象
    pub fn parse(path: &Path, content: &str) -> SetupResult<Self> {
        let value: Value = serde_json::from_str(content).map_err(|source| SetupError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        match value {
            Value::Object(data) => Ok(Self::new(path, data)),
            _ => Err(SetupError::NotAnObject {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// 原始 `scripts` 值（任意类型）
    pub fn scripts_value(&self) -> Option<&Value> {
        self.data.get("scripts")
    }

    /// 对象形式的 `scripts`
    pub fn scripts(&self) -> Option<&Map<String, Value>> {
        self.scripts_value().and_then(Value::as_object)
    }

    pub fn script(&self, key: &str) -> Option<&Value> {
        self.scripts().and_then(|scripts| scripts.get(key))
    }

    /// 取得可写的 `scripts`，不存在时追加一个空对象
    ///
    /// 已存在但不是对象时返回错误，避免覆盖用户数据。
    pub fn scripts_mut(&mut self) -> SetupResult<&mut Map<String, Value>> {
        self.data
            .entry("scripts")
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .ok_or(SetupError::InvalidScripts)
    }

    /// 序列化后的文件内容
    fn to_json_string(&self) -> SetupResult<String> {
        to_pretty_json(&self.data).map_err(SetupError::Serialize)
    }

    /// 一次写调用写回原路径
    pub fn save(&self) -> SetupResult<()> {
        let content = self.to_json_string()?;

        fs::write(&self.path, content).map_err(|source| SetupError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
