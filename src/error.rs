//! 错误类型
//!
//! 预期内的结果（已配置、用户拒绝）不是错误，见 [`crate::setup::SetupOutcome`]。

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("No package.json found in current directory or parent directories")]
    ManifestNotFound,

    #[error("Error reading package.json ({}): {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error parsing package.json ({}): {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("package.json ({}) must contain a JSON object", .path.display())]
    NotAnObject { path: PathBuf },

    #[error("\"scripts\" in package.json is not an object")]
    InvalidScripts,

    #[error("Error serializing package.json: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Error writing package.json ({}): {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read confirmation: {0}")]
    Prompt(#[source] io::Error),
}

pub type SetupResult<T> = Result<T, SetupError>;
