//! 项目管理模块
//!
//! 提供项目根目录查找和 package.json 读写

pub mod manifest;
pub mod root_finder;

// 重导出
pub use manifest::Manifest;
pub use root_finder::{find_project_root_from, manifest_path};
