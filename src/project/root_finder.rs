//! 项目根目录查找
//!
//! 从起始目录向上遍历，找到最近的包含 package.json 的目录（包含起始目录本身，
//! 也包含文件系统根目录）。到达根目录后停止，不会死循环。

use crate::config::MANIFEST_FILE;
use std::path::{Path, PathBuf};

/// 从 `start` 开始向上查找项目根目录
///
/// # Returns
///
/// 返回包含 package.json 的最近祖先目录，找不到返回 None
pub fn find_project_root_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(MANIFEST_FILE).is_file())
        .map(Path::to_path_buf)
}

/// 项目根目录下清单文件的路径
pub fn manifest_path(project_root: &Path) -> PathBuf {
    project_root.join(MANIFEST_FILE)
}
