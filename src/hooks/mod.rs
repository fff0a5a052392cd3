//! Hook 模块
//!
//! 实现 npm 生命周期 hook：postinstall

pub mod postinstall;

// 重导出
pub use postinstall::*;
