//! CLI 命令实现
//!
//! 入口点共用的命令函数与顶层错误处理。

pub mod commands;

pub use commands::*;
