// WordPress Build Tools - Library Root
//
// package.json release 脚本配置与外部脚本 shim

pub mod cli;
pub mod config;
pub mod error;
pub mod hooks;
pub mod output;
pub mod project;
pub mod setup;
pub mod shim;
pub mod utils;

// 重新导出常用类型
pub use config::Environment;
pub use error::{SetupError, SetupResult};
pub use output::Logger;
pub use project::{find_project_root_from, Manifest};
pub use setup::{analyze, Negotiator, SetupAnalysis, SetupOutcome};
