//! 运行环境与常量
//!
//! 所有环境探测（CI、交互终端、NO_SETUP、DEBUG）集中在 [`Environment`]，
//! 由入口点构造后显式传入 negotiator 和 hook，测试可直接构造任意组合。

use std::env;
use std::io::{self, IsTerminal};

/// 项目清单文件名
pub const MANIFEST_FILE: &str = "package.json";

/// 正确配置时 `scripts.release` 的值
pub const SENTINEL_COMMAND: &str = "wp-release";

/// 被替换的 release 脚本备份到的键
pub const BACKUP_KEY: &str = "release-backup";

/// release 脚本键
pub const RELEASE_KEY: &str = "release";

/// 本工具自身的包名（用于自安装检测）
pub const PACKAGE_NAMES: &[&str] = &["@dream-encode/wp-build-tools", "wp-build-tools"];

/// 手动执行 setup 的命令提示
pub const SETUP_COMMAND_HINT: &str = "npx @dream-encode/wp-build-tools setup";

/// 覆盖脚本目录的环境变量
pub const SCRIPTS_DIR_VAR: &str = "WP_BUILD_TOOLS_SCRIPTS_DIR";

/// 进程运行环境的能力标志
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// 运行在持续集成环境（`CI`）
    pub ci: bool,
    /// stdin 与 stdout 都连接到终端
    pub tty: bool,
    /// 用户通过 `NO_SETUP` 显式跳过自动配置
    pub opt_out: bool,
    /// `DEBUG` 已设置，postinstall 回显被吞掉的错误
    pub debug: bool,
}

impl Environment {
    /// 从当前进程的环境变量和终端状态读取
    pub fn from_process() -> Self {
        Self {
            ci: env_flag("CI"),
            tty: io::stdin().is_terminal() && io::stdout().is_terminal(),
            opt_out: env_flag("NO_SETUP"),
            debug: env_flag("DEBUG"),
        }
    }

    /// 是否可以向用户提问（终端且非 CI）
    pub fn is_interactive(&self) -> bool {
        self.tty && !self.ci
    }
}

/// 环境变量存在且非空即视为开启
pub fn env_flag(name: &str) -> bool {
    env::var_os(name).is_some_and(|v| !v.is_empty())
}
