//! 命令实现：setup / postinstall / 脚本 shim
//!
//! 每个函数都返回进程退出码；只有 `exit_with` 真正退出进程。

use anyhow::{Context, Result};
use colored::Colorize;
use std::any::Any;
use std::env;
use std::ffi::{OsStr, OsString};
use std::panic;
use std::process;

use crate::config::Environment;
use crate::hooks::{debug_echo, run_postinstall, PostinstallOptions};
use crate::output::Logger;
use crate::setup::{report_setup_result, run_setup, SetupOptions, StdinPrompt};
use crate::shim::{self, Script};

/// `setup` 命令
pub fn setup_command(options: SetupOptions) -> Result<i32> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    let env = Environment::from_process();
    let mut logger = Logger::stdout();

    let result = run_setup(&cwd, options, &env, &mut logger, &mut StdinPrompt);
    Ok(report_setup_result(result, &mut logger))
}

/// `postinstall` 命令，总是返回 0
pub fn postinstall_command(options: PostinstallOptions) -> i32 {
    let env = Environment::from_process();
    silence_panics(env.clone());

    match env::current_dir() {
        Ok(cwd) => {
            let mut logger = Logger::stdout();
            run_postinstall(&cwd, &env, options, &mut logger, &mut StdinPrompt);
        }
        Err(e) => debug_echo(&env, &e),
    }

    0
}

/// `release` / `zip` / `release-test` 命令
pub fn script_command(script: Script, args: &[OsString]) -> i32 {
    match shim::run(script, args) {
        Ok(code) => code,
        Err(e) => {
            report_unexpected(&e);
            1
        }
    }
}

/// 命令行是否调用 postinstall（参数解析失败时也要能判断）
pub fn is_postinstall_invocation(args: &[OsString]) -> bool {
    args.get(1).map(OsString::as_os_str) == Some(OsStr::new("postinstall"))
}

/// 参数解析失败：postinstall 不能让安装失败，其它命令交给 clap 退出
pub fn handle_parse_error(error: clap::Error, args: &[OsString]) -> ! {
    if is_postinstall_invocation(args) && error.use_stderr() {
        debug_echo(&Environment::from_process(), &error);
        process::exit(0);
    }
    error.exit()
}

/// 打印未预期错误
pub fn report_unexpected(error: &anyhow::Error) {
    eprintln!("{}", format!("❌ Unexpected error: {:#}", error).red());
}

/// 顶层：把结果转换为进程退出码
pub fn exit_with(result: Result<i32>) -> ! {
    let code = match result {
        Ok(code) => code,
        Err(e) => {
            report_unexpected(&e);
            1
        }
    };
    process::exit(code)
}

/// panic 时输出一行错误并以 1 退出，而不是打印栈回溯
pub fn install_panic_hook() {
    panic::set_hook(Box::new(|info| {
        let message = panic_message(info.payload());
        eprintln!("{}", format!("❌ Unexpected error: {}", message).red());
        process::exit(1);
    }));
}

/// postinstall 中 panic 也不能让安装失败
fn silence_panics(env: Environment) {
    panic::set_hook(Box::new(move |info| {
        debug_echo(&env, &panic_message(info.payload()));
        process::exit(0);
    }));
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic".to_string()
    }
}
