//! `wp-release`：等同于 `wp-build-tools release`，所有参数原样转发给 release.sh

use std::env;
use std::ffi::OsString;

use wp_build_tools::cli::{exit_with, install_panic_hook, script_command};
use wp_build_tools::shim::Script;

fn main() {
    install_panic_hook();
    let args: Vec<OsString> = env::args_os().skip(1).collect();
    exit_with(Ok(script_command(Script::Release, &args)))
}
