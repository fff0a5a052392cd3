use clap::{Parser, Subcommand};
use std::env;
use std::ffi::OsString;

use wp_build_tools::cli::{
    exit_with, handle_parse_error, install_panic_hook, postinstall_command, script_command,
    setup_command,
};
use wp_build_tools::hooks::PostinstallOptions;
use wp_build_tools::setup::SetupOptions;
use wp_build_tools::shim::Script;

/// WordPress build tools
///
/// 配置项目的 release 脚本，并转发 release / zip 命令到打包的脚本
#[derive(Parser)]
#[command(name = "wp-build-tools")]
#[command(author, version = env!("APP_VERSION"), about)]
#[command(
    long_about = "Configures the \"release\" script in your package.json to use wp-release,\n\
                  and forwards release / zip commands to the bundled shell scripts."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 配置 package.json 的 release 脚本
    Setup {
        /// 跳过确认
        #[arg(short, long)]
        force: bool,

        /// 不输出横幅
        #[arg(short, long)]
        quiet: bool,
    },

    /// npm postinstall hook（不会失败）
    Postinstall {
        /// 直接完成配置，而不是只输出指引
        #[arg(short, long)]
        force: bool,
    },

    /// 运行 release.sh（参数原样转发，包括 --help）
    #[command(disable_help_flag = true)]
    Release {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<OsString>,
    },

    /// 运行 zip.sh（参数原样转发，包括 --help）
    #[command(disable_help_flag = true)]
    Zip {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<OsString>,
    },

    /// 运行 test-release.sh
    ReleaseTest,
}

fn main() {
    let argv: Vec<OsString> = env::args_os().collect();
    let cli = Cli::try_parse_from(&argv).unwrap_or_else(|e| handle_parse_error(e, &argv));

    match cli.command {
        Commands::Setup { force, quiet } => {
            install_panic_hook();
            exit_with(setup_command(SetupOptions { force, quiet }))
        }
        Commands::Postinstall { force } => {
            exit_with(Ok(postinstall_command(PostinstallOptions { force })))
        }
        Commands::Release { args } => {
            install_panic_hook();
            exit_with(Ok(script_command(Script::Release, &args)))
        }
        Commands::Zip { args } => {
            install_panic_hook();
            exit_with(Ok(script_command(Script::Zip, &args)))
        }
        Commands::ReleaseTest => {
            install_panic_hook();
            exit_with(Ok(script_command(Script::ReleaseTest, &[])))
        }
    }
}
