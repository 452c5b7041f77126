//! 安装命令执行

use super::types::{InstallOutput, PackageSelection};
use super::{InstallCommand, PackageManager};
use crate::spinner::SpinnerGuard;
use crate::ui;

/// 执行安装命令的后端，测试中可替换
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// 运行到结束并返回完整输出；失败也以输出形式返回
    async fn run(&self, command: &InstallCommand) -> InstallOutput;
}

/// 用 duct 启动子进程并捕获 stdout / stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct DuctRunner;

impl CommandRunner for DuctRunner {
    async fn run(&self, command: &InstallCommand) -> InstallOutput {
        let owned = command.clone();
        match tokio::task::spawn_blocking(move || run_blocking(&owned)).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => InstallOutput::spawn_failure(format!(
                "Failed to execute \"{}\": {}",
                command, e
            )),
            Err(e) => InstallOutput::spawn_failure(format!("Install task aborted: {}", e)),
        }
    }
}

fn run_blocking(command: &InstallCommand) -> std::io::Result<InstallOutput> {
    // 退出码不参与判断，见 exit_code_for
    let output = duct::cmd(executable(&command.program), command.args.iter())
        .stdin_null()
        .stdout_capture()
        .stderr_capture()
        .unchecked()
        .run()?;

    Ok(InstallOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}

/// Windows 上 npm / yarn / pnpm 都是 .cmd 脚本
fn executable(program: &str) -> String {
    if cfg!(windows) {
        format!("{}.cmd", program)
    } else {
        program.to_string()
    }
}

/// stderr 非空且不含 "WARN" 视为失败
pub fn exit_code_for(stderr: &str) -> i32 {
    if !stderr.is_empty() && !stderr.contains("WARN") {
        1
    } else {
        0
    }
}

/// 执行一次安装，返回 0（成功）或 1（失败）
///
/// 调试模式下的输出经由 spinner 暂停绘制后打印，避免与转圈同行。
pub async fn install<R: CommandRunner>(
    runner: &R,
    packages: &PackageSelection,
    manager: PackageManager,
    is_dev: bool,
    debug: bool,
    spinner: &SpinnerGuard,
) -> i32 {
    let command = InstallCommand::new(packages.names(), manager, is_dev);
    let output = runner.run(&command).await;

    if debug {
        spinner.suspend(|| ui::print_output(&output.stderr, &output.stdout));
    }

    exit_code_for(&output.stderr)
}
