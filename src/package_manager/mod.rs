//! 包管理器模块 — 对 npm / yarn / pnpm 的封装

pub mod parser;
pub mod runner;
pub mod types;

// 重新导出常用类型和函数
pub use runner::{exit_code_for, install, CommandRunner, DuctRunner};
pub use types::{InstallOutput, PackageInfo, PackageSelection};

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    pub const ALL: [PackageManager; 3] = [Self::Npm, Self::Yarn, Self::Pnpm];

    /// 可执行文件名
    pub fn program(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
        }
    }

    /// 安装子命令
    pub fn install_verb(&self) -> &'static str {
        match self {
            Self::Npm | Self::Pnpm => "install",
            Self::Yarn => "add",
        }
    }

    /// 开发依赖参数
    pub fn dev_flag(&self) -> &'static str {
        match self {
            Self::Npm | Self::Pnpm => "--save-dev",
            Self::Yarn => "--dev",
        }
    }

    /// 选择菜单中显示的名字
    pub fn label(&self) -> &'static str {
        match self {
            Self::Npm => "NPM",
            Self::Yarn => "Yarn",
            Self::Pnpm => "PNPM",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// 一次安装要执行的程序和参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl InstallCommand {
    pub fn new<S: AsRef<str>>(packages: &[S], manager: PackageManager, is_dev: bool) -> Self {
        let mut args = vec![manager.install_verb().to_string()];
        if is_dev {
            args.push(manager.dev_flag().to_string());
        }
        args.extend(packages.iter().map(|p| p.as_ref().to_string()));
        Self {
            program: manager.program().to_string(),
            args,
        }
    }
}

impl fmt::Display for InstallCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// 生成完整的安装命令字符串
pub fn build_command<S: AsRef<str>>(
    packages: &[S],
    manager: PackageManager,
    is_dev: bool,
) -> String {
    InstallCommand::new(packages, manager, is_dev).to_string()
}
