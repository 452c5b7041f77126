//! 交互流程：选择模式 → 得到包列表 → 选择包管理器 → 安装 → 是否继续
//!
//! 任何提示被取消都直接结束整个程序（返回 `Termination::Cancelled`），
//! 不会回到上一步。唯一的循环是每轮结束后的"是否继续安装"。

use crate::config::is_project;
use crate::error::Termination;
use crate::package_manager::{
    self, CommandRunner, InstallCommand, PackageInfo, PackageManager, PackageSelection,
};
use crate::prompt::{PromptResult, Prompter, SelectOption};
use crate::registry::Registry;
use crate::spinner::Spinner;
use crossterm::style::Stylize;
use std::path::PathBuf;

pub const MODE_MESSAGE: &str = "Select a mode to run in.";
pub const PACKAGES_MESSAGE: &str =
    "Please enter the package(s) you want to install (separated by spaces)";
pub const QUERY_MESSAGE: &str = "Enter your search query";
pub const MULTI_SELECT_MESSAGE: &str =
    "Multiple packages found, please select which ones to install.";
pub const MANAGER_MESSAGE: &str = "Select which package manager to use";
pub const DEV_MESSAGE: &str = "Are the package(s) provided development dependencies?";
pub const CONTINUE_MESSAGE: &str = "Would you like to install more packages?";

/// 安装模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    TypeEntry,
    SearchQuery,
}

impl Mode {
    pub fn value(&self) -> &'static str {
        match self {
            Self::TypeEntry => "type",
            Self::SearchQuery => "search",
        }
    }

    fn options() -> Vec<SelectOption<Mode>> {
        vec![
            SelectOption::new(Self::TypeEntry, "Type and install")
                .with_hint("Type package name(s) to install."),
            SelectOption::new(Self::SearchQuery, "Search and install")
                .with_hint("Search for packages (that you ask for) and install them."),
        ]
    }
}

/// 一轮的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// 执行了安装；exit_code 为 0 表示成功
    Installed { command: String, exit_code: i32 },
    /// 用户在确认时选择了"否"
    Declined,
}

pub struct Session<P, R, C> {
    prompter: P,
    registry: R,
    runner: C,
    spinner: Spinner,
    workdir: PathBuf,
    debug: bool,
}

impl<P, R, C> Session<P, R, C>
where
    P: Prompter,
    R: Registry,
    C: CommandRunner,
{
    pub fn new(prompter: P, registry: R, runner: C, workdir: impl Into<PathBuf>) -> Self {
        Self {
            prompter,
            registry,
            runner,
            spinner: Spinner::new(),
            workdir: workdir.into(),
            debug: false,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_spinner(mut self, spinner: Spinner) -> Self {
        self.spinner = spinner;
        self
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn runner(&self) -> &C {
        &self.runner
    }

    /// 完整会话：检查项目后循环执行安装轮次
    pub async fn run(&mut self) -> Result<(), Termination> {
        log::debug!("Checking for a package.json file...");
        if !is_project(&self.workdir) {
            log::debug!("File not found, exiting with error...");
            return Err(Termination::NotAProject);
        }

        loop {
            let outcome = self.round().await?;
            log::debug!("Round finished: {:?}", outcome);

            if !answered(self.prompter.confirm(CONTINUE_MESSAGE))? {
                break;
            }
        }

        Ok(())
    }

    /// 单轮：选择模式并按该模式得到包列表、安装
    pub async fn round(&mut self) -> Result<RoundOutcome, Termination> {
        let mode = answered(self.prompter.select(MODE_MESSAGE, Mode::options()))?;
        log::debug!("Mode selected: {}", mode.value());

        match mode {
            Mode::TypeEntry => self.type_to_install().await,
            Mode::SearchQuery => self.search_and_install().await,
        }
    }

    async fn type_to_install(&mut self) -> Result<RoundOutcome, Termination> {
        let input = answered(self.prompter.text(PACKAGES_MESSAGE))?;
        log::debug!("Packages provided: {}", input);

        let packages = PackageSelection::parse(&input).ok_or(Termination::NoPackagesProvided)?;
        self.choose_manager_and_install(&packages).await
    }

    async fn search_and_install(&mut self) -> Result<RoundOutcome, Termination> {
        let query = answered(self.prompter.text(QUERY_MESSAGE))?;
        log::debug!("Provided query: {}", query);

        let found = self.search(&query).await?;

        match found.as_slice() {
            [] => {
                log::debug!("Zero packages were found, exiting with error...");
                Err(Termination::NoPackagesFound)
            }
            [only] => {
                let message = format!(
                    "Only one package found ({}), would you like to install it?",
                    only.name
                );
                if !answered(self.prompter.confirm(&message))? {
                    return Ok(RoundOutcome::Declined);
                }
                let packages = PackageSelection::from_names([only.name.clone()])
                    .ok_or(Termination::NoPackagesFound)?;
                self.choose_manager_and_install(&packages).await
            }
            many => {
                let packages = self.pick_packages(many)?;
                let message = format!(
                    "Are these the correct packages? {}",
                    format!("({})", packages.names().join(", ")).dark_grey()
                );
                if !answered(self.prompter.confirm(&message))? {
                    return Ok(RoundOutcome::Declined);
                }
                self.choose_manager_and_install(&packages).await
            }
        }
    }

    async fn search(&mut self, query: &str) -> Result<Vec<PackageInfo>, Termination> {
        log::debug!("Searching the registry for \"{}\"", query);

        let spinner = self.spinner.start("Searching...");
        let result = self.registry.search(query).await;
        spinner.clear();

        // 转圈结束后再写日志
        let found = result.map_err(|e| Termination::Search(format!("{:#}", e)))?;
        log::debug!("Registry returned {} package(s)", found.len());
        Ok(found)
    }

    fn pick_packages(&mut self, found: &[PackageInfo]) -> Result<PackageSelection, Termination> {
        let options = found
            .iter()
            .map(|p| {
                SelectOption::new(p.name.clone(), p.name.clone()).with_hint(p.description.clone())
            })
            .collect();

        let picked = answered(self.prompter.multi_select(MULTI_SELECT_MESSAGE, options, true))?;
        let packages = PackageSelection::from_names(picked).ok_or(Termination::NoPackagesProvided)?;
        log::debug!("Packages selected: {}", packages);

        Ok(packages)
    }

    /// 每次安装前都重新询问包管理器和是否为开发依赖
    async fn choose_manager_and_install(
        &mut self,
        packages: &PackageSelection,
    ) -> Result<RoundOutcome, Termination> {
        let manager = answered(self.prompter.select(MANAGER_MESSAGE, manager_options()))?;
        let is_dev = answered(self.prompter.confirm(DEV_MESSAGE))?;

        let command = InstallCommand::new(packages.names(), manager, is_dev);
        log::debug!("Running \"{}\"...", command);

        let spinner = self.spinner.start("Installing package(s)...");
        let exit_code = package_manager::install(
            &self.runner,
            packages,
            manager,
            is_dev,
            self.debug,
            &spinner,
        )
        .await;

        // 安装失败不影响后续流程
        if exit_code != 0 {
            spinner.stop("Installation failed...".red());
        } else {
            spinner.stop("Installation succeeded!");
        }

        Ok(RoundOutcome::Installed {
            command: command.to_string(),
            exit_code,
        })
    }
}

fn manager_options() -> Vec<SelectOption<PackageManager>> {
    PackageManager::ALL
        .iter()
        .map(|m| SelectOption::new(*m, m.label()))
        .collect()
}

/// 取消即终止
fn answered<T>(result: PromptResult<T>) -> Result<T, Termination> {
    match result? {
        Some(value) => Ok(value),
        None => {
            log::debug!("User cancelled operation.");
            Err(Termination::Cancelled)
        }
    }
}
