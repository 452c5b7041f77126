//! quickinstall - 交互式安装 npm 包
//!
//! 询问用户要安装什么（直接输入包名，或搜索 registry 后挑选），
//! 选择 npm / yarn / pnpm，然后调用对应的包管理器完成安装。

pub mod cli;
pub mod config;
pub mod error;
pub mod flow;
pub mod logger;
pub mod package_manager;
pub mod prompt;
pub mod registry;
pub mod spinner;
pub mod ui;

pub use config::Config;
pub use error::Termination;
pub use flow::{Mode, RoundOutcome, Session};
pub use package_manager::{build_command, InstallCommand, PackageManager, PackageSelection};
