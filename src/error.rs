//! 结束程序的各种原因

use crate::prompt::PromptError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Termination {
    #[error("Project does not have a package.json file!")]
    NotAProject,

    #[error("Please provide some packages to install!")]
    NoPackagesProvided,

    #[error("No packages found!")]
    NoPackagesFound,

    #[error("Operation cancelled.")]
    Cancelled,

    #[error("Package search failed: {0}")]
    Search(String),

    #[error(transparent)]
    Prompt(#[from] PromptError),
}

impl Termination {
    /// 预期内的结束一律返回 0
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotAProject
            | Self::NoPackagesProvided
            | Self::NoPackagesFound
            | Self::Cancelled => 0,
            Self::Search(_) | Self::Prompt(_) => 1,
        }
    }
}
