//! 测试替身：脚本化提示、固定结果的 registry、记录命令的执行器

#![allow(dead_code)]

use quickinstall::package_manager::{CommandRunner, InstallOutput, PackageInfo};
use quickinstall::prompt::{PromptResult, Prompter, SelectOption};
use quickinstall::registry::Registry;
use quickinstall::InstallCommand;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    Choose(usize),
    ChooseMany(Vec<usize>),
    Confirm(bool),
    Cancel,
}

pub fn text(s: &str) -> Reply {
    Reply::Text(s.to_string())
}

/// 按顺序回放答案；多出来的提示直接 panic
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    replies: VecDeque<Reply>,
    pub asked: Vec<String>,
    pub option_labels: Vec<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: replies.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.replies.len()
    }

    fn next(&mut self, message: &str) -> Reply {
        self.asked.push(message.to_string());
        self.replies
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected prompt: {:?}", message))
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&mut self, message: &str) -> PromptResult<String> {
        match self.next(message) {
            Reply::Text(s) => Ok(Some(s)),
            Reply::Cancel => Ok(None),
            other => panic!("expected text reply for {:?}, got {:?}", message, other),
        }
    }

    fn select<T: 'static>(
        &mut self,
        message: &str,
        mut options: Vec<SelectOption<T>>,
    ) -> PromptResult<T> {
        self.option_labels
            .push(options.iter().map(|o| o.label.clone()).collect());
        match self.next(message) {
            Reply::Choose(i) => Ok(Some(options.swap_remove(i).value)),
            Reply::Cancel => Ok(None),
            other => panic!("expected choice for {:?}, got {:?}", message, other),
        }
    }

    fn multi_select<T: 'static>(
        &mut self,
        message: &str,
        options: Vec<SelectOption<T>>,
        required: bool,
    ) -> PromptResult<Vec<T>> {
        assert!(required, "package picker must require a selection");
        self.option_labels
            .push(options.iter().map(|o| o.label.clone()).collect());
        match self.next(message) {
            Reply::ChooseMany(indices) => {
                let mut slots: Vec<Option<SelectOption<T>>> =
                    options.into_iter().map(Some).collect();
                Ok(Some(
                    indices
                        .into_iter()
                        .filter_map(|i| slots[i].take().map(|o| o.value))
                        .collect(),
                ))
            }
            Reply::Cancel => Ok(None),
            other => panic!("expected multi choice for {:?}, got {:?}", message, other),
        }
    }

    fn confirm(&mut self, message: &str) -> PromptResult<bool> {
        match self.next(message) {
            Reply::Confirm(b) => Ok(Some(b)),
            Reply::Cancel => Ok(None),
            other => panic!("expected confirmation for {:?}, got {:?}", message, other),
        }
    }
}

/// 返回固定结果
#[derive(Debug, Default)]
pub struct StubRegistry {
    results: Vec<PackageInfo>,
    fail: bool,
    pub queries: RefCell<Vec<String>>,
}

impl StubRegistry {
    pub fn with_names(names: &[&str]) -> Self {
        Self {
            results: names
                .iter()
                .map(|n| PackageInfo {
                    name: n.to_string(),
                    description: format!("{} description", n),
                })
                .collect(),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl Registry for StubRegistry {
    async fn search(&self, query: &str) -> anyhow::Result<Vec<PackageInfo>> {
        self.queries.borrow_mut().push(query.to_string());
        if self.fail {
            anyhow::bail!("connection refused");
        }
        Ok(self.results.clone())
    }
}

/// 记录命令，返回预设的 stderr
#[derive(Debug, Default)]
pub struct RecordingRunner {
    stderr: String,
    pub commands: RefCell<Vec<InstallCommand>>,
}

impl RecordingRunner {
    pub fn failing(stderr: &str) -> Self {
        Self {
            stderr: stderr.to_string(),
            ..Self::default()
        }
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.commands.borrow().iter().map(|c| c.to_string()).collect()
    }
}

impl CommandRunner for RecordingRunner {
    async fn run(&self, command: &InstallCommand) -> InstallOutput {
        self.commands.borrow_mut().push(command.clone());
        InstallOutput {
            stdout: "added 1 package in 1s".to_string(),
            stderr: self.stderr.clone(),
        }
    }
}

/// 带 package.json 的临时项目目录
pub fn project_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.json"), r#"{"name":"demo"}"#).unwrap();
    dir
}
