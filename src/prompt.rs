//! 交互式提示的统一接口。每个提示返回 Ok(None) 表示用户取消。

use crossterm::style::Stylize;
use inquire::list_option::ListOption;
use inquire::validator::Validation;
use inquire::{Confirm, CustomUserError, InquireError, MultiSelect, Select, Text};
use std::fmt;
use thiserror::Error;

const SELECT_HELP: &str = "Arrow keys to navigate, return/enter to select";
const MULTI_SELECT_HELP: &str = "Arrow keys to navigate, space to select, return/enter to confirm";

/// 终端不可用等无法继续交互的错误（不含用户取消）
#[derive(Debug, Error)]
#[error("prompt failed: {0}")]
pub struct PromptError(pub String);

/// Ok(None) 即取消
pub type PromptResult<T> = Result<Option<T>, PromptError>;

/// 选项：值、显示名、可选提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption<T> {
    pub value: T,
    pub label: String,
    pub hint: Option<String>,
}

impl<T> SelectOption<T> {
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        let hint = hint.into();
        self.hint = if hint.trim().is_empty() { None } else { Some(hint) };
        self
    }
}

impl<T> fmt::Display for SelectOption<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.hint {
            Some(hint) => write!(f, "{} {}", self.label, format!("({})", hint).dark_grey()),
            None => f.write_str(&self.label),
        }
    }
}

pub trait Prompter {
    fn text(&mut self, message: &str) -> PromptResult<String>;

    fn select<T: 'static>(
        &mut self,
        message: &str,
        options: Vec<SelectOption<T>>,
    ) -> PromptResult<T>;

    /// required 为 true 时不允许空选择
    fn multi_select<T: 'static>(
        &mut self,
        message: &str,
        options: Vec<SelectOption<T>>,
        required: bool,
    ) -> PromptResult<Vec<T>>;

    fn confirm(&mut self, message: &str) -> PromptResult<bool>;
}

/// 基于 inquire 的终端实现
#[derive(Debug, Default)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn text(&mut self, message: &str) -> PromptResult<String> {
        answered(Text::new(message).prompt())
    }

    fn select<T: 'static>(
        &mut self,
        message: &str,
        options: Vec<SelectOption<T>>,
    ) -> PromptResult<T> {
        let picked = Select::new(message, options)
            .with_help_message(SELECT_HELP)
            .prompt();
        answered(picked).map(|picked| picked.map(|option| option.value))
    }

    fn multi_select<T: 'static>(
        &mut self,
        message: &str,
        options: Vec<SelectOption<T>>,
        required: bool,
    ) -> PromptResult<Vec<T>> {
        let mut prompt = MultiSelect::new(message, options)
            .with_help_message(MULTI_SELECT_HELP)
            .with_page_size(10);

        if required {
            prompt = prompt.with_validator(
                |picked: &[ListOption<&SelectOption<T>>]| -> Result<Validation, CustomUserError> {
                    if picked.is_empty() {
                        Ok(Validation::Invalid("Please select at least one option.".into()))
                    } else {
                        Ok(Validation::Valid)
                    }
                },
            );
        }

        answered(prompt.prompt())
            .map(|picked| picked.map(|options| options.into_iter().map(|o| o.value).collect()))
    }

    fn confirm(&mut self, message: &str) -> PromptResult<bool> {
        answered(Confirm::new(message).prompt())
    }
}

/// Esc / Ctrl-C 视为取消，其余错误向上返回
fn answered<T>(result: Result<T, InquireError>) -> PromptResult<T> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(PromptError(e.to_string())),
    }
}
