//! 转圈进度提示，会话持有唯一句柄

use crate::ui;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt::Display;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct Spinner {
    visible: bool,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spinner {
    pub fn new() -> Self {
        Self { visible: true }
    }

    /// 不绘制任何内容（测试用）
    pub fn hidden() -> Self {
        Self { visible: false }
    }

    pub fn start(&self, message: &str) -> SpinnerGuard {
        let bar = if self.visible {
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.magenta}  {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner())
                    .tick_strings(&["◒", "◐", "◓", "◑", "◇"]),
            );
            bar.enable_steady_tick(Duration::from_millis(80));
            bar
        } else {
            ProgressBar::hidden()
        };
        bar.set_message(message.to_string());

        SpinnerGuard {
            bar,
            visible: self.visible,
            finished: false,
        }
    }
}

/// 正在运行的转圈；drop 时若未 stop 则直接清除
pub struct SpinnerGuard {
    bar: ProgressBar,
    visible: bool,
    finished: bool,
}

impl SpinnerGuard {
    /// 停止并打印结束消息
    pub fn stop(mut self, message: impl Display) {
        self.bar.finish_and_clear();
        self.finished = true;
        if self.visible {
            ui::status(message);
        }
    }

    /// 停止且不留输出
    pub fn clear(mut self) {
        self.bar.finish_and_clear();
        self.finished = true;
    }

    /// 暂停绘制执行 f，转圈期间的输出都要经过这里
    pub fn suspend<F: FnOnce() -> T, T>(&self, f: F) -> T {
        self.bar.suspend(f)
    }
}

impl Drop for SpinnerGuard {
    fn drop(&mut self) {
        if !self.finished {
            self.bar.finish_and_clear();
        }
    }
}
