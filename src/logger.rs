//! 调试日志：灰色竖线 + 时间 + 青色消息

use crate::ui::LINE_PREFIX;
use chrono::Local;
use crossterm::style::Stylize;
use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// 初始化日志；之后可用 set_debug 调整级别
pub fn init(debug: bool) {
    let _ = Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{}{}  {}",
                LINE_PREFIX.grey(),
                Local::now().format("%H:%M:%S").to_string().grey(),
                record.args().to_string().cyan()
            )
        })
        .filter_level(LevelFilter::Warn)
        .filter_module("quickinstall", LevelFilter::Debug)
        .parse_default_env()
        .try_init();

    set_debug(debug);
}

/// 全局级别：调试模式 debug，否则 warn
pub fn set_debug(debug: bool) {
    log::set_max_level(level_for(debug));
}

fn level_for(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}
