//! 控制台输出：开场 / 结束横幅、状态行、安装输出回显

use crossterm::style::Stylize;
use std::fmt::Display;

pub const LINE_PREFIX: &str = "│ ";

pub fn intro(title: &str) {
    println!();
    println!("{}  {}", "┌".grey(), format!(" {} ", title).reverse());
}

pub fn outro(message: &str) {
    println!("{}", "│".grey());
    println!("{}  {}", "└".grey(), message.green());
    println!();
}

/// 终止横幅（取消、缺少 package.json、没有包等）
pub fn cancel(message: &str) {
    println!("{}", "│".grey());
    println!("{}  {}", "└".grey(), message.red());
    println!();
}

/// 转圈结束后的状态行
pub fn status(message: impl Display) {
    println!("{}  {}", "◇".green(), message);
}

/// 逐行回显 stderr 与 stdout
pub fn print_output(stderr: &str, stdout: &str) {
    let prefix = LINE_PREFIX.grey().to_string();
    for line in format_output(stderr, stdout, &prefix) {
        println!("{}", line);
    }
}

/// 先 stderr 后 stdout，每行加前缀
pub fn format_output(stderr: &str, stdout: &str, prefix: &str) -> Vec<String> {
    [stderr, stdout]
        .into_iter()
        .flat_map(str::lines)
        .map(|line| format!("{}{}", prefix, line))
        .collect()
}
