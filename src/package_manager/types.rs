//! PackageManager 相关数据类型定义

use std::fmt;

/// 命令输出结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallOutput {
    pub stdout: String,
    pub stderr: String,
}

impl InstallOutput {
    /// 启动失败时，把错误信息当作 stderr
    pub fn spawn_failure(message: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: message.into(),
        }
    }
}

/// 搜索结果条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    pub name: String,
    pub description: String,
}

/// 待安装的包列表：非空、有序、无重复
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSelection {
    names: Vec<String>,
}

impl PackageSelection {
    /// 按空白拆分用户输入；没有任何包名时返回 None
    pub fn parse(input: &str) -> Option<Self> {
        Self::from_names(input.split_whitespace().map(str::to_string))
    }

    /// 由名字列表构造，重复项保留首次出现的位置
    pub fn from_names<I>(names: I) -> Option<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.trim().to_string();
            if !name.is_empty() && !unique.contains(&name) {
                unique.push(name);
            }
        }
        if unique.is_empty() {
            None
        } else {
            Some(Self { names: unique })
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl fmt::Display for PackageSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names.join(" "))
    }
}
