//! 输出解析函数

use super::types::PackageInfo;
use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RawPackage {
    name: String,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchObject {
    package: RawPackage,
}

/// 两种格式：registry 的 /-/v1/search 响应，或 `npm search --json` 的数组
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SearchPayload {
    Registry { objects: Vec<SearchObject> },
    Cli(Vec<RawPackage>),
}

/// 解析搜索结果 JSON
pub fn parse_search_response(body: &str) -> Result<Vec<PackageInfo>> {
    let payload: SearchPayload =
        serde_json::from_str(body).context("unexpected search response format")?;

    let raw = match payload {
        SearchPayload::Registry { objects } => objects.into_iter().map(|o| o.package).collect(),
        SearchPayload::Cli(packages) => packages,
    };

    Ok(raw
        .into_iter()
        .map(|p| PackageInfo {
            name: p.name,
            description: p.description.unwrap_or_default(),
        })
        .collect())
}
