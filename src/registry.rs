use crate::package_manager::parser::parse_search_response;
use crate::package_manager::PackageInfo;
use anyhow::Result;
use reqwest::Client;

pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// 包搜索来源
#[allow(async_fn_in_trait)]
pub trait Registry {
    async fn search(&self, query: &str) -> Result<Vec<PackageInfo>>;
}

pub struct NpmRegistry {
    client: Client,
    base_url: String,
    limit: usize,
}

impl NpmRegistry {
    pub fn new(base_url: impl Into<String>, limit: usize) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            limit,
        }
    }

    pub fn search_url(&self) -> String {
        format!("{}/-/v1/search", self.base_url)
    }
}

impl Registry for NpmRegistry {
    async fn search(&self, query: &str) -> Result<Vec<PackageInfo>> {
        let url = self.search_url();
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .query(&[("text", query.to_string()), ("size", self.limit.to_string())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(anyhow::anyhow!(
                "registry search failed (status {}): {}",
                status,
                error_text
            ));
        }

        let body = response.text().await?;
        parse_search_response(&body)
    }
}
