//! 远程接口封装 — npm 补全与 bundlephobia 体积查询

pub mod types;

pub use types::{SizeDetail, Suggestion};

use thiserror::Error;

const SUGGEST_URL: &str = "https://www.npmjs.com/search/suggestions";
const SIZE_URL: &str = "https://bundlephobia.com/api/size";

/// 远程查询的失败分类，两类最终都退化为空结果
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("网络请求失败: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("响应解析失败: {0}")]
    Decode(#[from] serde_json::Error),
}

pub struct RegistryClient {
    client: reqwest::Client,
}

impl RegistryClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// 按前缀搜索包名补全，保持远端返回的顺序
    pub async fn suggest(&self, query: &str) -> Result<Vec<Suggestion>, LookupError> {
        log::debug!("请求补全: {}", query);
        let body = self
            .client
            .get(SUGGEST_URL)
            .query(&[("q", query)])
            .send()
            .await?
            .text()
            .await?;
        let suggestions = serde_json::from_str(&body)?;
        Ok(suggestions)
    }

    /// 查询指定包的体积信息。bundlephobia 对不存在的包用非 2xx 状态码
    /// 返回 error 载荷，所以不检查状态码，直接解析响应体
    pub async fn package_size(&self, name: &str) -> Result<SizeDetail, LookupError> {
        log::debug!("请求体积详情: {}", name);
        let body = self
            .client
            .get(SIZE_URL)
            .query(&[("package", name)])
            .send()
            .await?
            .text()
            .await?;
        let detail = serde_json::from_str(&body)?;
        Ok(detail)
    }
}
