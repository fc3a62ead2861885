//! 远程接口响应类型

use serde::Deserialize;
use serde_json::Value;

/// npm 补全接口的单条结果，响应里多余的字段忽略
#[derive(Debug, Clone, Deserialize)]
pub struct Suggestion {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// bundlephobia 体积接口的响应
#[derive(Debug, Clone, Deserialize)]
pub struct SizeDetail {
    /// minify 后的字节数
    #[serde(default)]
    pub size: u64,
    /// gzip 压缩后的字节数
    #[serde(default)]
    pub gzip: u64,
    /// 字段存在且非 null 即表示包不存在，内容本身不重要
    #[serde(default)]
    pub error: Option<Value>,
}

impl SizeDetail {
    pub fn is_not_found(&self) -> bool {
        self.error.is_some()
    }
}
