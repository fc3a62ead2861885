//! 查询路由 — 根据请求形状决定本次调用做什么

use anyhow::{Context, Result};

use crate::rpc::JsonRpcRequest;

/// 补全查询的最小长度，低于它直接返回空结果，不发起网络请求
pub const MIN_QUERY_LEN: usize = 2;

/// 查询串末尾的详情标记：用户已经选定了这个包，而不是还在输入前缀
const DETAIL_MARKER: char = '!';

/// 一次调用对应的动作，三者互斥
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// 打开 bundlephobia 结果页，不产生结果列表
    OpenBrowser(String),
    /// 查询指定包的体积详情（标记已剥离）
    Detail(String),
    /// 按前缀搜索包名补全
    Suggest(String),
}

/// 补全查询是否值得发起一次网络往返。按字符数算而不是字节数，
/// 单个多字节字符仍然只算一个字符
pub fn should_suggest(q: &str) -> bool {
    q.chars().count() >= MIN_QUERY_LEN
}

/// 对入站请求分类。参数缺失或类型不对按请求畸形处理，由边界静默丢弃
pub fn classify(request: &JsonRpcRequest) -> Result<Action> {
    if request.method == "openBrowser" {
        let name = request.query_param().context("openBrowser 缺少包名参数")?;
        return Ok(Action::OpenBrowser(name.to_string()));
    }

    let q = request.query_param().context("请求缺少查询参数")?.trim();

    // strip_suffix 对空串安全，且只剥一层标记："react!!" 查的是 "react!"
    match q.strip_suffix(DETAIL_MARKER) {
        Some(bare) => Ok(Action::Detail(bare.to_string())),
        None => Ok(Action::Suggest(q.to_string())),
    }
}
