//! 把远程响应映射为 Wox 结果列表

use crate::config::Config;
use crate::registry::{SizeDetail, Suggestion};
use crate::rpc::{JsonRpcRequest, ResultItem};

/// 每条补全映射为一行结果，点击后改写查询框触发详情查询
pub fn suggestion_items(config: &Config, suggestions: &[Suggestion]) -> Vec<ResultItem> {
    suggestions
        .iter()
        .map(|s| ResultItem {
            title: s.name.clone(),
            subtitle: s.description.clone(),
            ico_path: config.icon_path.clone(),
            action: Some(JsonRpcRequest::change_query(&config.keyword, &s.name)),
        })
        .collect()
}

/// 详情响应映射为恰好一行：找到了给体积，没找到给提示
pub fn detail_items(config: &Config, name: &str, detail: &SizeDetail) -> Vec<ResultItem> {
    if detail.is_not_found() {
        return vec![ResultItem {
            title: format!("Not found : {}", name),
            subtitle: "The package you were looking for doesn't exist.".to_string(),
            ico_path: config.icon_path.clone(),
            action: None,
        }];
    }

    vec![ResultItem {
        title: format!(
            "minified: {}, gzipped: {}",
            format_bytes(detail.size),
            format_bytes(detail.gzip)
        ),
        subtitle: "Open your browser for more information.".to_string(),
        ico_path: config.icon_path.clone(),
        action: Some(JsonRpcRequest::open_browser(name)),
    }]
}

/// 十进制字节单位格式化：1000 以下整数显示，以上保留一位小数
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["kB", "MB", "GB", "TB", "PB", "EB"];

    if bytes < 1000 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    loop {
        value /= 1000.0;
        if value < 1000.0 || unit == UNITS.len() - 1 {
            break;
        }
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}
