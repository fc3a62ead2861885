//! Wox JSON-RPC 协议类型与标准输出回写

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::Write;

/// Wox 的进程间请求，入站和出站（挂在结果项上的动作）共用同一形状
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(rename = "DontHideAfterAction", default)]
    pub dont_hide_after_action: bool,
    pub method: String,
    #[serde(default)]
    pub parameters: Vec<Value>,
}

impl JsonRpcRequest {
    /// 取第一个参数作为查询串（非字符串视为缺失）
    pub fn query_param(&self) -> Option<&str> {
        self.parameters.first().and_then(Value::as_str)
    }

    /// 构造 Wox.ChangeQuery 动作：把查询框改写为 "<keyword> <name>!"
    /// 并保持窗口不关闭，用户确认后即触发一次详情查询
    pub fn change_query(keyword: &str, name: &str) -> Self {
        Self {
            dont_hide_after_action: true,
            method: "Wox.ChangeQuery".to_string(),
            parameters: vec![
                Value::String(format!("{} {}!", keyword, name)),
                Value::Bool(true),
            ],
        }
    }

    /// 构造 openBrowser 动作：下一次调用由路由直接打开结果页
    pub fn open_browser(name: &str) -> Self {
        Self {
            dont_hide_after_action: false,
            method: "openBrowser".to_string(),
            parameters: vec![Value::String(name.to_string())],
        }
    }
}

/// 结果列表中的一行
#[derive(Debug, Clone, Serialize)]
pub struct ResultItem {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "SubTitle")]
    pub subtitle: String,
    #[serde(rename = "IcoPath")]
    pub ico_path: String,
    /// 无动作时整个字段省略，Wox 不接受 null
    #[serde(rename = "JsonRPCAction", skip_serializing_if = "Option::is_none")]
    pub action: Option<JsonRpcRequest>,
}

#[derive(Debug, Serialize)]
struct JsonRpcResponse<'a> {
    #[serde(rename = "Result")]
    result: &'a [ResultItem],
}

/// 解析进程收到的原始请求
pub fn parse_request(raw: &str) -> Result<JsonRpcRequest> {
    let request = serde_json::from_str(raw)?;
    Ok(request)
}

/// 把结果列表序列化后一次性写到 stdout
pub fn send_result_items(items: &[ResultItem]) -> Result<()> {
    let body = serde_json::to_string(&JsonRpcResponse { result: items })?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(body.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_request() {
        let raw = r#"{"DontHideAfterAction":false,"method":"query","parameters":["react"]}"#;
        let req = parse_request(raw).unwrap();
        assert_eq!(req.method, "query");
        assert_eq!(req.query_param(), Some("react"));
        assert!(!req.dont_hide_after_action);
    }

    #[test]
    fn parse_request_with_missing_optional_fields() {
        let req = parse_request(r#"{"method":"query"}"#).unwrap();
        assert!(req.parameters.is_empty());
        assert_eq!(req.query_param(), None);
    }

    #[test]
    fn parse_malformed_request_fails() {
        assert!(parse_request("not json").is_err());
        assert!(parse_request(r#"{"parameters":["react"]}"#).is_err());
        assert!(parse_request("").is_err());
    }

    #[test]
    fn non_string_query_param_is_none() {
        let req = parse_request(r#"{"method":"query","parameters":[42]}"#).unwrap();
        assert_eq!(req.query_param(), None);
    }

    #[test]
    fn change_query_action_shape() {
        let action = JsonRpcRequest::change_query("nbp", "left-pad");
        assert!(action.dont_hide_after_action);
        assert_eq!(action.method, "Wox.ChangeQuery");
        assert_eq!(action.parameters[0], Value::String("nbp left-pad!".into()));
        assert_eq!(action.parameters[1], Value::Bool(true));
    }

    #[test]
    fn action_omitted_when_absent() {
        let item = ResultItem {
            title: "t".into(),
            subtitle: "s".into(),
            ico_path: "icon.png".into(),
            action: None,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("JsonRPCAction"));
    }

    #[test]
    fn action_serialized_when_present() {
        let item = ResultItem {
            title: "t".into(),
            subtitle: "s".into(),
            ico_path: "icon.png".into(),
            action: Some(JsonRpcRequest::open_browser("react")),
        };
        let json: Value = serde_json::to_value(&item).unwrap();
        assert_eq!(json["JsonRPCAction"]["method"], "openBrowser");
        assert_eq!(json["JsonRPCAction"]["parameters"][0], "react");
        assert_eq!(json["Title"], "t");
        assert_eq!(json["SubTitle"], "s");
        assert_eq!(json["IcoPath"], "icon.png");
    }

    #[test]
    fn response_envelope_uses_result_key() {
        let items = vec![ResultItem {
            title: "t".into(),
            subtitle: "s".into(),
            ico_path: "icon.png".into(),
            action: None,
        }];
        let json = serde_json::to_value(JsonRpcResponse { result: &items }).unwrap();
        assert_eq!(json["Result"].as_array().unwrap().len(), 1);
    }
}
