use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn default_method() -> String {
    "GET".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointSpec {
    pub path: String,
    #[serde(default = "default_method")]
    pub method: String,
    // 保持配置文件中的顺序
    #[serde(default)]
    pub query: Option<Map<String, Value>>,
    #[serde(default)]
    pub body: Option<Value>,
}

impl EndpointSpec {
    pub fn method(&self) -> String {
        self.method.to_uppercase()
    }

    /// 查询参数按配置顺序展开成键值对，非字符串的值用其json文本表示
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        match &self.query {
            None => Vec::new(),
            Some(query) => query
                .iter()
                .map(|(k, v)| {
                    let value = match v {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    (k.clone(), value)
                })
                .collect(),
        }
    }

    /// 请求体是否有内容，空值判断与python的真值规则一致
    pub fn has_body(&self) -> bool {
        match &self.body {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(a)) => !a.is_empty(),
            Some(Value::Object(o)) => !o.is_empty(),
        }
    }
}
