use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SUCCESS_TEXT: &str = "Operation successful.";
pub const DEFAULT_ERROR_TEXT: &str = "An unexpected error occurred.";

// 所有端点统一返回的响应信封，多余字段一律忽略。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ResponseEnvelope {
    pub fn success_text(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| DEFAULT_SUCCESS_TEXT.to_string())
    }

    pub fn error_text(&self) -> String {
        format!(
            "Error: {}",
            self.error.as_deref().unwrap_or(DEFAULT_ERROR_TEXT)
        )
    }
}

// 从 cookie 串中取出指定名字的值: 按 ';' 切分、逐项 trim、
// 前缀必须整体等于 "name="，命中第一条即返回。
// 百分号转义按 UTF-8 宽松解码。
pub fn read_cookie(cookie_str: &str, name: &str) -> Option<String> {
    for entry in cookie_str.split(';') {
        let entry = entry.trim();
        if let Some(raw) = entry
            .strip_prefix(name)
            .and_then(|rest| rest.strip_prefix('='))
        {
            return Some(percent_decode_str(raw).decode_utf8_lossy().into_owned());
        }
    }
    None
}
