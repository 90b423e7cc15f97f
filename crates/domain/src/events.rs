use serde::{Deserialize, Serialize};

// 面向宿主 UI 的通知事件，由宿主决定以弹窗/toast/内联等形式呈现。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    Success { text: String },
    Error { text: String },
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self::Success { text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::Error { text: text.into() }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Success { text } | Self::Error { text } => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}
