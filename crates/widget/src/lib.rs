mod binder;
mod sender;
mod toggle;
mod traits;

pub use binder::{bind, ATTR_COMMENT_ID, DELETE_BUTTON_CLASS, FEEDBACK_FORM_CLASS};
pub use sender::{RequestSender, SendError, SendJob, CSRF_HEADER};
pub use toggle::{
    hide_edit_form, show_edit_form, COMMENT_CONTENT_ID_PREFIX, EDIT_FORM_ID_PREFIX,
};
pub use traits::UiHost;

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";

#[derive(Debug, Clone)]
pub struct WidgetConfig {
    // 相对端点前面拼接的基地址，同源部署时留空
    pub base_url: String,
    pub csrf_cookie: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            csrf_cookie: DEFAULT_CSRF_COOKIE.to_string(),
        }
    }
}

// 启动请求发送工作循环，直到 cancel 触发或任务队列关闭。
pub async fn start(
    config: WidgetConfig,
    host: Arc<dyn UiHost>,
    rx: mpsc::Receiver<SendJob>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let sender = Arc::new(RequestSender::new(config, host)?);
    sender.run(rx, cancel).await;
    Ok(())
}
