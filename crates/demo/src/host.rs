use async_trait::async_trait;
use dom::Page;
use domain::Notice;
use std::sync::{Arc, Mutex};
use tracing::info;
use widget::UiHost;

// 终端版宿主: alert 落到标准输出，reload 只记录一次请求。
pub struct DemoHost {
    page: Arc<Mutex<Page>>,
}

impl DemoHost {
    pub fn new(page: Arc<Mutex<Page>>) -> Self {
        Self { page }
    }
}

#[async_trait]
impl UiHost for DemoHost {
    fn cookies(&self) -> String {
        self.page.lock().unwrap().cookie().to_string()
    }

    fn notify(&self, notice: Notice) {
        match &notice {
            Notice::Success { text } => println!("   [alert] {}", text),
            Notice::Error { text } => eprintln!("   [alert] {}", text),
        }
    }

    async fn reload(&self) {
        // 真浏览器会整页刷新并丢弃状态，这里只宣告
        info!("Page reload requested");
        println!("   [reload] page reload requested");
    }
}
