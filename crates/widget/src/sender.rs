use std::sync::Arc;

use domain::protocol::{self, ResponseEnvelope};
use domain::{FormData, Notice};
use reqwest::multipart;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::error;

use crate::traits::UiHost;
use crate::WidgetConfig;

pub const CSRF_HEADER: &str = "X-CSRFToken";

// 一次待发送的请求: 目标路径与可选的表单载荷。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendJob {
    pub url: String,
    pub payload: Option<FormData>,
}

#[derive(Debug, Error)]
pub enum SendError {
    // 非 2xx 状态一律按传输失败处理，正文不再解析
    #[error("Network response was not ok")]
    BadStatus(reqwest::StatusCode),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

pub struct RequestSender {
    http: reqwest::Client,
    config: WidgetConfig,
    host: Arc<dyn UiHost>,
}

impl RequestSender {
    pub fn new(config: WidgetConfig, host: Arc<dyn UiHost>) -> anyhow::Result<Self> {
        Ok(Self {
            http: reqwest::Client::builder().build()?,
            config,
            host,
        })
    }

    // 工作循环: 每个任务落到独立的并发任务上，在途请求互不排队，
    // 响应以任意顺序回来(与源页面的快速连点竞态一致)。
    pub async fn run(self: Arc<Self>, mut rx: mpsc::Receiver<SendJob>, cancel: CancellationToken) {
        loop {
            tokio::select! {
                job = rx.recv() => {
                    let job = match job {
                        Some(j) => j,
                        None => break,
                    };
                    let sender = self.clone();
                    tokio::spawn(async move { sender.send(job).await });
                },
                _ = cancel.cancelled() => break,
            }
        }
    }

    // 调用方视角 fire-and-forget: 所有结果都在这里消化，不重试。
    pub async fn send(&self, job: SendJob) {
        if let Err(e) = self.dispatch(&job).await {
            error!("Request to {} failed: {:?}", job.url, e);
            self.host.notify(Notice::error(format!("Error: {}", e)));
        }
    }

    async fn dispatch(&self, job: &SendJob) -> Result<(), SendError> {
        // CSRF token 每次请求重新读取，不缓存
        let token = protocol::read_cookie(&self.host.cookies(), &self.config.csrf_cookie);

        let mut req = self
            .http
            .post(format!("{}{}", self.config.base_url, job.url));
        if let Some(token) = token {
            req = req.header(CSRF_HEADER, token);
        }
        if let Some(fields) = &job.payload {
            req = req.multipart(multipart_form(fields));
        }

        let resp = req.send().await?;
        if !resp.status().is_success() {
            return Err(SendError::BadStatus(resp.status()));
        }

        let envelope: ResponseEnvelope = resp.json().await?;
        if envelope.success {
            self.host.notify(Notice::success(envelope.success_text()));
            self.host.reload().await;
        } else {
            self.host.notify(Notice::error(envelope.error_text()));
        }
        Ok(())
    }
}

fn multipart_form(fields: &FormData) -> multipart::Form {
    let mut form = multipart::Form::new();
    for (name, value) in fields.iter() {
        form = form.text(name.to_string(), value.to_string());
    }
    form
}
