mod config;
mod fixture;
mod host;

use anyhow::Context;
use dotenvy::dotenv;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use config::Settings;
use host::DemoHost;
use widget::{UiHost, WidgetConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let settings = Settings::new().context("Failed to load configuration")?;
    println!(
        "Feedback widget demo against {}",
        settings.server.base_url
    );

    // --- 1. 采集 CSRF cookie ---
    println!("\n[1/4] Fetching CSRF cookie...");
    let token = match fetch_csrf_token(&settings).await {
        Some(t) => {
            println!("   -> Got {} from server", settings.security.csrf_cookie);
            t
        }
        None => {
            warn!("Server issued no CSRF cookie, using fallback token");
            settings.security.fallback_csrf_token.clone()
        }
    };
    let cookie = format!("{}={}", settings.security.csrf_cookie, token);

    // --- 2. 构建页面并挂载组件 ---
    let fixture = fixture::build_page(&settings, &cookie);
    let create_form = fixture.create_form;
    let edit_form = fixture.edit_form;
    let delete_button = fixture.delete_button;
    let page = Arc::new(Mutex::new(fixture.page));

    let demo_host = Arc::new(DemoHost::new(page.clone()));
    let host: Arc<dyn UiHost> = demo_host;

    let (tx_job, rx_job) = mpsc::channel(100);
    {
        let mut page = page.lock().unwrap();
        widget::bind(&mut page, &tx_job);
    }

    let widget_config = WidgetConfig {
        base_url: settings.server.base_url.clone(),
        csrf_cookie: settings.security.csrf_cookie.clone(),
    };
    let cancel = CancellationToken::new();
    let worker = tokio::spawn(widget::start(widget_config, host, rx_job, cancel.clone()));
    info!("Widget bound, sender worker running");

    // --- 3. 场景 ---
    let comment_id = settings.demo.comment_id.clone();

    println!(
        "\n[2/4] Submitting a new comment on article {}...",
        settings.demo.article_id
    );
    page.lock().unwrap().submit(create_form);
    tokio::time::sleep(Duration::from_secs(1)).await;

    println!("\n[3/4] Editing comment {} inline...", comment_id);
    {
        let mut page = page.lock().unwrap();
        widget::show_edit_form(&mut page, &comment_id);
        page.set_field(edit_form, "comment_content", "Updated from the demo harness");
    }
    page.lock().unwrap().submit(edit_form);
    {
        let mut page = page.lock().unwrap();
        widget::hide_edit_form(&mut page, &comment_id);
    }
    tokio::time::sleep(Duration::from_secs(1)).await;

    println!("\n[4/4] Deleting comment {}...", comment_id);
    page.lock().unwrap().click(delete_button);

    // 给在途请求一个宽限期再收口
    tokio::time::sleep(Duration::from_secs(2)).await;
    cancel.cancel();
    worker.await??;

    println!("\nDone.");
    Ok(())
}

// Django 风格的服务端会在首个 GET 响应里种下 csrftoken cookie。
async fn fetch_csrf_token(settings: &Settings) -> Option<String> {
    let client = reqwest::Client::new();
    let resp = match client.get(&settings.server.base_url).send().await {
        Ok(r) => r,
        Err(e) => {
            warn!("Initial GET {} failed: {}", settings.server.base_url, e);
            return None;
        }
    };

    for value in resp.headers().get_all(reqwest::header::SET_COOKIE) {
        let raw = match value.to_str() {
            Ok(s) => s,
            Err(_) => continue,
        };
        if let Some(token) = domain::protocol::read_cookie(raw, &settings.security.csrf_cookie) {
            return Some(token);
        }
    }
    None
}
