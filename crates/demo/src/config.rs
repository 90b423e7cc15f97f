use config::ConfigError;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub security: SecuritySettings,
    pub demo: DemoSettings,
}

#[derive(Deserialize, Clone)]
pub struct ServerSettings {
    pub base_url: String,
}

#[derive(Deserialize, Clone)]
pub struct SecuritySettings {
    pub csrf_cookie: String,
    // 服务端首个 GET 不下发 cookie 时的兜底值
    pub fallback_csrf_token: String,
}

#[derive(Deserialize, Clone)]
pub struct DemoSettings {
    pub article_id: String,
    pub comment_id: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        let env_map = collect_env_vars();

        let s = config::Config::builder()
            .set_default("server.base_url", "http://127.0.0.1:8000")?
            .set_default("security.csrf_cookie", "csrftoken")?
            .set_default("security.fallback_csrf_token", "demo-csrf-token")?
            .set_default("demo.article_id", "1")?
            .set_default("demo.comment_id", "1")?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::File::with_name(&format!("config.{}", run_mode)).required(false))
            .add_source(config::File::from_str(
                &serde_json::to_string(&env_map)
                    .expect("Environment variables should serialize to JSON"),
                config::FileFormat::Json,
            ))
            .build()?;

        s.try_deserialize()
    }
}

fn collect_env_vars() -> HashMap<String, String> {
    std::env::vars()
        .filter(|(k, _)| k.starts_with("FEEDBACK_"))
        .map(|(k, v)| {
            let new_key = k
                .trim_start_matches("FEEDBACK_")
                .replace("__", ".")
                .to_lowercase();
            (new_key, v)
        })
        .collect()
}
