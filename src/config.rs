use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub listen_addr: String,
    pub log_dir: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = std::env::var("LANGMAP_PORT").unwrap_or_else(|_| "9740".to_string());

        let log_dir = std::env::var("LANGMAP_LOG_DIR").unwrap_or_else(|_| {
            dirs::data_local_dir()
                .map(|d| d.join("langmap").join("logs").to_string_lossy().to_string())
                .unwrap_or_else(|| ".langmap/logs".to_string())
        });

        Self {
            listen_addr: format!("127.0.0.1:{}", port),
            log_dir,
        }
    }
}
