//! Application configuration module / 应用配置模块
//!
//! Loaded once from config.json at startup and handed to the app state.
//! Creates default config file on first run / 首次运行时创建默认配置文件

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location / 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "GATEWAY_CONFIG";

/// Application configuration / 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Server configuration / 服务器配置
    pub server: ServerConfig,
    /// Object storage configuration / 对象存储配置
    pub storage: StorageConfig,
    /// Upload configuration / 上传配置
    pub upload: UploadConfig,
    /// Static page configuration / 静态页面配置
    pub frontend: FrontendConfig,
}

/// Server configuration / 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address / 服务器监听地址
    pub host: String,
    /// Server port / 服务器端口
    pub port: u16,
}

/// Object storage configuration / 对象存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Driver name: "s3" or "memory" / 驱动类型
    pub driver: String,
    /// Endpoint, with or without scheme / 端点地址
    /// MinIO: localhost:9000
    pub endpoint: String,
    /// 区域
    pub region: String,
    pub access_key: String,
    pub secret_key: String,
    /// Bucket holding every object / 存储桶名称
    pub bucket: String,
    /// Use https when the endpoint has no scheme / 是否使用TLS
    pub use_ssl: bool,
    /// MinIO等需要设置为true
    pub force_path_style: bool,
}

/// Upload configuration / 上传配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Maximum size of one upload form in bytes / 单次上传表单最大字节数
    pub max_size_bytes: usize,
    /// Store uploads under timestamp-suffixed names instead of the original name
    pub unique_names: bool,
}

/// Static page configuration / 静态页面配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// File served at `/` / 首页文件路径
    pub index_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            driver: "s3".to_string(),
            endpoint: "localhost:9000".to_string(),
            region: "us-east-1".to_string(),
            access_key: "admin".to_string(),
            secret_key: "admin123".to_string(),
            bucket: "cloud1".to_string(),
            use_ssl: false,
            force_path_style: true,
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_size_bytes: 10 << 20,
            unique_names: false,
        }
    }
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            index_path: "index.html".to_string(),
        }
    }
}

impl StorageConfig {
    /// Full endpoint URL; scheme comes from `use_ssl` unless already present / 获取完整端点URL
    pub fn endpoint_url(&self) -> String {
        let endpoint = self.endpoint.trim_end_matches('/');
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return endpoint.to_string();
        }
        let scheme = if self.use_ssl { "https" } else { "http" };
        format!("{}://{}", scheme, endpoint)
    }
}

impl AppConfig {
    /// Get the server bind address / 获取服务器绑定地址
    pub fn get_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Get the config file path / 获取配置文件路径
pub fn get_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("config.json")
}

/// Load configuration from file, or create default if not exists / 加载配置文件，不存在则创建默认配置
pub fn load_config() -> Result<AppConfig> {
    load_config_from(&get_config_path())
}

/// Load configuration from an explicit path / 从指定路径加载配置
pub fn load_config_from(config_path: &Path) -> Result<AppConfig> {
    if config_path.exists() {
        let content = std::fs::read_to_string(config_path)
            .map_err(|e| anyhow!("Failed to read config file {:?}: {}", config_path, e))?;

        let config: AppConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {:?}: {}", config_path, e))?;

        tracing::info!("Loaded configuration from {:?}", config_path);
        Ok(config)
    } else {
        let config = AppConfig::default();
        save_config(&config, config_path)?;
        tracing::info!("Created default configuration at {:?}", config_path);
        Ok(config)
    }
}

/// Save configuration to file / 保存配置到文件
pub fn save_config(config: &AppConfig, config_path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(config)
        .map_err(|e| anyhow!("Failed to serialize config: {}", e))?;

    std::fs::write(config_path, content)
        .map_err(|e| anyhow!("Failed to write config file {:?}: {}", config_path, e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_local_minio() {
        let config = AppConfig::default();
        assert_eq!(config.get_bind_address(), "0.0.0.0:8080");
        assert_eq!(config.storage.bucket, "cloud1");
        assert_eq!(config.storage.endpoint_url(), "http://localhost:9000");
        assert_eq!(config.upload.max_size_bytes, 10 * 1024 * 1024);
        assert!(!config.upload.unique_names);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: AppConfig = serde_json::from_str(
            r#"{ "server": { "port": 9090 }, "storage": { "bucket": "photos", "use_ssl": true } }"#,
        )
        .unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.storage.bucket, "photos");
        assert_eq!(config.storage.access_key, "admin");
        assert_eq!(config.storage.endpoint_url(), "https://localhost:9000");
        assert_eq!(config.frontend.index_path, "index.html");
    }

    #[test]
    fn test_endpoint_with_scheme_is_kept() {
        let storage = StorageConfig {
            endpoint: "https://s3.example.com/".to_string(),
            use_ssl: false,
            ..StorageConfig::default()
        };
        assert_eq!(storage.endpoint_url(), "https://s3.example.com");
    }

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = load_config_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.storage.driver, "s3");

        let reloaded = load_config_from(&path).unwrap();
        assert_eq!(reloaded.storage.secret_key, config.storage.secret_key);
    }

    #[test]
    fn test_broken_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(load_config_from(&path).is_err());
    }
}
